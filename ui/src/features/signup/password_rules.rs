//! Client-side password rules for the create-user form

/// A single password constraint and the message shown when it is violated
#[derive(Clone, Copy)]
pub struct PasswordRule {
    pub message: &'static str,
    violated: fn(&str) -> bool,
}

impl PasswordRule {
    pub fn is_violated_by(&self, password: &str) -> bool {
        (self.violated)(password)
    }
}

pub const MIN_PASSWORD_LENGTH: usize = 10;
pub const MAX_PASSWORD_LENGTH: usize = 24;

/// Rules are evaluated in this order and every violated rule is reported
pub const PASSWORD_RULES: [PasswordRule; 6] = [
    PasswordRule {
        message: "Password must be at least 10 characters long",
        violated: is_too_short,
    },
    PasswordRule {
        message: "Password must be at most 24 characters long",
        violated: is_too_long,
    },
    PasswordRule {
        message: "Password cannot contain spaces",
        violated: has_whitespace,
    },
    PasswordRule {
        message: "Password must contain at least one number",
        violated: lacks_digit,
    },
    PasswordRule {
        message: "Password must contain at least one uppercase letter",
        violated: lacks_uppercase,
    },
    PasswordRule {
        message: "Password must contain at least one lowercase letter",
        violated: lacks_lowercase,
    },
];

/// Length as the browser reports it for an input value (UTF-16 code units)
fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

fn is_too_short(password: &str) -> bool {
    password_length(password) < MIN_PASSWORD_LENGTH
}

fn is_too_long(password: &str) -> bool {
    password_length(password) > MAX_PASSWORD_LENGTH
}

/// The browser's `\s` class: space separators (Zs) plus line terminators,
/// the ASCII controls \t \n \v \f \r and the byte order mark
fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r'
            | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn has_whitespace(password: &str) -> bool {
    password.chars().any(is_browser_whitespace)
}

fn lacks_digit(password: &str) -> bool {
    !password.chars().any(|c| c.is_ascii_digit())
}

fn lacks_uppercase(password: &str) -> bool {
    !password.chars().any(|c| c.is_ascii_uppercase())
}

fn lacks_lowercase(password: &str) -> bool {
    !password.chars().any(|c| c.is_ascii_lowercase())
}

/// Returns the messages of every rule the password violates, in rule order.
/// An empty result means the password is acceptable.
pub fn validate_password(password: &str) -> Vec<String> {
    PASSWORD_RULES
        .iter()
        .filter(|rule| rule.is_violated_by(password))
        .map(|rule| rule.message.to_string())
        .collect()
}
