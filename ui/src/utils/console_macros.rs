/// Macros for properly formatted console logging.
/// On WASM these go to the browser console through gloo_console with a timestamp
/// prefix; on other targets (tests, desktop builds) they are forwarded to `tracing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleLevel {
    Debug,
    Log,
    Info,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
pub fn emit(level: ConsoleLevel, message: String) {
    let line = format!("[{}] {}", js_sys::Date::now(), message);
    match level {
        ConsoleLevel::Debug => gloo_console::debug!(line),
        ConsoleLevel::Log => gloo_console::log!(line),
        ConsoleLevel::Info => gloo_console::info!(line),
        ConsoleLevel::Warn => gloo_console::warn!(line),
        ConsoleLevel::Error => gloo_console::error!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: ConsoleLevel, message: String) {
    match level {
        ConsoleLevel::Debug => tracing::debug!("{}", message),
        ConsoleLevel::Log | ConsoleLevel::Info => tracing::info!("{}", message),
        ConsoleLevel::Warn => tracing::warn!("{}", message),
        ConsoleLevel::Error => tracing::error!("{}", message),
    }
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Info,
            format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Log,
            format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Warn,
            format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Error,
            format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Debug,
            format!($($arg)*),
        )
    };
}
