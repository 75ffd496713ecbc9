//! Infrastructure Services
//!
//! - **client**: signup endpoint client and the `SignupApi` seam
//! - **config**: endpoint and credential configuration
//!
//! The services are WASM-first, using async traits without Send bounds.

pub mod client;
pub mod config;
