/// OAuth authentication and token management
pub mod auth;
/// High level client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces (traits) exposed by the client
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
