/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
/// OAuth client secrets and token models
pub mod auth;
/// Chart schema shared by requests and responses
pub mod chart;
/// HTTP request utilities with rate limiting and retry
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
