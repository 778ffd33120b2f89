pub mod cache;
pub mod client;
pub mod error;
pub mod provider;
pub mod response;
