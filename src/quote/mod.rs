pub mod client;
pub mod error;
pub mod fetch;
pub mod response;
