// Service exports
pub mod upstream;

pub use upstream::{UpstreamClient, UpstreamError};
