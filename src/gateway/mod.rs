pub mod client;
pub mod config;
pub mod error;
pub mod traits;

pub use client::EstateGateway;
pub use config::GatewayConfig;
pub use error::{extract_error_message, RemoteCause, RemoteError};
pub use traits::ListingSource;
