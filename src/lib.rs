//! Client-side data and request layer for the Vision Estate front-end: a
//! typed gateway over the listing backend, form validation for the booking
//! flows, and the keyword assistant that fronts them.

pub mod assistant;
pub mod forms;
pub mod gateway;
pub mod models;

pub use assistant::AssistantSession;
pub use gateway::{EstateGateway, GatewayConfig, ListingSource, RemoteError};
pub use models::UserSession;
