pub mod catalog;
pub mod matcher;
pub mod session;

pub use catalog::{promoted_catalog, CatalogEntry};
pub use matcher::{manual_fallback_message, match_input, resolve_booking_target, Reply};
pub use session::{AssistantSession, ChatMessage, Sender};
