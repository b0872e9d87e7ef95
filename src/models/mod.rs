use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A listed property as served by the backend.
///
/// Everything except `id`, `title` and `price` is optional on the wire and
/// decodes to `None` when absent. Absent fields stay absent; nothing here
/// invents defaults for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Opaque backend identifier, unique and stable.
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Currency-agnostic amount; the backend decides the unit.
    pub price: f64,
    pub location: Option<String>,
    /// Bedroom count (the "2 BHK" figure).
    pub bhk: Option<u32>,
    /// Floor area in sqft.
    pub area: Option<f64>,
    /// Open-ended amenity map; keys are backend-defined.
    pub amenities: Option<HashMap<String, Value>>,
    pub eco_score: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub model_3d_url: Option<String>,
}

/// A booking record as the server returns it.
///
/// Created only through the gateway's create-booking call and never mutated
/// client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    /// Absent for guest bookings, which carry `name`/`email` instead.
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub property_id: String,
    /// Server-assigned; opaque to this client.
    pub status: String,
    /// Opaque milestone descriptor.
    pub milestones: String,
    pub created_at: DateTime<Utc>,
}

/// A scheduled site visit as the server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteVisit {
    pub id: String,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub property_id: String,
    pub visit_date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /api/bookings`.
///
/// `None` fields stay off the wire entirely, so a guest payload carries
/// `name`/`email` and no `user_id` key, and a signed-in payload the reverse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub property_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_payment: Option<f64>,
}

/// Payload for `POST /api/site-visits`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteVisitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub property_id: String,
    pub visit_date: DateTime<Utc>,
}

/// Authenticated identity handed in by the host application.
///
/// Always passed explicitly; neither the gateway nor the assistant reads
/// ambient auth state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub email: String,
}

impl UserSession {
    /// Read the session from `ESTATE_USER_ID` / `ESTATE_USER_EMAIL`.
    ///
    /// Returns `None` unless both are set and non-empty, which callers treat
    /// as the guest case.
    pub fn from_env() -> Option<Self> {
        let user_id = std::env::var("ESTATE_USER_ID")
            .ok()
            .filter(|v| !v.is_empty())?;
        let email = std::env::var("ESTATE_USER_EMAIL")
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(Self { user_id, email })
    }
}
