//! Booking entity model
//!
//! A booking is a transporter's offer against a specific load. Like the load
//! status, the booking status is a permissive tag; the status-update
//! operation accepts any value without a transition guard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::validation::validators::{non_blank, positive, required};
use crate::core::validation::{ValidatedInput, ValidationRules};
use crate::entities::load::model::Load;

/// Lifecycle tag of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A transporter's offer against a load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub load_id: Uuid,
    pub transporter_id: String,
    pub proposed_rate: f64,
    pub comment: Option<String>,
    pub status: BookingStatus,
    pub requested_at: DateTime<Utc>,
}

impl Booking {
    /// Build a new booking from caller input. Identity, request timestamp and
    /// status are server-assigned; status is always `PENDING` at creation.
    pub fn new(input: BookingInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            load_id: input.load_id,
            transporter_id: input.transporter_id,
            proposed_rate: input.proposed_rate,
            comment: input.comment,
            status: BookingStatus::Pending,
            requested_at: Utc::now(),
        }
    }
}

/// Booking representation returned by the API: the booking plus the full
/// referenced load when the reference still resolves (read-after-write join)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub id: Uuid,
    pub load_id: Uuid,
    pub transporter_id: String,
    pub proposed_rate: f64,
    pub comment: Option<String>,
    pub status: BookingStatus,
    pub requested_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<Load>,
}

impl BookingView {
    pub fn new(booking: Booking, load: Option<Load>) -> Self {
        Self {
            id: booking.id,
            load_id: booking.load_id,
            transporter_id: booking.transporter_id,
            proposed_rate: booking.proposed_rate,
            comment: booking.comment,
            status: booking.status,
            requested_at: booking.requested_at,
            load,
        }
    }
}

/// Caller-settable booking fields, shared by create and full update
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    pub load_id: Uuid,
    pub transporter_id: String,
    pub proposed_rate: f64,
    pub comment: Option<String>,
}

impl ValidatedInput for BookingInput {
    fn rules() -> ValidationRules {
        ValidationRules::new()
            .rule("loadId", required("Load ID is required"))
            .rule("transporterId", non_blank("Transporter ID is required"))
            .rule("proposedRate", required("Proposed rate is required"))
            .rule("proposedRate", positive("Proposed rate must be positive"))
    }
}

/// At most one list filter is honored; loadId takes priority
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilter {
    pub load_id: Option<Uuid>,
    pub transporter_id: Option<String>,
}
