//! # loadboard
//!
//! A freight marketplace backend. Shippers post loads (shipment requests),
//! transporters submit bookings (offers) against them, and the system tracks
//! both lifecycles through a small set of linked status transitions:
//!
//! - Creating a booking marks the referenced load `BOOKED` (idempotent
//!   overwrite; every booking against the same load re-triggers it).
//! - Deleting any one booking marks the load `CANCELLED`, regardless of other
//!   active bookings.
//! - A booking can never be created against a `CANCELLED` load.
//!
//! Everything else is CRUD: two resource collections (`/load`, `/booking`)
//! with create, filtered list, get, full update, delete, and a dedicated
//! status-update operation each. The status fields are deliberately
//! permissive tags: the status-update operations accept any value in the
//! domain with no transition guard.
//!
//! ## Architecture
//!
//! - [`entities`]: per-entity model, store contract, lifecycle component and
//!   HTTP handlers. The booking component holds a reference to the load
//!   component for the cross-entity transitions.
//! - [`storage`]: store implementations (in-memory by default).
//! - [`core`]: the error taxonomy and the request-validation machinery.
//! - [`server`]: router assembly and shared handler state.
//! - [`config`]: server configuration.

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::core::error::{ApiError, ApiResult, ErrorBody};
    pub use crate::core::validation::{FieldError, Validated, ValidatedInput, ValidationRules};
    pub use crate::entities::booking::{
        Booking, BookingFilter, BookingInput, BookingService, BookingStatus, BookingStore,
        BookingView,
    };
    pub use crate::entities::load::{
        Facility, Load, LoadFilter, LoadInput, LoadService, LoadStatus, LoadStore,
    };
    pub use crate::server::{AppState, build_router};
    pub use crate::storage::{InMemoryBookingStore, InMemoryLoadStore};
}
