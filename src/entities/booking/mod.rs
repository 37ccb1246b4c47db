//! Booking entity: model, store contract, lifecycle component, HTTP handlers

pub mod handlers;
pub mod model;
pub mod service;
pub mod store;

pub use model::{Booking, BookingFilter, BookingInput, BookingStatus, BookingView};
pub use service::BookingService;
pub use store::BookingStore;
