//! Load entity: model, store contract, lifecycle component, HTTP handlers

pub mod handlers;
pub mod model;
pub mod service;
pub mod store;

pub use model::{Facility, Load, LoadFilter, LoadInput, LoadStatus};
pub use service::LoadService;
pub use store::LoadStore;
