//! Booking store contract

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Booking, BookingStatus};

/// Durable storage of booking records
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert or fully replace a booking record
    async fn save(&self, booking: Booking) -> Result<Booking>;

    /// Fetch a booking by id
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Booking>>;

    /// Check whether a booking exists without fetching it
    async fn exists_by_id(&self, id: &Uuid) -> Result<bool>;

    /// All bookings, in no guaranteed order
    async fn find_all(&self) -> Result<Vec<Booking>>;

    /// Hard-delete; returns whether a record was removed
    async fn delete(&self, id: &Uuid) -> Result<bool>;

    async fn find_by_load_id(&self, load_id: &Uuid) -> Result<Vec<Booking>>;

    async fn find_by_transporter_id(&self, transporter_id: &str) -> Result<Vec<Booking>>;

    async fn find_by_load_id_and_transporter_id(
        &self,
        load_id: &Uuid,
        transporter_id: &str,
    ) -> Result<Option<Booking>>;

    async fn find_by_load_id_and_status(
        &self,
        load_id: &Uuid,
        status: BookingStatus,
    ) -> Result<Vec<Booking>>;
}
