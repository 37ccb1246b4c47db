//! Booking lifecycle component
//!
//! Owns booking validation and orchestrates the cross-entity load
//! transitions: creating a booking marks the referenced load `BOOKED`
//! (idempotent overwrite, re-triggered by every booking against the same
//! load), and deleting any one booking marks the load `CANCELLED` regardless
//! of other active bookings. Both transitions go through the load component's
//! status-update operation, never by writing the load store directly.

use std::sync::Arc;
use uuid::Uuid;

use super::model::{Booking, BookingFilter, BookingInput, BookingStatus, BookingView};
use super::store::BookingStore;
use crate::core::error::{ApiError, ApiResult};
use crate::entities::load::model::LoadStatus;
use crate::entities::load::service::LoadService;
use crate::entities::load::store::LoadStore;

pub struct BookingService {
    store: Arc<dyn BookingStore>,
    load_store: Arc<dyn LoadStore>,
    loads: Arc<LoadService>,
}

impl BookingService {
    pub fn new(
        store: Arc<dyn BookingStore>,
        load_store: Arc<dyn LoadStore>,
        loads: Arc<LoadService>,
    ) -> Self {
        Self {
            store,
            load_store,
            loads,
        }
    }

    /// Create a booking against an existing, non-cancelled load. Status is
    /// forced to `PENDING`; the referenced load is marked `BOOKED`.
    pub async fn create_booking(&self, input: BookingInput) -> ApiResult<BookingView> {
        tracing::info!(
            load_id = %input.load_id,
            transporter_id = %input.transporter_id,
            "creating booking"
        );

        let load = self
            .load_store
            .find_by_id(&input.load_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Load", "id", input.load_id))?;

        if load.status == LoadStatus::Cancelled {
            return Err(ApiError::BadRequest(
                "Cannot create booking for a cancelled load".to_string(),
            ));
        }

        let booking = Booking::new(input);
        let booking = self.store.save(booking).await?;

        self.loads
            .update_load_status(&load.id, LoadStatus::Booked)
            .await?;

        tracing::info!(id = %booking.id, "booking created");
        self.to_view(booking).await
    }

    pub async fn get_booking(&self, id: &Uuid) -> ApiResult<BookingView> {
        tracing::info!(%id, "fetching booking");

        let booking = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Booking", "id", id))?;

        self.to_view(booking).await
    }

    /// List bookings. At most one filter dimension is honored: loadId (which
    /// must reference an existing load) takes priority over transporterId.
    pub async fn list_bookings(&self, filter: BookingFilter) -> ApiResult<Vec<BookingView>> {
        let bookings = if let Some(load_id) = filter.load_id {
            tracing::info!(%load_id, "fetching bookings by load");
            if !self.load_store.exists_by_id(&load_id).await? {
                return Err(ApiError::not_found("Load", "id", load_id));
            }
            self.store.find_by_load_id(&load_id).await?
        } else if let Some(transporter_id) = filter.transporter_id {
            tracing::info!(%transporter_id, "fetching bookings by transporter");
            self.store.find_by_transporter_id(&transporter_id).await?
        } else {
            tracing::info!("fetching all bookings");
            self.store.find_all().await?
        };

        let mut views = Vec::with_capacity(bookings.len());
        for booking in bookings {
            views.push(self.to_view(booking).await?);
        }
        Ok(views)
    }

    /// Overwrite every caller-settable field. The new loadId must reference
    /// an existing load; status and the request timestamp are never touched.
    pub async fn update_booking(&self, id: &Uuid, input: BookingInput) -> ApiResult<BookingView> {
        tracing::info!(%id, "updating booking");

        let mut booking = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Booking", "id", id))?;

        if !self.load_store.exists_by_id(&input.load_id).await? {
            return Err(ApiError::not_found("Load", "id", input.load_id));
        }

        booking.load_id = input.load_id;
        booking.transporter_id = input.transporter_id;
        booking.proposed_rate = input.proposed_rate;
        booking.comment = input.comment;

        let booking = self.store.save(booking).await?;

        tracing::info!(id = %booking.id, "booking updated");
        self.to_view(booking).await
    }

    /// Hard-delete the booking and mark the associated load `CANCELLED`.
    /// Deleting any one booking cancels the entire load, even when other
    /// bookings against it remain.
    pub async fn delete_booking(&self, id: &Uuid) -> ApiResult<()> {
        tracing::info!(%id, "deleting booking");

        let booking = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Booking", "id", id))?;

        let load = self
            .load_store
            .find_by_id(&booking.load_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Load", "id", booking.load_id))?;

        self.store.delete(id).await?;

        self.loads
            .update_load_status(&load.id, LoadStatus::Cancelled)
            .await?;

        tracing::info!(%id, "booking deleted");
        Ok(())
    }

    /// Unconditionally overwrite the status; no transition guard and no side
    /// effect on the associated load.
    pub async fn update_booking_status(
        &self,
        id: &Uuid,
        status: BookingStatus,
    ) -> ApiResult<BookingView> {
        tracing::info!(%id, ?status, "updating booking status");

        let mut booking = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Booking", "id", id))?;

        booking.status = status;
        let booking = self.store.save(booking).await?;

        tracing::info!(id = %booking.id, ?status, "booking status updated");
        self.to_view(booking).await
    }

    async fn to_view(&self, booking: Booking) -> ApiResult<BookingView> {
        let load = self.load_store.find_by_id(&booking.load_id).await?;
        Ok(BookingView::new(booking, load))
    }
}
