//! Load lifecycle component
//!
//! Owns load validation and status transitions. Creation forces `POSTED`;
//! the generic update never touches status or the posted timestamp; the
//! status-update operation overwrites unconditionally (no transition guard)
//! and is also the entry point the booking component uses for its
//! cross-entity side effects.

use std::sync::Arc;
use uuid::Uuid;

use super::model::{Load, LoadFilter, LoadInput, LoadStatus};
use super::store::LoadStore;
use crate::core::error::{ApiError, ApiResult};

pub struct LoadService {
    store: Arc<dyn LoadStore>,
}

impl LoadService {
    pub fn new(store: Arc<dyn LoadStore>) -> Self {
        Self { store }
    }

    /// Create a load. Status is forced to `POSTED` regardless of caller input.
    pub async fn create_load(&self, input: LoadInput) -> ApiResult<Load> {
        tracing::info!(shipper_id = %input.shipper_id, "creating load");

        let load = Load::new(input);
        let load = self.store.save(load).await?;

        tracing::info!(id = %load.id, "load created");
        Ok(load)
    }

    pub async fn get_load(&self, id: &Uuid) -> ApiResult<Load> {
        tracing::info!(%id, "fetching load");

        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Load", "id", id))
    }

    /// List loads. At most one filter dimension is honored, in priority order
    /// shipperId > truckType > status; with none supplied, all loads return.
    pub async fn list_loads(&self, filter: LoadFilter) -> ApiResult<Vec<Load>> {
        let loads = if let Some(shipper_id) = filter.shipper_id {
            tracing::info!(%shipper_id, "fetching loads by shipper");
            self.store.find_by_shipper_id(&shipper_id).await?
        } else if let Some(truck_type) = filter.truck_type {
            tracing::info!(%truck_type, "fetching loads by truck type");
            self.store.find_by_truck_type(&truck_type).await?
        } else if let Some(status) = filter.status {
            tracing::info!(?status, "fetching loads by status");
            self.store.find_by_status(status).await?
        } else {
            tracing::info!("fetching all loads");
            self.store.find_all().await?
        };

        Ok(loads)
    }

    /// Overwrite every caller-settable field. Status and the posted timestamp
    /// are never touched here; status changes go through `update_load_status`.
    pub async fn update_load(&self, id: &Uuid, input: LoadInput) -> ApiResult<Load> {
        tracing::info!(%id, "updating load");

        let mut load = self.get_load(id).await?;
        load.shipper_id = input.shipper_id;
        load.facility = input.facility;
        load.product_type = input.product_type;
        load.truck_type = input.truck_type;
        load.no_of_trucks = input.no_of_trucks;
        load.weight = input.weight;
        load.comment = input.comment;

        let load = self.store.save(load).await?;

        tracing::info!(id = %load.id, "load updated");
        Ok(load)
    }

    /// Hard-delete. Bookings referencing this load are left untouched.
    pub async fn delete_load(&self, id: &Uuid) -> ApiResult<()> {
        tracing::info!(%id, "deleting load");

        if !self.store.delete(id).await? {
            return Err(ApiError::not_found("Load", "id", id));
        }

        tracing::info!(%id, "load deleted");
        Ok(())
    }

    /// Unconditionally overwrite the status; any value in the domain is
    /// accepted from any current status.
    pub async fn update_load_status(&self, id: &Uuid, status: LoadStatus) -> ApiResult<Load> {
        tracing::info!(%id, ?status, "updating load status");

        let mut load = self.get_load(id).await?;
        load.status = status;
        let load = self.store.save(load).await?;

        tracing::info!(id = %load.id, ?status, "load status updated");
        Ok(load)
    }
}
