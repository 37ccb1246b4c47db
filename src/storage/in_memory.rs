//! In-memory store implementations
//!
//! The default backend: thread-safe maps keyed by entity id. Each store call
//! is atomic under its `RwLock`; anything beyond that (the cross-entity write
//! sequences) is sequenced by the lifecycle components.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::entities::booking::model::{Booking, BookingStatus};
use crate::entities::booking::store::BookingStore;
use crate::entities::load::model::{Load, LoadStatus};
use crate::entities::load::store::LoadStore;

// =============================================================================
// Loads
// =============================================================================

#[derive(Clone)]
pub struct InMemoryLoadStore {
    data: Arc<RwLock<HashMap<Uuid, Load>>>,
}

impl InMemoryLoadStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryLoadStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoadStore for InMemoryLoadStore {
    async fn save(&self, load: Load) -> Result<Load> {
        let mut data = self
            .data
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        data.insert(load.id, load.clone());
        Ok(load)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Load>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &Uuid) -> Result<bool> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data.contains_key(id))
    }

    async fn find_all(&self) -> Result<Vec<Load>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data.values().cloned().collect())
    }

    async fn delete(&self, id: &Uuid) -> Result<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(data.remove(id).is_some())
    }

    async fn find_by_shipper_id(&self, shipper_id: &str) -> Result<Vec<Load>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data
            .values()
            .filter(|load| load.shipper_id == shipper_id)
            .cloned()
            .collect())
    }

    async fn find_by_truck_type(&self, truck_type: &str) -> Result<Vec<Load>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data
            .values()
            .filter(|load| load.truck_type == truck_type)
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: LoadStatus) -> Result<Vec<Load>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data
            .values()
            .filter(|load| load.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_shipper_id_and_status(
        &self,
        shipper_id: &str,
        status: LoadStatus,
    ) -> Result<Vec<Load>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data
            .values()
            .filter(|load| load.shipper_id == shipper_id && load.status == status)
            .cloned()
            .collect())
    }
}

// =============================================================================
// Bookings
// =============================================================================

#[derive(Clone)]
pub struct InMemoryBookingStore {
    data: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn save(&self, booking: Booking) -> Result<Booking> {
        let mut data = self
            .data
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        data.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Booking>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &Uuid) -> Result<bool> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data.contains_key(id))
    }

    async fn find_all(&self) -> Result<Vec<Booking>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data.values().cloned().collect())
    }

    async fn delete(&self, id: &Uuid) -> Result<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(data.remove(id).is_some())
    }

    async fn find_by_load_id(&self, load_id: &Uuid) -> Result<Vec<Booking>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data
            .values()
            .filter(|booking| &booking.load_id == load_id)
            .cloned()
            .collect())
    }

    async fn find_by_transporter_id(&self, transporter_id: &str) -> Result<Vec<Booking>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data
            .values()
            .filter(|booking| booking.transporter_id == transporter_id)
            .cloned()
            .collect())
    }

    async fn find_by_load_id_and_transporter_id(
        &self,
        load_id: &Uuid,
        transporter_id: &str,
    ) -> Result<Option<Booking>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data
            .values()
            .find(|booking| {
                &booking.load_id == load_id && booking.transporter_id == transporter_id
            })
            .cloned())
    }

    async fn find_by_load_id_and_status(
        &self,
        load_id: &Uuid,
        status: BookingStatus,
    ) -> Result<Vec<Booking>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data
            .values()
            .filter(|booking| &booking.load_id == load_id && booking.status == status)
            .cloned()
            .collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
