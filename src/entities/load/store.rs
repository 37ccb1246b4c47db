//! Load store contract
//!
//! The lifecycle component is agnostic to the backing store; implementations
//! provide keyed access plus the attribute finders the list operation needs.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Load, LoadStatus};

/// Durable storage of load records
#[async_trait]
pub trait LoadStore: Send + Sync {
    /// Insert or fully replace a load record
    async fn save(&self, load: Load) -> Result<Load>;

    /// Fetch a load by id
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Load>>;

    /// Check whether a load exists without fetching it
    async fn exists_by_id(&self, id: &Uuid) -> Result<bool>;

    /// All loads, in no guaranteed order
    async fn find_all(&self) -> Result<Vec<Load>>;

    /// Hard-delete; returns whether a record was removed
    async fn delete(&self, id: &Uuid) -> Result<bool>;

    async fn find_by_shipper_id(&self, shipper_id: &str) -> Result<Vec<Load>>;

    async fn find_by_truck_type(&self, truck_type: &str) -> Result<Vec<Load>>;

    async fn find_by_status(&self, status: LoadStatus) -> Result<Vec<Load>>;

    async fn find_by_shipper_id_and_status(
        &self,
        shipper_id: &str,
        status: LoadStatus,
    ) -> Result<Vec<Load>>;
}
