//! Load entity model
//!
//! A load is a freight shipment request posted by a shipper. The status field
//! is a permissive tag: the only transitions the system itself drives are
//! `POSTED -> BOOKED` (first booking created) and `* -> CANCELLED` (a booking
//! deleted), but the status-update operation accepts any value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::validation::validators::{min_int, non_blank, positive, required};
use crate::core::validation::{ValidatedInput, ValidationRules};

/// Lifecycle tag of a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadStatus {
    Posted,
    Booked,
    Cancelled,
}

/// Loading/unloading location and schedule of a load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub loading_point: String,
    pub unloading_point: String,
    pub loading_date: DateTime<Utc>,
    pub unloading_date: DateTime<Utc>,
}

/// A posted freight shipment request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    pub id: Uuid,
    pub shipper_id: String,
    pub facility: Facility,
    pub product_type: String,
    pub truck_type: String,
    pub no_of_trucks: i32,
    pub weight: f64,
    pub comment: Option<String>,
    pub date_posted: DateTime<Utc>,
    pub status: LoadStatus,
}

impl Load {
    /// Build a new load from caller input. Identity, posted timestamp and
    /// status are server-assigned; any values the caller sent for them were
    /// already discarded by the input type.
    pub fn new(input: LoadInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            shipper_id: input.shipper_id,
            facility: input.facility,
            product_type: input.product_type,
            truck_type: input.truck_type,
            no_of_trucks: input.no_of_trucks,
            weight: input.weight,
            comment: input.comment,
            date_posted: Utc::now(),
            status: LoadStatus::Posted,
        }
    }
}

/// Caller-settable load fields, shared by create and full update
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadInput {
    pub shipper_id: String,
    pub facility: Facility,
    pub product_type: String,
    pub truck_type: String,
    pub no_of_trucks: i32,
    pub weight: f64,
    pub comment: Option<String>,
}

impl ValidatedInput for LoadInput {
    fn rules() -> ValidationRules {
        ValidationRules::new()
            .rule("shipperId", non_blank("Shipper ID is required"))
            .rule("facility", required("Facility details are required"))
            .rule("facility.loadingPoint", non_blank("Loading point is required"))
            .rule(
                "facility.unloadingPoint",
                non_blank("Unloading point is required"),
            )
            .rule("facility.loadingDate", required("Loading date is required"))
            .rule(
                "facility.unloadingDate",
                required("Unloading date is required"),
            )
            .rule("productType", non_blank("Product type is required"))
            .rule("truckType", non_blank("Truck type is required"))
            .rule("noOfTrucks", required("Number of trucks is required"))
            .rule(
                "noOfTrucks",
                min_int(1, "Number of trucks must be at least 1"),
            )
            .rule("weight", required("Weight is required"))
            .rule("weight", positive("Weight must be positive"))
    }
}

/// At most one list filter is honored, in this priority order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadFilter {
    pub shipper_id: Option<String>,
    pub truck_type: Option<String>,
    pub status: Option<LoadStatus>,
}
