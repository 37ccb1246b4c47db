//! Axum extractor for validated request payloads
//!
//! `Validated<T>` buffers the JSON body, runs the input type's
//! [`ValidationRules`] against the raw payload (collecting every violation),
//! and only then deserializes into `T`. Handlers therefore receive fully
//! checked, typed inputs.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ValidationRules;
use crate::core::error::ApiError;

/// Trait for input payloads that carry field constraints
pub trait ValidatedInput: DeserializeOwned {
    /// The rule set applied before deserialization
    fn rules() -> ValidationRules;
}

/// Extractor wrapping a validated, deserialized input
///
/// ```rust,ignore
/// pub async fn create_load(
///     State(state): State<AppState>,
///     Validated(input): Validated<LoadInput>,
/// ) -> ApiResult<(StatusCode, Json<Load>)> {
///     // input already satisfies every field constraint
/// }
/// ```
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatedInput + Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Malformed JSON request body: {}", e)))?;

        T::rules()
            .validate(&payload)
            .map_err(ApiError::Validation)?;

        let input = serde_json::from_value(payload)
            .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))?;

        Ok(Validated(input))
    }
}
