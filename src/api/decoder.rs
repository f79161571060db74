use log::debug;
use serde::de::DeserializeOwned;

use super::error::ApiResult;

/// Decode a response body into `T`.
///
/// Leniency lives on the record types themselves (unknown keys ignored,
/// optional fields defaulted, loose scalars accepted); this only maps
/// serde_json failures onto [`ApiError::Decode`](super::ApiError::Decode).
pub fn decode<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let value = serde_json::from_str(text)?;
    debug!("Decoded {} bytes into {}", text.len(), std::any::type_name::<T>());
    Ok(value)
}
