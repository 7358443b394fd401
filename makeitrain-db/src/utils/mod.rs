use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// Stable across runs and systems:
/// - CBOR gives a deterministic binary representation
/// - XxHash64 uses a fixed seed (0)
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

/// Content hash of an auditable record, computed with its own `hash` zeroed.
pub fn content_hash<T>(record: &T) -> Result<i64, String>
where
    T: Serialize + Clone + crate::models::auditable::Auditable,
{
    let mut for_hashing = record.clone();
    for_hashing.set_hash(0);
    hash_as_i64(&for_hashing)
}
