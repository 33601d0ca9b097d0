// src/backend/storage/storable.rs
use ic_stable_structures::{storable::Bound, Storable};
use serde::{de::DeserializeOwned, Serialize};
use std::borrow::Cow;

/// Wraps any serde type to make it Storable using CBOR encoding.
#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub struct Cbor<T>(pub T)
where
    T: Serialize + DeserializeOwned;

impl<T> Storable for Cbor<T>
where
    T: Serialize + DeserializeOwned,
{
    fn to_bytes(&self) -> Cow<[u8]> {
        let mut writer = vec![];
        // Stable-structure encoding has no error channel; a failure here traps
        // and the host rolls the message back.
        ciborium::ser::into_writer(&self.0, &mut writer)
            .expect("Failed to serialize value to CBOR for stable storage");
        Cow::Owned(writer)
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        let value: T = ciborium::de::from_reader(bytes.as_ref())
            .expect("Failed to deserialize value from CBOR from stable storage");
        Cbor(value)
    }

    const BOUND: Bound = Bound::Unbounded;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentRecord;
    use candid::Principal;

    #[test]
    fn content_record_survives_stable_encoding() {
        let record = ContentRecord {
            id: 7,
            title: "Doc".to_string(),
            creator: Principal::from_slice(&[1, 2, 3]),
            size_bytes: 100,
            created_at: 42,
            summary: "S".to_string(),
            labels: vec!["a".to_string(), "b".to_string()],
        };
        let wrapped = Cbor(record.clone());
        let bytes = wrapped.to_bytes();
        assert_eq!(Cbor::<ContentRecord>::from_bytes(bytes).0, record);
    }
}
