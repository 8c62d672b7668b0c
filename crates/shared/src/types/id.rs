//! Typed IDs for type-safe record references.
//!
//! Using typed IDs prevents accidentally passing a `ContactId` where an
//! `OrganizationId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(OrganizationId, "Unique identifier for an organization.");
typed_id!(ContactId, "Unique identifier for a contact person.");
typed_id!(ProductId, "Unique identifier for a catalog product.");
typed_id!(NoteId, "Unique identifier for a CRM note.");
typed_id!(OfferId, "Unique identifier for an offer document.");
typed_id!(InvoiceId, "Unique identifier for an invoice document.");
typed_id!(EntryId, "Unique identifier for a bookkeeping entry.");

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_typed_ids_are_distinct_types() {
        // Compile-time property: this would not build if the wrappers
        // collapsed to a single type. Runtime check is on the inner value.
        let org = OrganizationId::new();
        let contact = ContactId::new();
        assert_ne!(org.into_inner(), contact.into_inner());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let id = InvoiceId::new();
        let parsed = InvoiceId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_v7_ids_are_time_ordered() {
        let first = EntryId::new();
        let second = EntryId::new();
        assert!(first.into_inner() <= second.into_inner());
    }
}
