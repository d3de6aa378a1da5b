//! Strongly-typed identifiers used across the warehouse domain.
//!
//! Items and shelves are keyed by small integers (the store hands out
//! item ids; shelf ids come from the caller's warehouse layout), so these
//! wrap `u64` rather than a UUID.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An identifier string failed to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid identifier: {0}")]
pub struct ParseIdError(String);

/// Identifier of an inventory item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

/// Identifier of a storage shelf (a node in the connectivity graph).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShelfId(u64);

macro_rules! impl_u64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = u64::from_str(s)
                    .map_err(|e| ParseIdError(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_u64_newtype!(ItemId, "ItemId");
impl_u64_newtype!(ShelfId, "ShelfId");
