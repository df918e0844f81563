use core::fmt;
use core::num::NonZeroU32;

use crate::error::{PtError, PtResult};

/// Compact, stable identifier for host objects (elements and ports).
///
/// - `u32` matches the integer ids the host model hands out
/// - `NonZero` enables `Option<Id>` to be pointer-optimized, which matters
///   because port owners are optional
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// Panics on `u32::MAX`; use [`Id::try_from_index`] for untrusted input.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Checked variant of [`Id::from_index`] for ids read from files.
    pub fn try_from_index(index: u32, what: &'static str) -> PtResult<Self> {
        index
            .checked_add(1)
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(PtError::IdOutOfRange { what, raw: index })
    }

    /// Recover the 0-based index (the host's raw id).
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Id {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Id {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u32::deserialize(deserializer)?;
        Id::try_from_index(raw, "id").map_err(serde::de::Error::custom)
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type ElementId = Id;
pub type PortId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = Id::from_index(i);
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn option_id_is_small() {
        // Port owners are Option<ElementId>; keep them the size of a u32.
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }

    #[test]
    fn try_from_index_rejects_max() {
        assert!(Id::try_from_index(u32::MAX, "element").is_err());
        assert_eq!(Id::try_from_index(7, "element").unwrap().index(), 7);
    }

    #[test]
    fn display_is_raw_host_id() {
        assert_eq!(Id::from_index(1234).to_string(), "1234");
    }
}
