//! City identifiers.
//!
//! `CityId` is the dense registry index of a city.  The inner integer is
//! `pub` so matrices can be addressed directly, but prefer `.index()`.

use std::fmt;

/// Dense index of a city in the registry.  Assigned in insertion order and
/// never reused or changed for the lifetime of a graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityId(pub u32);

impl CityId {
    /// "No city": marks empty predecessor cells.
    pub const INVALID: CityId = CityId(u32::MAX);

    /// Cast to `usize` for matrix addressing.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for CityId {
    /// The `INVALID` sentinel, so unset ids are visibly invalid.
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.0)
    }
}

impl From<CityId> for usize {
    fn from(id: CityId) -> usize {
        id.index()
    }
}

impl TryFrom<usize> for CityId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<CityId, Self::Error> {
        u32::try_from(n).map(CityId)
    }
}
