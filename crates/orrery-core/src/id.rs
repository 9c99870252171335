//! Strongly-typed identifiers for celestial bodies and vessels.

use std::fmt;

/// Identifies a celestial body within a [`CelestialSystem`].
///
/// Bodies are registered at system construction and assigned sequential
/// IDs. `BodyId(n)` corresponds to the n-th body in registration order,
/// which is also the index used by the wire-level frame parameter
/// encoding — the external trajectory engine addresses bodies by this
/// index, so it is stable for the lifetime of a session.
///
/// [`CelestialSystem`]: https://docs.rs/orrery-system
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BodyId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a vessel within the driving session.
///
/// Vessels are owned by the session layer, not by this library; the ID
/// exists so a target override can be compared and logged without
/// holding the session's vessel object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VesselId(pub u64);

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VesselId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
