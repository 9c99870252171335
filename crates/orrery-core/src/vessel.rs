//! The vessel type used for frame target overrides.

use crate::id::VesselId;

/// A vessel that can stand in for a celestial body as the frame target.
///
/// When a vessel is targeted, the displayed frame becomes relative to
/// the vessel rather than to a fixed celestial body. This library only
/// needs the vessel's identity and display name; everything else about
/// the vessel lives in the session layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vessel {
    /// Session-stable identifier.
    pub id: VesselId,
    /// Display name, passed verbatim to localization templates.
    pub name: String,
}

impl Vessel {
    /// Create a vessel handle.
    pub fn new(id: VesselId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
