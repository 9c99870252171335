//! The closed set of reference-frame kinds and their wire tags.

use std::fmt;

/// A reference-frame convention for trajectory display.
///
/// The discriminants are the wire tags consumed by the external
/// trajectory engine. They are a persisted, cross-component contract:
/// changing them breaks every consumer that decodes frame parameters,
/// so they must never be renumbered.
///
/// # Examples
///
/// ```
/// use orrery_core::FrameKind;
///
/// assert_eq!(FrameKind::BodyCentredNonRotating.tag(), 6000);
/// assert_eq!(FrameKind::from_tag(6003), Some(FrameKind::BodySurface));
/// assert_eq!(FrameKind::from_tag(42), None);
/// ```
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// Frame fixed on a body's centre, axes non-rotating.
    BodyCentredNonRotating = 6000,
    /// Frame fixed on the barycentre of a body and its parent, rotating
    /// with their mutual orbit.
    BarycentricRotating = 6001,
    /// Frame fixed on a body, one axis rotating to track the direction
    /// to its parent.
    BodyCentredParentDirection = 6002,
    /// Frame fixed to a body's rotating surface.
    BodySurface = 6003,
}

impl FrameKind {
    /// All kinds, in tag order. Used by UI kind selectors and by
    /// property tests to enumerate the full variant space.
    pub const ALL: [FrameKind; 4] = [
        FrameKind::BodyCentredNonRotating,
        FrameKind::BarycentricRotating,
        FrameKind::BodyCentredParentDirection,
        FrameKind::BodySurface,
    ];

    /// The wire tag for this kind.
    pub const fn tag(self) -> i32 {
        self as i32
    }

    /// Look up a kind by wire tag. Returns `None` for unrecognized tags.
    pub const fn from_tag(tag: i32) -> Option<FrameKind> {
        match tag {
            6000 => Some(FrameKind::BodyCentredNonRotating),
            6001 => Some(FrameKind::BarycentricRotating),
            6002 => Some(FrameKind::BodyCentredParentDirection),
            6003 => Some(FrameKind::BodySurface),
            _ => None,
        }
    }

    /// Whether this kind is only defined for bodies that orbit a parent.
    ///
    /// Barycentric and parent-direction frames are mathematically
    /// undefined for the root body: there is no second body to form a
    /// barycentre with, and no parent direction to track.
    pub const fn requires_parent(self) -> bool {
        matches!(
            self,
            FrameKind::BarycentricRotating | FrameKind::BodyCentredParentDirection
        )
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FrameKind::BodyCentredNonRotating => "body-centred non-rotating",
            FrameKind::BarycentricRotating => "barycentric rotating",
            FrameKind::BodyCentredParentDirection => "body-centred parent-direction",
            FrameKind::BodySurface => "body surface",
        };
        f.write_str(s)
    }
}
