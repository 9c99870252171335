//! The frame specification: a kind paired with the selected body.

use orrery_core::{BodyId, FrameKind};
use orrery_system::CelestialSystem;

/// A fully-specified reference frame: which convention, anchored where.
///
/// The authoritative selection state. The wire-level
/// [`FrameParameters`](crate::FrameParameters) record is always derived
/// fresh from a `FrameSpec`, never the other way round.
///
/// # Validity
///
/// Barycentric and parent-direction kinds are undefined for the root
/// body. [`FrameSpec::normalized`] applies the selector's smoothing rule
/// (fall back to body-centred non-rotating); [`FrameSpec::is_valid`]
/// checks without correcting.
///
/// # Examples
///
/// ```
/// use orrery_core::FrameKind;
/// use orrery_frames::FrameSpec;
/// use orrery_system::CelestialSystemBuilder;
///
/// let mut b = CelestialSystemBuilder::new();
/// let sun = b.root("Sun").unwrap();
/// let earth = b.body("Earth", sun).unwrap();
/// let system = b.build().unwrap();
///
/// let spec = FrameSpec::normalized(&system, FrameKind::BarycentricRotating, sun);
/// assert_eq!(spec.kind, FrameKind::BodyCentredNonRotating);
///
/// let spec = FrameSpec::normalized(&system, FrameKind::BarycentricRotating, earth);
/// assert_eq!(spec.kind, FrameKind::BarycentricRotating);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSpec {
    /// The frame convention.
    pub kind: FrameKind,
    /// The body the frame is anchored to.
    pub body: BodyId,
}

impl FrameSpec {
    /// Pair `kind` with `body`, silently substituting
    /// [`FrameKind::BodyCentredNonRotating`] when `kind` requires a
    /// parent and `body` is the root.
    ///
    /// This is deliberate UX smoothing, not an error path: the tree
    /// picker lets the user switch bodies and kinds independently, and
    /// the combination is corrected rather than rejected.
    pub fn normalized(system: &CelestialSystem, kind: FrameKind, body: BodyId) -> FrameSpec {
        let kind = if kind.requires_parent() && system.is_root(body) {
            FrameKind::BodyCentredNonRotating
        } else {
            kind
        };
        FrameSpec { kind, body }
    }

    /// Whether this spec is mathematically defined for its body.
    pub fn is_valid(&self, system: &CelestialSystem) -> bool {
        !(self.kind.requires_parent() && system.is_root(self.body))
    }
}
