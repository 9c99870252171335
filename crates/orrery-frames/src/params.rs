//! The wire-level frame parameter codec.
//!
//! [`FrameParameters`] is the flat record handed to the external
//! trajectory engine. Its field layout and the kind tags are a persisted
//! cross-component contract; see the table on [`encode`] for which
//! fields each kind populates.

use crate::error::ParamsError;
use crate::spec::FrameSpec;
use orrery_core::{BodyId, FrameKind, Vessel};
use orrery_system::CelestialSystem;
use smallvec::SmallVec;

/// Flat, wire-stable projection of a [`FrameSpec`].
///
/// Derived fresh on every observable selection change and never stored
/// as authoritative state. Unpopulated index fields are `None`; the
/// external contract treats them as absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameParameters {
    /// Wire tag of the frame kind (6000–6003).
    pub tag: i32,
    /// Centre body index, for body-centred and surface frames.
    pub centre_index: Option<u32>,
    /// Primary body index, for the two rotating frames.
    pub primary_index: Option<u32>,
    /// Secondary body index, for the two rotating frames.
    pub secondary_index: Option<u32>,
}

/// Encode a frame spec into wire parameters.
///
/// | kind | centre | primary | secondary |
/// |---|---|---|---|
/// | `BodyCentredNonRotating` | body | — | — |
/// | `BodySurface` | body | — | — |
/// | `BarycentricRotating` | — | parent | body |
/// | `BodyCentredParentDirection` | — | body | parent |
///
/// For the parent-direction frame the body whose direction is held
/// fixed is the *selected* body, and the downstream engine fixes
/// whichever body occupies the primary slot; hence the selected body
/// goes in `primary_index` and its parent in `secondary_index`, the
/// reverse of the barycentric layout. The swap is part of the wire
/// contract.
///
/// # Panics
///
/// Panics if `spec` pairs a rotating kind with the root body. The
/// selector normalizes such combinations away, so reaching this panic
/// means a caller bypassed [`FrameSpec::normalized`].
pub fn encode(system: &CelestialSystem, spec: FrameSpec) -> FrameParameters {
    let body = spec.body;
    match spec.kind {
        FrameKind::BodyCentredNonRotating | FrameKind::BodySurface => FrameParameters {
            tag: spec.kind.tag(),
            centre_index: Some(body.0),
            primary_index: None,
            secondary_index: None,
        },
        FrameKind::BarycentricRotating => FrameParameters {
            tag: spec.kind.tag(),
            centre_index: None,
            primary_index: Some(parent_or_panic(system, spec).0),
            secondary_index: Some(body.0),
        },
        FrameKind::BodyCentredParentDirection => FrameParameters {
            tag: spec.kind.tag(),
            centre_index: None,
            primary_index: Some(body.0),
            secondary_index: Some(parent_or_panic(system, spec).0),
        },
    }
}

fn parent_or_panic(system: &CelestialSystem, spec: FrameSpec) -> BodyId {
    match system.parent(spec.body) {
        Some(parent) => parent,
        None => panic!(
            "encoding {} frame of root body '{}'",
            spec.kind,
            system.name(spec.body)
        ),
    }
}

/// Decode wire parameters back into a frame spec.
///
/// Reads the index field the tagged kind populates (centre for
/// body-centred and surface frames, secondary for barycentric, primary
/// for parent-direction) and resolves it against `system`. The unused
/// fields of the record are ignored, matching the producing table in
/// [`encode`].
pub fn decode(
    system: &CelestialSystem,
    params: &FrameParameters,
) -> Result<FrameSpec, ParamsError> {
    let kind =
        FrameKind::from_tag(params.tag).ok_or(ParamsError::UnknownTag { tag: params.tag })?;
    let (field, index) = match kind {
        FrameKind::BodyCentredNonRotating | FrameKind::BodySurface => {
            ("centre_index", params.centre_index)
        }
        FrameKind::BarycentricRotating => ("secondary_index", params.secondary_index),
        FrameKind::BodyCentredParentDirection => ("primary_index", params.primary_index),
    };
    let index = index.ok_or(ParamsError::MissingIndex {
        tag: params.tag,
        field,
    })?;
    let body = BodyId(index);
    if !system.contains(body) {
        return Err(ParamsError::IndexOutOfRange {
            index,
            len: system.len(),
        });
    }
    if kind.requires_parent() && system.is_root(body) {
        return Err(ParamsError::RootBodyForRotatingFrame { body });
    }
    Ok(FrameSpec { kind, body })
}

/// The bodies the frame holds positionally fixed, for UI highlighting.
///
/// Empty when a target vessel overrides the frame (the frame is then
/// relative to the vessel, not to any fixed celestial) and for the
/// barycentric frame (the barycentre is fixed, no single body is).
/// Otherwise the selected body alone.
pub fn fixed_bodies(
    kind: FrameKind,
    body: BodyId,
    target_override: Option<&Vessel>,
) -> SmallVec<[BodyId; 1]> {
    if target_override.is_some() {
        return SmallVec::new();
    }
    match kind {
        FrameKind::BodyCentredNonRotating
        | FrameKind::BodyCentredParentDirection
        | FrameKind::BodySurface => SmallVec::from_slice(&[body]),
        FrameKind::BarycentricRotating => SmallVec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::VesselId;
    use orrery_system::CelestialSystemBuilder;
    use proptest::prelude::*;

    fn sun_earth_moon() -> (CelestialSystem, BodyId, BodyId, BodyId) {
        let mut b = CelestialSystemBuilder::new();
        let sun = b.root("Sun").unwrap();
        let earth = b.body("Earth", sun).unwrap();
        let moon = b.body("Moon", earth).unwrap();
        (b.build().unwrap(), sun, earth, moon)
    }

    #[test]
    fn body_centred_kinds_populate_centre_only() {
        let (s, sun, _, moon) = sun_earth_moon();
        for (kind, body) in [
            (FrameKind::BodyCentredNonRotating, sun),
            (FrameKind::BodySurface, moon),
        ] {
            let p = encode(&s, FrameSpec { kind, body });
            assert_eq!(p.tag, kind.tag());
            assert_eq!(p.centre_index, Some(body.0));
            assert_eq!(p.primary_index, None);
            assert_eq!(p.secondary_index, None);
        }
    }

    #[test]
    fn barycentric_puts_parent_in_primary() {
        let (s, _, earth, moon) = sun_earth_moon();
        let p = encode(
            &s,
            FrameSpec {
                kind: FrameKind::BarycentricRotating,
                body: moon,
            },
        );
        assert_eq!(p.primary_index, Some(earth.0));
        assert_eq!(p.secondary_index, Some(moon.0));
        assert_eq!(p.centre_index, None);
    }

    #[test]
    fn parent_direction_swaps_the_slots() {
        let (s, _, earth, moon) = sun_earth_moon();
        let p = encode(
            &s,
            FrameSpec {
                kind: FrameKind::BodyCentredParentDirection,
                body: moon,
            },
        );
        assert_eq!(p.primary_index, Some(moon.0));
        assert_eq!(p.secondary_index, Some(earth.0));
        assert_eq!(p.centre_index, None);
    }

    #[test]
    #[should_panic(expected = "encoding barycentric rotating frame of root body 'Sun'")]
    fn encoding_rotating_root_frame_panics() {
        let (s, sun, _, _) = sun_earth_moon();
        encode(
            &s,
            FrameSpec {
                kind: FrameKind::BarycentricRotating,
                body: sun,
            },
        );
    }

    #[test]
    fn decode_rejects_unknown_tag() {
        let (s, _, _, _) = sun_earth_moon();
        let p = FrameParameters {
            tag: 1234,
            centre_index: Some(0),
            primary_index: None,
            secondary_index: None,
        };
        assert_eq!(decode(&s, &p), Err(ParamsError::UnknownTag { tag: 1234 }));
    }

    #[test]
    fn decode_rejects_missing_index() {
        let (s, _, _, _) = sun_earth_moon();
        let p = FrameParameters {
            tag: FrameKind::BarycentricRotating.tag(),
            centre_index: Some(2),
            primary_index: Some(1),
            secondary_index: None,
        };
        assert_eq!(
            decode(&s, &p),
            Err(ParamsError::MissingIndex {
                tag: 6001,
                field: "secondary_index",
            })
        );
    }

    #[test]
    fn decode_rejects_out_of_range_index() {
        let (s, _, _, _) = sun_earth_moon();
        let p = FrameParameters {
            tag: FrameKind::BodySurface.tag(),
            centre_index: Some(9),
            primary_index: None,
            secondary_index: None,
        };
        assert_eq!(
            decode(&s, &p),
            Err(ParamsError::IndexOutOfRange { index: 9, len: 3 })
        );
    }

    #[test]
    fn decode_rejects_rotating_frame_at_root() {
        let (s, sun, earth, _) = sun_earth_moon();
        let p = FrameParameters {
            tag: FrameKind::BodyCentredParentDirection.tag(),
            centre_index: None,
            primary_index: Some(sun.0),
            secondary_index: Some(earth.0),
        };
        assert_eq!(
            decode(&s, &p),
            Err(ParamsError::RootBodyForRotatingFrame { body: sun })
        );
    }

    #[test]
    fn fixed_bodies_table() {
        let (_, _, earth, moon) = sun_earth_moon();
        let target = Vessel::new(VesselId(1), "Intrepid");

        assert_eq!(
            fixed_bodies(FrameKind::BodyCentredNonRotating, earth, None).as_slice(),
            &[earth]
        );
        assert_eq!(
            fixed_bodies(FrameKind::BodySurface, earth, None).as_slice(),
            &[earth]
        );
        assert_eq!(
            fixed_bodies(FrameKind::BodyCentredParentDirection, moon, None).as_slice(),
            &[moon]
        );
        assert!(fixed_bodies(FrameKind::BarycentricRotating, moon, None).is_empty());
        assert!(fixed_bodies(FrameKind::BodyCentredNonRotating, earth, Some(&target)).is_empty());
    }

    fn arb_kind() -> impl Strategy<Value = FrameKind> {
        prop::sample::select(FrameKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn round_trip_over_valid_specs(kind in arb_kind(), body in 0u32..3) {
            let (s, _, _, _) = sun_earth_moon();
            let spec = FrameSpec::normalized(&s, kind, BodyId(body));
            let decoded = decode(&s, &encode(&s, spec)).unwrap();
            prop_assert_eq!(decoded, spec);
        }
    }
}
