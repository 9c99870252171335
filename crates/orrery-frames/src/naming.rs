//! The naming policy: localization templates for every reachable frame.
//!
//! This module never constructs user-facing text. Each query resolves to
//! a stable [`Template`] identifier plus positional arguments (body,
//! parent, and vessel names) and delegates substitution to the session's
//! [`Localizer`]. Keeping the seam here means the selection core stays
//! free of display strings and the UI layer owns every word on screen.

use orrery_core::{BodyId, FrameKind, Vessel};
use orrery_system::CelestialSystem;

/// Stable identifiers for the localization templates this crate emits.
///
/// One identifier per (query, kind) pair, plus the target-override and
/// reference-plane variants. The string keys returned by
/// [`Template::key`] are the contract with the localization catalogue;
/// renaming one orphans the corresponding catalogue entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Template {
    NameTarget,
    NameBodyCentredNonRotating,
    NameBarycentricRotating,
    NameBodyCentredParentDirection,
    NameBodySurface,
    ShortNameTarget,
    ShortNameBodyCentredNonRotating,
    ShortNameBarycentricRotating,
    ShortNameBodyCentredParentDirection,
    ShortNameBodySurface,
    DescriptionTarget,
    DescriptionBodyCentredNonRotating,
    DescriptionBarycentricRotating,
    DescriptionBodyCentredParentDirection,
    DescriptionBodySurface,
    /// Plane centred on a single body (non-rotating and surface frames).
    ReferencePlaneCentred,
    /// Plane through a secondary/primary pair of bodies.
    ReferencePlane,
    /// The word used for the secondary slot when a vessel is targeted.
    ReferencePlaneSecondaryTarget,
}

impl Template {
    /// The catalogue key for this template.
    pub const fn key(self) -> &'static str {
        match self {
            Template::NameTarget => "frame_selector_name_target",
            Template::NameBodyCentredNonRotating => {
                "frame_selector_name_body_centred_non_rotating"
            }
            Template::NameBarycentricRotating => "frame_selector_name_barycentric_rotating",
            Template::NameBodyCentredParentDirection => {
                "frame_selector_name_body_centred_parent_direction"
            }
            Template::NameBodySurface => "frame_selector_name_body_surface",
            Template::ShortNameTarget => "frame_selector_short_name_target",
            Template::ShortNameBodyCentredNonRotating => {
                "frame_selector_short_name_body_centred_non_rotating"
            }
            Template::ShortNameBarycentricRotating => {
                "frame_selector_short_name_barycentric_rotating"
            }
            Template::ShortNameBodyCentredParentDirection => {
                "frame_selector_short_name_body_centred_parent_direction"
            }
            Template::ShortNameBodySurface => "frame_selector_short_name_body_surface",
            Template::DescriptionTarget => "frame_selector_description_target",
            Template::DescriptionBodyCentredNonRotating => {
                "frame_selector_description_body_centred_non_rotating"
            }
            Template::DescriptionBarycentricRotating => {
                "frame_selector_description_barycentric_rotating"
            }
            Template::DescriptionBodyCentredParentDirection => {
                "frame_selector_description_body_centred_parent_direction"
            }
            Template::DescriptionBodySurface => "frame_selector_description_body_surface",
            Template::ReferencePlaneCentred => "frame_selector_reference_plane_centred",
            Template::ReferencePlane => "frame_selector_reference_plane",
            Template::ReferencePlaneSecondaryTarget => {
                "frame_selector_reference_plane_secondary_target"
            }
        }
    }
}

/// The localization seam.
///
/// Implemented by the session layer over its string catalogue. `args`
/// are positional and already display-ready (body names, a vessel name,
/// or a single grapheme for short names).
pub trait Localizer {
    /// Render `template` with the given positional arguments.
    fn format(&self, template: Template, args: &[&str]) -> String;
}

/// Long display name of a frame.
///
/// # Panics
///
/// Panics if `kind` requires a parent and `body` is the root. The
/// selector normalizes such pairs away before they can reach naming, so
/// this panic indicates a selector invariant violation, not user input.
pub fn name(
    system: &CelestialSystem,
    kind: FrameKind,
    body: BodyId,
    target_override: Option<&Vessel>,
    localizer: &dyn Localizer,
) -> String {
    if target_override.is_some() {
        return localizer.format(Template::NameTarget, &[system.name(body)]);
    }
    match kind {
        FrameKind::BodyCentredNonRotating => {
            localizer.format(Template::NameBodyCentredNonRotating, &[system.name(body)])
        }
        FrameKind::BarycentricRotating => {
            let parent = parent_or_violation(system, kind, body, "naming");
            localizer.format(
                Template::NameBarycentricRotating,
                &[system.name(parent), system.name(body)],
            )
        }
        FrameKind::BodyCentredParentDirection => {
            let parent = parent_or_violation(system, kind, body, "naming");
            localizer.format(
                Template::NameBodyCentredParentDirection,
                &[system.name(body), system.name(parent)],
            )
        }
        FrameKind::BodySurface => {
            localizer.format(Template::NameBodySurface, &[system.name(body)])
        }
    }
}

/// Abbreviated name of a frame, built from name initials.
///
/// # Panics
///
/// Panics under the same condition as [`name`].
pub fn short_name(
    system: &CelestialSystem,
    kind: FrameKind,
    body: BodyId,
    target_override: Option<&Vessel>,
    localizer: &dyn Localizer,
) -> String {
    let body_initial = initial(system.name(body));
    if target_override.is_some() {
        return localizer.format(Template::ShortNameTarget, &[&body_initial]);
    }
    match kind {
        FrameKind::BodyCentredNonRotating => {
            localizer.format(Template::ShortNameBodyCentredNonRotating, &[&body_initial])
        }
        FrameKind::BarycentricRotating => {
            let parent = parent_or_violation(system, kind, body, "naming");
            localizer.format(
                Template::ShortNameBarycentricRotating,
                &[&initial(system.name(parent)), &body_initial],
            )
        }
        FrameKind::BodyCentredParentDirection => {
            let parent = parent_or_violation(system, kind, body, "naming");
            localizer.format(
                Template::ShortNameBodyCentredParentDirection,
                &[&body_initial, &initial(system.name(parent))],
            )
        }
        FrameKind::BodySurface => {
            localizer.format(Template::ShortNameBodySurface, &[&body_initial])
        }
    }
}

/// Sentence-length description of a frame.
///
/// # Panics
///
/// Panics under the same condition as [`name`].
pub fn description(
    system: &CelestialSystem,
    kind: FrameKind,
    body: BodyId,
    target_override: Option<&Vessel>,
    localizer: &dyn Localizer,
) -> String {
    if let Some(vessel) = target_override {
        return localizer.format(
            Template::DescriptionTarget,
            &[&vessel.name, system.name(body)],
        );
    }
    match kind {
        FrameKind::BodyCentredNonRotating => localizer.format(
            Template::DescriptionBodyCentredNonRotating,
            &[system.name(body)],
        ),
        FrameKind::BarycentricRotating => {
            let parent = parent_or_violation(system, kind, body, "describing");
            localizer.format(
                Template::DescriptionBarycentricRotating,
                &[system.name(body), system.name(parent)],
            )
        }
        FrameKind::BodyCentredParentDirection => {
            let parent = parent_or_violation(system, kind, body, "describing");
            localizer.format(
                Template::DescriptionBodyCentredParentDirection,
                &[system.name(body), system.name(parent)],
            )
        }
        FrameKind::BodySurface => {
            localizer.format(Template::DescriptionBodySurface, &[system.name(body)])
        }
    }
}

/// Description of the frame's reference plane, for plot annotations.
///
/// Non-rotating and surface frames without a target override have a
/// plane centred on the selected body. Every other combination is
/// described by a secondary/primary body pair; with a target override
/// the secondary slot is the localized word for the target and the
/// selected body moves to the primary slot.
///
/// # Panics
///
/// Panics under the same condition as [`name`].
pub fn reference_plane_description(
    system: &CelestialSystem,
    kind: FrameKind,
    body: BodyId,
    target_override: Option<&Vessel>,
    localizer: &dyn Localizer,
) -> String {
    if target_override.is_none()
        && matches!(
            kind,
            FrameKind::BodyCentredNonRotating | FrameKind::BodySurface
        )
    {
        return localizer.format(Template::ReferencePlaneCentred, &[system.name(body)]);
    }
    let (secondary, primary) = if target_override.is_some() {
        (
            localizer.format(Template::ReferencePlaneSecondaryTarget, &[]),
            system.name(body).to_owned(),
        )
    } else {
        let parent = parent_or_violation(system, kind, body, "describing");
        (
            system.name(body).to_owned(),
            system.name(parent).to_owned(),
        )
    };
    localizer.format(Template::ReferencePlane, &[&secondary, &primary])
}

fn parent_or_violation(
    system: &CelestialSystem,
    kind: FrameKind,
    body: BodyId,
    verb: &str,
) -> BodyId {
    match system.parent(body) {
        Some(parent) => parent,
        None => panic!(
            "{verb} {kind} frame of root body '{}'",
            system.name(body)
        ),
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::VesselId;
    use orrery_system::{CelestialSystem, CelestialSystemBuilder};

    /// Renders `key(arg1|arg2)` so tests can assert on template choice
    /// and argument order at once.
    struct EchoLocalizer;

    impl Localizer for EchoLocalizer {
        fn format(&self, template: Template, args: &[&str]) -> String {
            format!("{}({})", template.key(), args.join("|"))
        }
    }

    fn sun_earth_moon() -> (CelestialSystem, BodyId, BodyId, BodyId) {
        let mut b = CelestialSystemBuilder::new();
        let sun = b.root("Sun").unwrap();
        let earth = b.body("Earth", sun).unwrap();
        let moon = b.body("Moon", earth).unwrap();
        (b.build().unwrap(), sun, earth, moon)
    }

    #[test]
    fn name_dispatches_per_kind() {
        let (s, _, earth, moon) = sun_earth_moon();
        let l = EchoLocalizer;
        assert_eq!(
            name(&s, FrameKind::BodyCentredNonRotating, earth, None, &l),
            "frame_selector_name_body_centred_non_rotating(Earth)"
        );
        assert_eq!(
            name(&s, FrameKind::BarycentricRotating, moon, None, &l),
            "frame_selector_name_barycentric_rotating(Earth|Moon)"
        );
        assert_eq!(
            name(&s, FrameKind::BodyCentredParentDirection, moon, None, &l),
            "frame_selector_name_body_centred_parent_direction(Moon|Earth)"
        );
        assert_eq!(
            name(&s, FrameKind::BodySurface, earth, None, &l),
            "frame_selector_name_body_surface(Earth)"
        );
    }

    #[test]
    fn target_override_wins_over_kind() {
        let (s, _, earth, _) = sun_earth_moon();
        let l = EchoLocalizer;
        let target = Vessel::new(VesselId(3), "Intrepid");
        assert_eq!(
            name(&s, FrameKind::BodySurface, earth, Some(&target), &l),
            "frame_selector_name_target(Earth)"
        );
        assert_eq!(
            description(&s, FrameKind::BodySurface, earth, Some(&target), &l),
            "frame_selector_description_target(Intrepid|Earth)"
        );
    }

    #[test]
    fn short_name_uses_initials() {
        let (s, _, _, moon) = sun_earth_moon();
        let l = EchoLocalizer;
        assert_eq!(
            short_name(&s, FrameKind::BarycentricRotating, moon, None, &l),
            "frame_selector_short_name_barycentric_rotating(E|M)"
        );
        assert_eq!(
            short_name(&s, FrameKind::BodyCentredParentDirection, moon, None, &l),
            "frame_selector_short_name_body_centred_parent_direction(M|E)"
        );
    }

    #[test]
    fn reference_plane_centred_for_non_rotating_kinds() {
        let (s, _, earth, _) = sun_earth_moon();
        let l = EchoLocalizer;
        for kind in [FrameKind::BodyCentredNonRotating, FrameKind::BodySurface] {
            assert_eq!(
                reference_plane_description(&s, kind, earth, None, &l),
                "frame_selector_reference_plane_centred(Earth)"
            );
        }
    }

    #[test]
    fn reference_plane_pair_without_override() {
        let (s, _, _, moon) = sun_earth_moon();
        let l = EchoLocalizer;
        assert_eq!(
            reference_plane_description(&s, FrameKind::BarycentricRotating, moon, None, &l),
            "frame_selector_reference_plane(Moon|Earth)"
        );
    }

    #[test]
    fn reference_plane_pair_swaps_under_override() {
        let (s, _, earth, _) = sun_earth_moon();
        let l = EchoLocalizer;
        let target = Vessel::new(VesselId(3), "Intrepid");
        assert_eq!(
            reference_plane_description(
                &s,
                FrameKind::BodyCentredNonRotating,
                earth,
                Some(&target),
                &l
            ),
            "frame_selector_reference_plane(frame_selector_reference_plane_secondary_target()|Earth)"
        );
    }

    #[test]
    #[should_panic(expected = "naming barycentric rotating frame of root body 'Sun'")]
    fn naming_rotating_root_frame_panics() {
        let (s, sun, _, _) = sun_earth_moon();
        name(&s, FrameKind::BarycentricRotating, sun, None, &EchoLocalizer);
    }

    #[test]
    #[should_panic(expected = "describing body-centred parent-direction frame of root body 'Sun'")]
    fn describing_rotating_root_frame_panics() {
        let (s, sun, _, _) = sun_earth_moon();
        description(
            &s,
            FrameKind::BodyCentredParentDirection,
            sun,
            None,
            &EchoLocalizer,
        );
    }
}
