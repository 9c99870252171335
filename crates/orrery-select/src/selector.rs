//! The stateful frame selector and its change-notification protocol.

use crate::expansion::ExpansionState;
use orrery_core::{BodyId, FrameKind, Vessel};
use orrery_frames::naming;
use orrery_frames::{
    decode, encode, fixed_bodies, FrameParameters, FrameSpec, Localizer, ParamsError,
};
use orrery_system::CelestialSystem;
use smallvec::SmallVec;

/// Callback invoked with freshly encoded parameters on every observable
/// selection change.
///
/// Invoked synchronously within the mutating call. It must not mutate
/// the selector that invoked it.
pub type ChangeCallback<'s> = Box<dyn FnMut(FrameParameters) + 's>;

/// One-shot notification lifecycle.
///
/// A freshly constructed selector has not yet told its consumer
/// anything, so the first mutation notifies even when it changes
/// nothing by value. The transition to `Initialized` is permanent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Uninitialized,
    Initialized,
}

/// The frame-selection state machine.
///
/// Owns the current [`FrameSpec`]-equivalent selection, the optional
/// target-vessel override, and the tree picker's [`ExpansionState`].
/// Borrows the immutable [`CelestialSystem`] for the session's
/// lifetime.
///
/// Observable state for change notification is the `(kind, body)` pair:
/// every mutating operation except [`toggle_expansion`] and
/// [`set_target_override`] diffs it against the pre-mutation value and,
/// when it differs (or on the very first mutation after construction),
/// encodes the selection and invokes the change callback.
///
/// [`toggle_expansion`]: FrameSelector::toggle_expansion
/// [`set_target_override`]: FrameSelector::set_target_override
///
/// # Examples
///
/// ```
/// use orrery_select::FrameSelector;
/// use orrery_core::FrameKind;
/// use orrery_system::CelestialSystemBuilder;
/// use std::cell::Cell;
///
/// let mut b = CelestialSystemBuilder::new();
/// let sun = b.root("Sun").unwrap();
/// let earth = b.body("Earth", sun).unwrap();
/// b.set_home(earth);
/// let system = b.build().unwrap();
///
/// let notified = Cell::new(0u32);
/// let mut selector = FrameSelector::new(&system, Box::new(|_| {
///     notified.set(notified.get() + 1);
/// }));
/// assert_eq!(selector.selected_body(), earth);
///
/// // First mutation always notifies, even a by-value no-op.
/// selector.set_kind(FrameKind::BodyCentredNonRotating);
/// assert_eq!(notified.get(), 1);
/// ```
pub struct FrameSelector<'s> {
    system: &'s CelestialSystem,
    kind: FrameKind,
    body: BodyId,
    target_override: Option<Vessel>,
    expansion: ExpansionState,
    lifecycle: Lifecycle,
    on_change: ChangeCallback<'s>,
}

impl<'s> FrameSelector<'s> {
    /// Create a selector over `system`.
    ///
    /// Starts with a body-centred non-rotating frame on the system's
    /// home body, no target override, and every internal node of the
    /// tree picker collapsed. No notification is emitted here; the
    /// first mutating call carries it.
    pub fn new(system: &'s CelestialSystem, on_change: ChangeCallback<'s>) -> Self {
        Self {
            system,
            kind: FrameKind::BodyCentredNonRotating,
            body: system.home(),
            target_override: None,
            expansion: ExpansionState::new(system),
            lifecycle: Lifecycle::Uninitialized,
            on_change,
        }
    }

    /// Recentre on the session's current main body, or on the home body
    /// when the session has none.
    ///
    /// Resets the kind to body-centred non-rotating and expands the
    /// picker along the body's ancestor chain so the active path is
    /// revealed.
    pub fn set_main_body(&mut self, main: Option<BodyId>) {
        self.effect_change(|s| {
            let body = main.unwrap_or(s.system.home());
            s.kind = FrameKind::BodyCentredNonRotating;
            s.body = body;
            s.expansion.expand_ancestors_of(s.system, body);
        });
    }

    /// Restore a selection from wire parameters.
    ///
    /// The inverse of [`frame_parameters`](FrameSelector::frame_parameters).
    /// Fails without touching any state if the record has an unknown
    /// tag, a missing field, or an out-of-range index.
    pub fn set_from_parameters(&mut self, params: &FrameParameters) -> Result<(), ParamsError> {
        let spec = decode(self.system, params)?;
        self.effect_change(|s| {
            s.kind = spec.kind;
            s.body = spec.body;
        });
        Ok(())
    }

    /// Switch the frame kind, keeping the selected body.
    ///
    /// Requesting a kind that needs a parent while the root is selected
    /// silently selects body-centred non-rotating instead. This is the
    /// one place an invalid combination is reconciled rather than
    /// rejected.
    pub fn set_kind(&mut self, kind: FrameKind) {
        self.effect_change(|s| {
            let normalized = FrameSpec::normalized(s.system, kind, s.body);
            s.kind = normalized.kind;
        });
    }

    /// Select the surface frame of `body`. Valid for every body,
    /// including the root.
    pub fn set_surface_frame_of(&mut self, body: BodyId) {
        self.effect_change(|s| {
            s.kind = FrameKind::BodySurface;
            s.body = body;
        });
    }

    /// Select `body` from the tree picker, keeping the kind where it
    /// remains defined.
    ///
    /// Selecting the root while a rotating kind is active falls back to
    /// body-centred non-rotating; a surface frame survives the move.
    pub fn set_selected_body(&mut self, body: BodyId) {
        self.effect_change(|s| {
            s.body = body;
            if s.system.is_root(body) && s.kind != FrameKind::BodySurface {
                s.kind = FrameKind::BodyCentredNonRotating;
            }
        });
    }

    /// Flip an internal node of the tree picker. No-op for the root and
    /// for leaves, and never triggers a change notification.
    pub fn toggle_expansion(&mut self, body: BodyId) {
        self.expansion.toggle(body);
    }

    /// Store or clear the target-vessel override.
    ///
    /// The override changes what naming and [`fixed_bodies`] report but
    /// is not part of the encoded parameters, so it does not participate
    /// in change diffing and never triggers the callback.
    ///
    /// [`fixed_bodies`]: FrameSelector::fixed_bodies
    pub fn set_target_override(&mut self, target: Option<Vessel>) {
        self.target_override = target;
    }

    /// Current frame kind.
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Currently selected body.
    pub fn selected_body(&self) -> BodyId {
        self.body
    }

    /// Current target override, if any.
    pub fn target_override(&self) -> Option<&Vessel> {
        self.target_override.as_ref()
    }

    /// Whether the picker currently reveals `body`'s satellites.
    pub fn is_expanded(&self, body: BodyId) -> bool {
        self.expansion.is_expanded(self.system, body)
    }

    /// Whether the first mandatory notification has been delivered.
    pub fn has_notified(&self) -> bool {
        self.lifecycle == Lifecycle::Initialized
    }

    /// Encode the current selection. The selection itself stays
    /// authoritative; this projection is recomputed on demand.
    pub fn frame_parameters(&self) -> FrameParameters {
        encode(
            self.system,
            FrameSpec {
                kind: self.kind,
                body: self.body,
            },
        )
    }

    /// The bodies the current frame holds fixed, for UI highlighting.
    pub fn fixed_bodies(&self) -> SmallVec<[BodyId; 1]> {
        fixed_bodies(self.kind, self.body, self.target_override.as_ref())
    }

    /// Long name of the current frame.
    pub fn name(&self, localizer: &dyn Localizer) -> String {
        naming::name(
            self.system,
            self.kind,
            self.body,
            self.target_override.as_ref(),
            localizer,
        )
    }

    /// Abbreviated name of the current frame.
    pub fn short_name(&self, localizer: &dyn Localizer) -> String {
        naming::short_name(
            self.system,
            self.kind,
            self.body,
            self.target_override.as_ref(),
            localizer,
        )
    }

    /// Description of the current frame.
    pub fn description(&self, localizer: &dyn Localizer) -> String {
        naming::description(
            self.system,
            self.kind,
            self.body,
            self.target_override.as_ref(),
            localizer,
        )
    }

    /// Description of the current frame's reference plane.
    pub fn reference_plane_description(&self, localizer: &dyn Localizer) -> String {
        naming::reference_plane_description(
            self.system,
            self.kind,
            self.body,
            self.target_override.as_ref(),
            localizer,
        )
    }

    /// Run a mutation and notify if the observable `(kind, body)` state
    /// changed, or unconditionally on the first mutation ever.
    fn effect_change(&mut self, apply: impl FnOnce(&mut Self)) {
        let old = (self.kind, self.body);
        apply(self);
        let changed = (self.kind, self.body) != old;
        let first = self.lifecycle == Lifecycle::Uninitialized;
        if changed || first {
            let params = self.frame_parameters();
            #[cfg(feature = "tracing")]
            tracing::debug!(
                kind = %self.kind,
                body = %self.body,
                first,
                "frame selection changed"
            );
            (self.on_change)(params);
            self.lifecycle = Lifecycle::Initialized;
        }
    }
}

impl std::fmt::Debug for FrameSelector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameSelector")
            .field("kind", &self.kind)
            .field("body", &self.body)
            .field("target_override", &self.target_override)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}
