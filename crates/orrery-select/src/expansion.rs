//! Expand/collapse bookkeeping for the tree picker.

use indexmap::IndexMap;
use orrery_core::BodyId;
use orrery_system::CelestialSystem;

/// Per-body expand/collapse flags for the celestial tree picker.
///
/// Only internal bodies — those with both a parent and at least one
/// satellite — carry a flag. The root is always shown expanded and a
/// leaf has nothing to reveal, so neither is tracked. The map is built
/// once from the static system and never grows or shrinks; flags are
/// keyed by [`BodyId`] so they stay valid regardless of how the UI
/// layer holds its body objects.
#[derive(Debug, Clone)]
pub struct ExpansionState {
    flags: IndexMap<BodyId, bool>,
}

impl ExpansionState {
    /// Build the flag map for `system`, all internal bodies collapsed.
    pub fn new(system: &CelestialSystem) -> Self {
        let flags = system
            .bodies()
            .filter(|&b| system.is_internal(b))
            .map(|b| (b, false))
            .collect();
        Self { flags }
    }

    /// Whether `body`'s satellites are currently revealed.
    ///
    /// The root always is; an untracked (leaf) body never is.
    pub fn is_expanded(&self, system: &CelestialSystem, body: BodyId) -> bool {
        if system.is_root(body) {
            return true;
        }
        self.flags.get(&body).copied().unwrap_or(false)
    }

    /// Flip the flag for an internal body. No-op for root and leaves.
    pub fn toggle(&mut self, body: BodyId) {
        if let Some(flag) = self.flags.get_mut(&body) {
            *flag = !*flag;
        }
    }

    /// Expand every tracked body on the chain from `body` to the root,
    /// `body` included, so the picker reveals the active path.
    pub fn expand_ancestors_of(&mut self, system: &CelestialSystem, body: BodyId) {
        for ancestor in system.chain_to_root(body) {
            if let Some(flag) = self.flags.get_mut(&ancestor) {
                *flag = true;
            }
        }
    }

    /// The tracked bodies and their flags, in registration order.
    pub fn tracked(&self) -> impl Iterator<Item = (BodyId, bool)> + '_ {
        self.flags.iter().map(|(&b, &f)| (b, f))
    }
}
