//! The arena-backed celestial body hierarchy.

use crate::error::SystemError;
use orrery_core::BodyId;
use smallvec::SmallVec;

/// A single celestial body within a [`CelestialSystem`].
#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    parent: Option<BodyId>,
    children: Vec<BodyId>,
}

impl Body {
    /// Display name, passed verbatim to localization templates.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The body this one orbits, or `None` for the root.
    pub fn parent(&self) -> Option<BodyId> {
        self.parent
    }

    /// Direct satellites, in registration order.
    pub fn children(&self) -> &[BodyId] {
        &self.children
    }
}

/// An immutable tree of celestial bodies: a star, its planets, their
/// moons.
///
/// Built once per session via [`CelestialSystemBuilder`]; the selection
/// state machine and the parameter codec borrow it for the session's
/// lifetime and never mutate it. Bodies are stored in a flat arena and
/// addressed by [`BodyId`], which doubles as the wire-level body index.
///
/// # Examples
///
/// ```
/// use orrery_system::CelestialSystemBuilder;
///
/// let mut builder = CelestialSystemBuilder::new();
/// let sun = builder.root("Sun").unwrap();
/// let earth = builder.body("Earth", sun).unwrap();
/// let moon = builder.body("Moon", earth).unwrap();
/// builder.set_home(earth);
/// let system = builder.build().unwrap();
///
/// assert_eq!(system.root(), sun);
/// assert_eq!(system.home(), earth);
/// assert_eq!(system.parent(moon), Some(earth));
/// assert!(system.is_leaf(moon));
/// assert!(system.is_internal(earth));
/// ```
#[derive(Debug, Clone)]
pub struct CelestialSystem {
    bodies: Vec<Body>,
    root: BodyId,
    home: BodyId,
}

impl CelestialSystem {
    /// Number of bodies in the system.
    pub fn len(&self) -> u32 {
        self.bodies.len() as u32
    }

    /// Always returns `false` — construction rejects empty systems.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `id` refers to a body in this system.
    pub fn contains(&self, id: BodyId) -> bool {
        (id.0 as usize) < self.bodies.len()
    }

    /// Checked lookup. Returns `SystemError::UnknownBody` for an ID that
    /// did not come from this system.
    pub fn get(&self, id: BodyId) -> Result<&Body, SystemError> {
        self.bodies.get(id.0 as usize).ok_or(SystemError::UnknownBody {
            id,
            len: self.len(),
        })
    }

    /// The unique root body.
    pub fn root(&self) -> BodyId {
        self.root
    }

    /// The designated home body, used as the default selection.
    ///
    /// Defaults to the root unless overridden at build time.
    pub fn home(&self) -> BodyId {
        self.home
    }

    /// Display name of a body.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not from this system.
    pub fn name(&self, id: BodyId) -> &str {
        &self.bodies[id.0 as usize].name
    }

    /// Parent of a body, or `None` for the root.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not from this system.
    pub fn parent(&self, id: BodyId) -> Option<BodyId> {
        self.bodies[id.0 as usize].parent
    }

    /// Direct satellites of a body, in registration order.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not from this system.
    pub fn children(&self, id: BodyId) -> &[BodyId] {
        &self.bodies[id.0 as usize].children
    }

    /// Whether the body orbits nothing.
    pub fn is_root(&self, id: BodyId) -> bool {
        self.parent(id).is_none()
    }

    /// Whether the body has no satellites.
    pub fn is_leaf(&self, id: BodyId) -> bool {
        self.children(id).is_empty()
    }

    /// Whether the body has both a parent and at least one satellite.
    ///
    /// Internal bodies are the only ones the tree picker can collapse
    /// and expand; the root is always shown expanded and leaves have
    /// nothing to reveal.
    pub fn is_internal(&self, id: BodyId) -> bool {
        !self.is_root(id) && !self.is_leaf(id)
    }

    /// All body IDs in registration order.
    pub fn bodies(&self) -> impl ExactSizeIterator<Item = BodyId> + '_ {
        (0..self.bodies.len() as u32).map(BodyId)
    }

    /// The ancestor chain of `id`, from its parent up to the root.
    ///
    /// Does not yield `id` itself; yields nothing for the root.
    pub fn ancestors(&self, id: BodyId) -> Ancestors<'_> {
        Ancestors {
            system: self,
            next: self.parent(id),
        }
    }

    /// The chain from `id` itself up to the root, parent by parent.
    ///
    /// Collected into a `SmallVec` sized for typical star/planet/moon
    /// depths without heap allocation.
    pub fn chain_to_root(&self, id: BodyId) -> SmallVec<[BodyId; 4]> {
        let mut chain = SmallVec::new();
        chain.push(id);
        chain.extend(self.ancestors(id));
        chain
    }
}

/// Iterator over a body's ancestor chain. See
/// [`CelestialSystem::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    system: &'a CelestialSystem,
    next: Option<BodyId>,
}

impl Iterator for Ancestors<'_> {
    type Item = BodyId;

    fn next(&mut self) -> Option<BodyId> {
        let current = self.next?;
        self.next = self.system.parent(current);
        Some(current)
    }
}

/// Validating builder for [`CelestialSystem`].
///
/// Bodies must be registered parent-first, which makes cycles
/// unrepresentable: a parent ID always refers to an already-registered
/// body. Exactly one root is allowed and names must be unique.
#[derive(Debug, Default)]
pub struct CelestialSystemBuilder {
    bodies: Vec<Body>,
    root: Option<BodyId>,
    home: Option<BodyId>,
}

impl CelestialSystemBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the root body. Fails if a root is already registered.
    pub fn root(&mut self, name: impl Into<String>) -> Result<BodyId, SystemError> {
        let name = name.into();
        if let Some(root) = self.root {
            return Err(SystemError::MultipleRoots {
                existing: self.bodies[root.0 as usize].name.clone(),
                rejected: name,
            });
        }
        let id = self.push(name, None)?;
        self.root = Some(id);
        Ok(id)
    }

    /// Register a body orbiting `parent`. Fails if `parent` has not
    /// been registered or the name collides.
    pub fn body(
        &mut self,
        name: impl Into<String>,
        parent: BodyId,
    ) -> Result<BodyId, SystemError> {
        let name = name.into();
        if (parent.0 as usize) >= self.bodies.len() {
            return Err(SystemError::UnknownParent { body: name, parent });
        }
        let id = self.push(name, Some(parent))?;
        self.bodies[parent.0 as usize].children.push(id);
        Ok(id)
    }

    /// Designate the home body (the default selection). Without this
    /// the root is the home.
    pub fn set_home(&mut self, home: BodyId) {
        self.home = Some(home);
    }

    /// Finish the system. Fails if no bodies were registered.
    pub fn build(self) -> Result<CelestialSystem, SystemError> {
        let root = self.root.ok_or(SystemError::EmptySystem)?;
        Ok(CelestialSystem {
            bodies: self.bodies,
            root,
            home: self.home.unwrap_or(root),
        })
    }

    fn push(&mut self, name: String, parent: Option<BodyId>) -> Result<BodyId, SystemError> {
        if self.bodies.iter().any(|b| b.name == name) {
            return Err(SystemError::DuplicateName { name });
        }
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(Body {
            name,
            parent,
            children: Vec::new(),
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun_earth_moon() -> (CelestialSystem, BodyId, BodyId, BodyId) {
        let mut b = CelestialSystemBuilder::new();
        let sun = b.root("Sun").unwrap();
        let earth = b.body("Earth", sun).unwrap();
        let moon = b.body("Moon", earth).unwrap();
        (b.build().unwrap(), sun, earth, moon)
    }

    #[test]
    fn build_rejects_empty() {
        let b = CelestialSystemBuilder::new();
        assert_eq!(b.build().unwrap_err(), SystemError::EmptySystem);
    }

    #[test]
    fn build_rejects_second_root() {
        let mut b = CelestialSystemBuilder::new();
        b.root("Sun").unwrap();
        assert_eq!(
            b.root("Nemesis").unwrap_err(),
            SystemError::MultipleRoots {
                existing: "Sun".into(),
                rejected: "Nemesis".into(),
            }
        );
    }

    #[test]
    fn build_rejects_unknown_parent() {
        let mut b = CelestialSystemBuilder::new();
        b.root("Sun").unwrap();
        let err = b.body("Moon", BodyId(7)).unwrap_err();
        assert_eq!(
            err,
            SystemError::UnknownParent {
                body: "Moon".into(),
                parent: BodyId(7),
            }
        );
    }

    #[test]
    fn build_rejects_duplicate_name() {
        let mut b = CelestialSystemBuilder::new();
        let sun = b.root("Sun").unwrap();
        b.body("Earth", sun).unwrap();
        assert_eq!(
            b.body("Earth", sun).unwrap_err(),
            SystemError::DuplicateName {
                name: "Earth".into()
            }
        );
    }

    #[test]
    fn predicates() {
        let (s, sun, earth, moon) = sun_earth_moon();
        assert!(s.is_root(sun) && !s.is_leaf(sun) && !s.is_internal(sun));
        assert!(!s.is_root(earth) && !s.is_leaf(earth) && s.is_internal(earth));
        assert!(!s.is_root(moon) && s.is_leaf(moon) && !s.is_internal(moon));
    }

    #[test]
    fn home_defaults_to_root() {
        let (s, sun, _, _) = sun_earth_moon();
        assert_eq!(s.home(), sun);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let (s, sun, earth, moon) = sun_earth_moon();
        let chain: Vec<_> = s.ancestors(moon).collect();
        assert_eq!(chain, vec![earth, sun]);
        assert_eq!(s.ancestors(sun).count(), 0);
        assert_eq!(s.chain_to_root(moon).as_slice(), &[moon, earth, sun]);
    }

    #[test]
    fn checked_lookup() {
        let (s, _, earth, _) = sun_earth_moon();
        assert_eq!(s.get(earth).unwrap().name(), "Earth");
        assert_eq!(
            s.get(BodyId(99)).unwrap_err(),
            SystemError::UnknownBody {
                id: BodyId(99),
                len: 3
            }
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Parent choices for bodies 1..n; body i orbits `parents[i-1] % i`,
        /// which is always already registered.
        fn arb_parents() -> impl Strategy<Value = Vec<u32>> {
            prop::collection::vec(0u32..32, 0..12)
        }

        fn build(parents: &[u32]) -> CelestialSystem {
            let mut b = CelestialSystemBuilder::new();
            b.root("b0").unwrap();
            for (i, p) in parents.iter().enumerate() {
                let i = i as u32 + 1;
                b.body(format!("b{i}"), BodyId(p % i)).unwrap();
            }
            b.build().unwrap()
        }

        proptest! {
            #[test]
            fn ancestor_chains_end_at_the_root(parents in arb_parents()) {
                let s = build(&parents);
                for body in s.bodies() {
                    let chain = s.chain_to_root(body);
                    prop_assert_eq!(chain[0], body);
                    prop_assert_eq!(*chain.last().unwrap(), s.root());
                    // Strictly decreasing IDs, so the walk terminates.
                    for pair in chain.windows(2) {
                        prop_assert!(pair[1] < pair[0] || chain.len() == 1);
                    }
                }
            }

            #[test]
            fn every_non_root_body_is_its_parents_child(parents in arb_parents()) {
                let s = build(&parents);
                for body in s.bodies() {
                    match s.parent(body) {
                        Some(parent) => prop_assert!(s.children(parent).contains(&body)),
                        None => prop_assert_eq!(body, s.root()),
                    }
                }
            }
        }
    }

    #[test]
    fn children_in_registration_order() {
        let mut b = CelestialSystemBuilder::new();
        let sun = b.root("Sun").unwrap();
        let mercury = b.body("Mercury", sun).unwrap();
        let venus = b.body("Venus", sun).unwrap();
        let earth = b.body("Earth", sun).unwrap();
        let s = b.build().unwrap();
        assert_eq!(s.children(sun), &[mercury, venus, earth]);
    }
}
