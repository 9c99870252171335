//! Reusable selection test fixtures.
//!
//! - [`stock_system`] — a Sun/planets/moons system covering every tree
//!   shape the selector distinguishes (root, internal, leaf).
//! - [`NotificationLog`] — records change-callback invocations for
//!   assertion.
//! - [`EchoLocalizer`] — renders `key(arg1|arg2)` so tests can assert
//!   on template choice and argument order without a string catalogue.

use orrery_core::BodyId;
use orrery_frames::{FrameParameters, Localizer, Template};
use orrery_system::{CelestialSystem, CelestialSystemBuilder};
use std::cell::RefCell;
use std::rc::Rc;

/// The stock system's bodies, by name.
///
/// Shape: Sun ← {Mercury, Earth ← Moon, Jupiter ← {Io, Europa}}, with
/// Earth as the home body. Mercury is a childless planet, Earth and
/// Jupiter are internal, the moons are leaves.
pub struct StockSystem {
    pub system: CelestialSystem,
    pub sun: BodyId,
    pub mercury: BodyId,
    pub earth: BodyId,
    pub moon: BodyId,
    pub jupiter: BodyId,
    pub io: BodyId,
    pub europa: BodyId,
}

/// Build the stock system. Infallible by construction.
pub fn stock_system() -> StockSystem {
    let mut b = CelestialSystemBuilder::new();
    let sun = b.root("Sun").unwrap();
    let mercury = b.body("Mercury", sun).unwrap();
    let earth = b.body("Earth", sun).unwrap();
    let moon = b.body("Moon", earth).unwrap();
    let jupiter = b.body("Jupiter", sun).unwrap();
    let io = b.body("Io", jupiter).unwrap();
    let europa = b.body("Europa", jupiter).unwrap();
    b.set_home(earth);
    StockSystem {
        system: b.build().unwrap(),
        sun,
        mercury,
        earth,
        moon,
        jupiter,
        io,
        europa,
    }
}

/// Records every parameter record a selector emits.
///
/// Clone the log, hand [`callback`](NotificationLog::callback) to the
/// selector, and assert on [`count`](NotificationLog::count) and
/// [`last`](NotificationLog::last) afterwards.
#[derive(Clone, Default)]
pub struct NotificationLog {
    params: Rc<RefCell<Vec<FrameParameters>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A boxed callback that appends to this log.
    pub fn callback(&self) -> Box<dyn FnMut(FrameParameters)> {
        let params = Rc::clone(&self.params);
        Box::new(move |p| params.borrow_mut().push(p))
    }

    /// Number of notifications recorded so far.
    pub fn count(&self) -> usize {
        self.params.borrow().len()
    }

    /// The most recent notification, if any.
    pub fn last(&self) -> Option<FrameParameters> {
        self.params.borrow().last().copied()
    }

    /// Drain and return everything recorded.
    pub fn take(&self) -> Vec<FrameParameters> {
        std::mem::take(&mut *self.params.borrow_mut())
    }
}

/// Localizer that renders `key(arg1|arg2)`.
///
/// Keeps naming tests independent of any real string catalogue while
/// still pinning both the chosen template and the argument order.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoLocalizer;

impl Localizer for EchoLocalizer {
    fn format(&self, template: Template, args: &[&str]) -> String {
        format!("{}({})", template.key(), args.join("|"))
    }
}
