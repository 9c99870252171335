//! Orrery: reference-frame selection for trajectory visualization over
//! a hierarchical system of celestial bodies.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Orrery sub-crates. For most users, adding `orrery` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use orrery::prelude::*;
//!
//! // Describe the session's celestial hierarchy once.
//! let mut builder = CelestialSystemBuilder::new();
//! let sun = builder.root("Sun").unwrap();
//! let earth = builder.body("Earth", sun).unwrap();
//! let moon = builder.body("Moon", earth).unwrap();
//! builder.set_home(earth);
//! let system = builder.build().unwrap();
//!
//! // Drive the selector from UI events; the callback feeds the
//! // external trajectory engine.
//! let mut emitted = Vec::new();
//! {
//!     let mut selector = FrameSelector::new(&system, Box::new(|p| emitted.push(p)));
//!     selector.set_selected_body(moon);
//!     selector.set_kind(FrameKind::BodyCentredParentDirection);
//! }
//!
//! assert_eq!(emitted.len(), 2);
//! let last = emitted.last().unwrap();
//! assert_eq!(last.tag, 6002);
//! assert_eq!(last.primary_index, Some(moon.0));
//! assert_eq!(last.secondary_index, Some(earth.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `orrery-core` | IDs, [`FrameKind`](types::FrameKind), vessels |
//! | [`system`] | `orrery-system` | The celestial hierarchy and its builder |
//! | [`frames`] | `orrery-frames` | Frame specs, the wire codec, naming policy |
//! | [`select`] | `orrery-select` | The selection state machine and tree expansion |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and identifiers (`orrery-core`).
pub use orrery_core as types;

/// The celestial hierarchy (`orrery-system`).
///
/// [`system::CelestialSystem`] is built once per session with
/// [`system::CelestialSystemBuilder`] and borrowed everywhere else.
pub use orrery_system as system;

/// Frame specification, wire codec, and naming policy (`orrery-frames`).
///
/// [`frames::encode`] and [`frames::decode`] map between the
/// authoritative [`frames::FrameSpec`] and the wire-stable
/// [`frames::FrameParameters`] record; the [`frames::naming`] module
/// resolves localization templates.
pub use orrery_frames as frames;

/// The selection state machine (`orrery-select`).
///
/// [`select::FrameSelector`] applies validated mutations and drives the
/// change-notification protocol.
pub use orrery_select as select;

/// Commonly used types, re-exported flat.
pub mod prelude {
    pub use orrery_core::{BodyId, FrameKind, Vessel, VesselId};
    pub use orrery_frames::{
        decode, encode, fixed_bodies, FrameParameters, FrameSpec, Localizer, ParamsError, Template,
    };
    pub use orrery_select::{ExpansionState, FrameSelector};
    pub use orrery_system::{CelestialSystem, CelestialSystemBuilder, SystemError};
}
