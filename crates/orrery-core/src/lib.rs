//! Core types for the Orrery reference-frame selection library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Orrery workspace:
//! typed identifiers, the closed set of frame kinds with their
//! wire-stable tags, and the vessel type used for target overrides.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod kind;
pub mod vessel;

pub use id::{BodyId, VesselId};
pub use kind::FrameKind;
pub use vessel::Vessel;
