//! The celestial body hierarchy for Orrery.
//!
//! This crate defines [`CelestialSystem`] — an arena of bodies with
//! parent/child links, built once per session and immutable thereafter —
//! together with its validating [`CelestialSystemBuilder`]. Bodies are
//! addressed by [`BodyId`](orrery_core::BodyId), the same index the
//! wire-level frame parameter encoding uses, so expansion state and
//! codec lookups never depend on object identity or lifetime.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod system;

pub use error::SystemError;
pub use system::{Ancestors, Body, CelestialSystem, CelestialSystemBuilder};
