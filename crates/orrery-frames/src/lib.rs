//! Frame specification, parameter codec, and naming policy for Orrery.
//!
//! A [`FrameSpec`] pairs a [`FrameKind`](orrery_core::FrameKind) with the
//! selected body and carries the validity rule (rotating kinds need a
//! parent). [`FrameParameters`] is the flat, wire-stable projection of a
//! spec that the external trajectory engine consumes; [`encode`] and
//! [`decode`] map between the two. The [`naming`] module produces
//! localization template identifiers and arguments for every frame the
//! selector can reach — never literal user-facing text.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod naming;
pub mod params;
pub mod spec;

pub use error::ParamsError;
pub use naming::{Localizer, Template};
pub use params::{decode, encode, fixed_bodies, FrameParameters};
pub use spec::FrameSpec;
