//! The reference-frame selection state machine for Orrery.
//!
//! [`FrameSelector`] owns the user's frame selection — kind, body,
//! optional target-vessel override, and the tree picker's
//! expand/collapse flags — applies validated mutations in response to
//! UI events, and notifies the external consumer with freshly encoded
//! [`FrameParameters`](orrery_frames::FrameParameters) exactly when
//! observable state changes, with a guaranteed first notification.
//!
//! All mutations are synchronous state transitions on the thread that
//! drives the UI loop; nothing here blocks or is shared across threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod expansion;
pub mod selector;

pub use expansion::ExpansionState;
pub use selector::{ChangeCallback, FrameSelector};
