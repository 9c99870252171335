//! Error types for celestial system construction and lookup.

use orrery_core::BodyId;
use std::fmt;

/// Errors arising from system construction or body lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    /// Attempted to build a system with no bodies.
    EmptySystem,
    /// Attempted to register a second root body.
    MultipleRoots {
        /// Name of the already-registered root.
        existing: String,
        /// Name of the rejected second root.
        rejected: String,
    },
    /// A body referenced a parent ID that is not in the system.
    UnknownParent {
        /// Name of the body being registered.
        body: String,
        /// The out-of-range parent ID.
        parent: BodyId,
    },
    /// Two bodies were registered under the same name.
    DuplicateName {
        /// The colliding name.
        name: String,
    },
    /// A body ID is not in the system.
    UnknownBody {
        /// The out-of-range ID.
        id: BodyId,
        /// Number of bodies in the system.
        len: u32,
    },
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySystem => write!(f, "celestial system must have at least one body"),
            Self::MultipleRoots { existing, rejected } => {
                write!(
                    f,
                    "system already has root '{existing}'; cannot add second root '{rejected}'"
                )
            }
            Self::UnknownParent { body, parent } => {
                write!(f, "body '{body}' references unknown parent {parent}")
            }
            Self::DuplicateName { name } => {
                write!(f, "body name '{name}' is already registered")
            }
            Self::UnknownBody { id, len } => {
                write!(f, "body {id} is out of range for a system of {len} bodies")
            }
        }
    }
}

impl std::error::Error for SystemError {}
