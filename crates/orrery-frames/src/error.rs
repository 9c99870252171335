//! Error types for frame parameter decoding.

use orrery_core::BodyId;
use std::fmt;

/// Errors arising from decoding a wire-level parameter record.
///
/// A parameter record comes from outside this library (a saved session,
/// the external engine), so malformed records are reported as errors
/// rather than panics. Every variant still indicates a defect somewhere
/// in the producing component: callers are expected to treat these as
/// fatal rather than retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// The kind tag is not one of the four wire-stable values.
    UnknownTag {
        /// The unrecognized tag.
        tag: i32,
    },
    /// The index field required by the tagged kind is absent.
    MissingIndex {
        /// The tag whose required field is missing.
        tag: i32,
        /// Name of the absent field.
        field: &'static str,
    },
    /// An index does not refer to a body in the system.
    IndexOutOfRange {
        /// The out-of-range body index.
        index: u32,
        /// Number of bodies in the system.
        len: u32,
    },
    /// A rotating-kind record resolved to the root body, which has no
    /// parent to rotate against.
    RootBodyForRotatingFrame {
        /// The decoded root body.
        body: BodyId,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTag { tag } => write!(f, "unknown frame kind tag {tag}"),
            Self::MissingIndex { tag, field } => {
                write!(f, "frame parameters with tag {tag} are missing {field}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "body index {index} out of range for {len} bodies")
            }
            Self::RootBodyForRotatingFrame { body } => {
                write!(f, "rotating frame parameters resolve to root body {body}")
            }
        }
    }
}

impl std::error::Error for ParamsError {}
