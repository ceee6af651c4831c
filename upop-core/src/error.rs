//! Error types.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced while parsing a textual action such as `item-click:1`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// The tag does not name a parseable action.
    #[error("unknown action '{0}'")]
    UnknownAction(String),

    /// The action needs an argument after `:`.
    #[error("action '{action}' is missing its {argument} argument")]
    MissingArgument {
        /// The action tag.
        action: &'static str,
        /// What the argument describes.
        argument: &'static str,
    },

    /// An index argument was not a non-negative integer (or `-1`).
    #[error("invalid index '{value}'")]
    InvalidIndex {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A boolean argument was neither `true` nor `false`.
    #[error("invalid boolean '{0}'")]
    InvalidBool(String),
}
