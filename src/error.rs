//! Failure type for the document fetch path. Both failure kinds — transport
//! and validation — normalize into one value carrying a human-readable
//! message, which is all the error presenter ever shows.

use std::fmt;

/// Why a feed document could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Non-2xx HTTP response.
    Status { path: String, status: u16 },
    /// The request or body read failed before any status was usable.
    Transport { path: String, detail: String },
    /// The body parsed but the document shape is wrong (or it was not JSON).
    Invalid { path: String, violations: Vec<String> },
}

impl LoadError {
    pub fn invalid(path: impl Into<String>, violations: Vec<String>) -> Self {
        Self::Invalid {
            path: path.into(),
            violations,
        }
    }

    /// The endpoint path this failure belongs to.
    pub fn path(&self) -> &str {
        match self {
            Self::Status { path, .. } | Self::Transport { path, .. } | Self::Invalid { path, .. } => {
                path
            }
        }
    }

    /// Message text shown in the error card.
    pub fn message(&self) -> String {
        match self {
            Self::Status { path, status } => format!("Failed to load {path} ({status})"),
            Self::Transport { path, detail } => format!("Failed to load {path}: {detail}"),
            Self::Invalid { violations, .. } => violations.join("; "),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for LoadError {}
