//! Notice kind enumeration.

use serde::{Deserialize, Serialize};

/// Display category of a notice.
///
/// Purely cosmetic: the engine treats all kinds identically, the host
/// renderer picks styling from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Informational notice.
    Info,
    /// Error-styled notice.
    Error,
}

impl NoticeKind {
    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
