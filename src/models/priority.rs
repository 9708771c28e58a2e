//! Priority levels shared by events
//!
//! Variants are declared in ascending sort order, so `P0` sorts first.

use serde::{Deserialize, Serialize};

/// Priority (p0 = most critical)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Critical - must be handled first
    P0,
    /// High priority (default)
    #[default]
    P1,
    /// Medium priority
    P2,
    /// Low priority
    P3,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P0 => write!(f, "p0"),
            Self::P1 => write!(f, "p1"),
            Self::P2 => write!(f, "p2"),
            Self::P3 => write!(f, "p3"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p0" | "0" | "critical" => Ok(Self::P0),
            "p1" | "1" | "high" => Ok(Self::P1),
            "p2" | "2" | "medium" | "med" => Ok(Self::P2),
            "p3" | "3" | "low" => Ok(Self::P3),
            _ => Err(format!("Invalid priority: {s}. Use: p0, p1, p2, p3 (or 0-3)")),
        }
    }
}
