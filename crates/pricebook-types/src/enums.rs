//! Book side enum

use serde::{Deserialize, Serialize};

/// Side of the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Sell-side order
    Ask,
    /// Buy-side order
    Bid,
}

impl Side {
    /// Label used in notices ("Ask" / "Bid")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ask => "Ask",
            Self::Bid => "Bid",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
