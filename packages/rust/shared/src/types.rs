//! Core domain types for similarscan.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AppId
// ---------------------------------------------------------------------------

/// A Steam application identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub u32);

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AppId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// ---------------------------------------------------------------------------
// GameItem
// ---------------------------------------------------------------------------

/// One game discovered on a recommendation page. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameItem {
    /// Appid parsed from the store link. Absent when the href carries no
    /// `/app/<digits>` segment; such items are reported but never traversed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appid: Option<AppId>,
    /// Absolute store URL for the game.
    pub href: String,
    /// Display name derived from the URL path segment after the appid.
    pub name: String,
    /// Traversal distance from the seed appid.
    pub depth: u32,
    /// Category inferred from the nearest ancestor container id,
    /// trailing digits stripped. Empty when no ancestor carries an id.
    pub category: String,
}

impl GameItem {
    /// Whether this item can enter the frontier (has a dedup key).
    pub fn has_appid(&self) -> bool {
        self.appid.is_some()
    }
}
