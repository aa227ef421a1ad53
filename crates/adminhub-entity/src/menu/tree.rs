//! Menu tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use super::model::Menu;

/// A node in a menu tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    /// The menu record itself.
    #[serde(flatten)]
    pub menu: Menu,
    /// Child nodes, sorted by `(menu_order, menu_id)`.
    pub children: Vec<MenuNode>,
}

/// A complete menu tree built from a flat snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuTree {
    /// The root nodes, sorted by `(menu_order, menu_id)`.
    pub roots: Vec<MenuNode>,
    /// Number of records whose declared parent did not resolve in the
    /// snapshot and that were promoted to roots. Non-zero values indicate
    /// a data-integrity problem worth surfacing.
    pub orphans: usize,
}

impl MenuTree {
    /// Create an empty menu tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            orphans: 0,
        }
    }
}
