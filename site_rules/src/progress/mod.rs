//! Player progress and the visibility rules derived from it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::nodes::Node;

/// Cumulative player progress.
///
/// Only read here; advancing it belongs to whoever applies game events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    pub sskn_level: u32,
    pub gate_level: u32,
    pub final_video_viewcount: u32,

    /// Names of nodes the player has opened.
    #[serde(default)]
    pub viewed_nodes: BTreeSet<String>,

    /// Names of nodes taken off the site after being consumed.
    #[serde(default)]
    pub hidden_nodes: BTreeSet<String>,
}

impl GameProgress {
    /// Create a fresh progress record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sskn_level(mut self, level: u32) -> Self {
        self.sskn_level = level;
        self
    }

    pub fn with_gate_level(mut self, level: u32) -> Self {
        self.gate_level = level;
        self
    }

    pub fn with_final_video_viewcount(mut self, viewcount: u32) -> Self {
        self.final_video_viewcount = viewcount;
        self
    }

    /// Record that a node has been viewed.
    pub fn mark_viewed(&mut self, node_name: impl Into<String>) {
        self.viewed_nodes.insert(node_name.into());
    }

    /// Remove a node from the visible site.
    pub fn hide_node(&mut self, node_name: impl Into<String>) {
        self.hidden_nodes.insert(node_name.into());
    }

    pub fn has_viewed(&self, node_name: &str) -> bool {
        self.viewed_nodes.contains(node_name)
    }
}

/// Whether `node` can be seen, and therefore interacted with, at `progress`.
///
/// The placeholder (empty id) is never visible.
pub fn is_node_visible(node: &Node, progress: &GameProgress) -> bool {
    if !node.is_present() {
        return false;
    }

    let unlocked = node
        .unlocked_by
        .as_deref()
        .map_or(true, |name| progress.has_viewed(name));

    unlocked
        && !progress.hidden_nodes.contains(&node.node_name)
        && node.required_final_video_viewcount <= progress.final_video_viewcount
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{MatrixIndices, NodeType};

    fn node() -> Node {
        Node::new("0101", "Lda001", NodeType(0))
    }

    #[test]
    fn test_plain_node_is_visible() {
        assert!(is_node_visible(&node(), &GameProgress::new()));
    }

    #[test]
    fn test_placeholder_is_never_visible() {
        let placeholder = Node::unexplored(MatrixIndices::default());
        assert!(!is_node_visible(&placeholder, &GameProgress::new()));
    }

    #[test]
    fn test_unlocked_by_requires_viewed_node() {
        let locked = node().with_unlocked_by("Lda000");
        let mut progress = GameProgress::new();
        assert!(!is_node_visible(&locked, &progress));

        progress.mark_viewed("Lda000");
        assert!(is_node_visible(&locked, &progress));
    }

    #[test]
    fn test_hidden_node_is_invisible() {
        let mut progress = GameProgress::new();
        progress.hide_node("Lda001");
        assert!(!is_node_visible(&node(), &progress));
    }

    #[test]
    fn test_final_video_viewcount_gate() {
        let late = node().with_required_final_video_viewcount(2);
        assert!(!is_node_visible(&late, &GameProgress::new().with_final_video_viewcount(1)));
        assert!(is_node_visible(&late, &GameProgress::new().with_final_video_viewcount(2)));
    }

    #[test]
    fn test_upgrade_requirement_does_not_affect_visibility() {
        let gated = node().with_upgrade_requirement(5);
        assert!(is_node_visible(&gated, &GameProgress::new()));
    }
}
