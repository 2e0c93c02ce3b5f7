//! Sites - the two parallel worlds and their level-indexed node graphs.

mod graph;
mod loader;
mod matrix;
mod search;

pub use graph::*;
pub use matrix::*;
pub use search::*;

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::SiteError;
use crate::nodes::Node;

/// One of the two worlds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteId {
    A,
    B,
}

impl SiteId {
    /// The world that is not `self`.
    pub fn other(self) -> Self {
        match self {
            SiteId::A => SiteId::B,
            SiteId::B => SiteId::A,
        }
    }

    /// Highest level of this site.
    pub fn max_level(self) -> u8 {
        match self {
            SiteId::A => 22,
            SiteId::B => 13,
        }
    }

    pub fn level_range(self) -> RangeInclusive<u8> {
        1..=self.max_level()
    }

    pub fn contains(self, level: Level) -> bool {
        self.level_range().contains(&level.get())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SiteId::A => "a",
            SiteId::B => "b",
        }
    }
}

impl FromStr for SiteId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(SiteId::A),
            "b" => Ok(SiteId::B),
            other => Err(SiteError::UnknownSite(other.to_string())),
        }
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A level number. Written zero-padded to two digits (`"05"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level(u8);

impl Level {
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// The adjacent level above (`up`) or below. `None` on arithmetic overflow.
    pub fn step(self, up: bool) -> Option<Level> {
        if up {
            self.0.checked_add(1).map(Level)
        } else {
            self.0.checked_sub(1).map(Level)
        }
    }
}

impl FromStr for Level {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map(Level)
            .map_err(|_| SiteError::InvalidLevel(s.to_string()))
    }
}

impl TryFrom<String> for Level {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Both site graphs, addressed by [`SiteId`].
#[derive(Debug, Clone)]
pub struct Sites {
    a: SiteGraph,
    b: SiteGraph,
}

impl Sites {
    /// Pair two graphs. Each must belong to the slot it is passed in.
    pub fn new(a: SiteGraph, b: SiteGraph) -> Result<Self, SiteError> {
        for (expected, graph) in [(SiteId::A, &a), (SiteId::B, &b)] {
            if graph.site() != expected {
                return Err(SiteError::MalformedLayout(format!(
                    "graph for site {} passed as site {}",
                    graph.site(),
                    expected
                )));
            }
        }
        Ok(Self { a, b })
    }

    /// Load both sites from their TOML sources.
    pub fn from_toml_strs(a: &str, b: &str) -> Result<Self, SiteError> {
        Self::new(SiteGraph::from_toml_str(a)?, SiteGraph::from_toml_str(b)?)
    }

    pub fn get(&self, site: SiteId) -> &SiteGraph {
        match site {
            SiteId::A => &self.a,
            SiteId::B => &self.b,
        }
    }

    /// Metadata for `id` in `site`.
    pub fn get_node_by_id(&self, id: &str, site: SiteId) -> Result<Node, SiteError> {
        self.get(site).get_node_by_id(id)
    }

    /// Traversal query against `site`. See [`SiteGraph::find_node`].
    pub fn find_node(
        &self,
        from: &Node,
        direction: Direction,
        level: Level,
        site: SiteId,
        progress: &crate::progress::GameProgress,
        allow_crossing: bool,
    ) -> Option<NodeSearch> {
        self.get(site)
            .find_node(from, direction, level, progress, allow_crossing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_ranges() {
        assert_eq!(SiteId::A.level_range(), 1..=22);
        assert_eq!(SiteId::B.level_range(), 1..=13);
        assert!(SiteId::A.contains(Level::new(22)));
        assert!(!SiteId::B.contains(Level::new(14)));
        assert!(!SiteId::A.contains(Level::new(0)));
    }

    #[test]
    fn test_other_site() {
        assert_eq!(SiteId::A.other(), SiteId::B);
        assert_eq!(SiteId::B.other(), SiteId::A);
    }

    #[test]
    fn test_site_from_str() {
        assert_eq!("b".parse::<SiteId>().unwrap(), SiteId::B);
        assert!(matches!("c".parse::<SiteId>(), Err(SiteError::UnknownSite(_))));
    }

    #[test]
    fn test_level_is_zero_padded() {
        assert_eq!(Level::new(5).to_string(), "05");
        assert_eq!(Level::new(13).to_string(), "13");
        assert_eq!("05".parse::<Level>().unwrap(), Level::new(5));
        assert_eq!("7".parse::<Level>().unwrap(), Level::new(7));
        assert!("x1".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_step() {
        assert_eq!(Level::new(4).step(true), Some(Level::new(5)));
        assert_eq!(Level::new(4).step(false), Some(Level::new(3)));
        assert_eq!(Level::new(0).step(false), None);
    }

    #[test]
    fn test_sites_rejects_swapped_graphs() {
        let result = Sites::new(SiteGraph::new(SiteId::B), SiteGraph::new(SiteId::A));
        assert!(matches!(result, Err(SiteError::MalformedLayout(_))));
    }
}
