//! Save/restore of per-site navigation context.
//!
//! One site is live in the [`SceneContext`]; the other lives in the
//! [`SiteSaveState`]. Switching writes the live site's snapshot and reads the
//! incoming one in a single step, so the map never holds a stale snapshot of
//! the site being left.

use serde::{Deserialize, Serialize};
use site_rules::{Level, Node, SiteId, Sites};
use tracing::debug;

use crate::context::{facing_rotation, SceneContext, SiteRotation};
use crate::error::SceneError;
use crate::events::{templates, GameEvent};

/// Navigation context of one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSnapshot {
    pub active_node: Node,
    pub site_rot: SiteRotation,
    pub active_level: Level,
}

impl SiteSnapshot {
    /// Snapshot of the live site in `context`.
    pub fn capture(context: &SceneContext) -> Self {
        Self {
            active_node: context.active_node.clone(),
            site_rot: [0.0, context.site_rot_y, 0.0],
            active_level: context.level,
        }
    }
}

/// Saved snapshot per site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSaveState {
    a: SiteSnapshot,
    b: SiteSnapshot,
}

impl SiteSaveState {
    pub fn new(a: SiteSnapshot, b: SiteSnapshot) -> Self {
        Self { a, b }
    }

    /// Both sites at their start points.
    pub fn initial(sites: &Sites) -> Result<Self, SceneError> {
        let start = |site: SiteId| -> Result<SiteSnapshot, SceneError> {
            let (point, node) = sites.get(site).start_node()?;
            Ok(SiteSnapshot {
                site_rot: [0.0, facing_rotation(point.matrix_idx), 0.0],
                active_node: node,
                active_level: point.level,
            })
        };
        Ok(Self::new(start(SiteId::A)?, start(SiteId::B)?))
    }

    pub fn get(&self, site: SiteId) -> &SiteSnapshot {
        match site {
            SiteId::A => &self.a,
            SiteId::B => &self.b,
        }
    }

    /// Copy with `site`'s slot replaced.
    pub fn with(&self, site: SiteId, snapshot: SiteSnapshot) -> Self {
        let mut next = self.clone();
        match site {
            SiteId::A => next.a = snapshot,
            SiteId::B => next.b = snapshot,
        }
        next
    }

    /// Store `live` as `outgoing`'s snapshot and hand back the other site's.
    ///
    /// Returns the incoming snapshot and the updated map.
    pub fn swap(&self, outgoing: SiteId, live: SiteSnapshot) -> (SiteSnapshot, Self) {
        let incoming = self.get(outgoing.other()).clone();
        (incoming, self.with(outgoing, live))
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(source: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(source)?)
    }
}

/// The site-switch event for `context`: persist the live site, restore the other.
pub fn switch_sites(context: &SceneContext) -> GameEvent {
    let outgoing = context.active_site;
    let (incoming, save_state) = context
        .site_save_state
        .swap(outgoing, SiteSnapshot::capture(context));

    debug!(
        from = %outgoing,
        to = %outgoing.other(),
        level = %incoming.active_level,
        node = %incoming.active_node.id,
        "site_switch"
    );

    templates::change_site(
        outgoing.other(),
        incoming.active_node,
        incoming.site_rot,
        incoming.active_level,
        save_state,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, sites};
    use site_rules::MatrixIndices;

    #[test]
    fn test_swap_writes_outgoing_and_reads_incoming() {
        let sites = sites();
        let state = SiteSaveState::initial(&sites).unwrap();
        let live = SiteSnapshot {
            active_node: sites
                .get(SiteId::A)
                .node_at(Level::new(5), MatrixIndices::new(0, 2))
                .unwrap(),
            site_rot: [0.0, 1.5, 0.0],
            active_level: Level::new(5),
        };

        let (incoming, next) = state.swap(SiteId::A, live.clone());

        assert_eq!(&incoming, state.get(SiteId::B));
        assert_eq!(next.get(SiteId::A), &live);
        assert_eq!(next.get(SiteId::B), state.get(SiteId::B));
    }

    #[test]
    fn test_switch_sites_event() {
        let mut context = context(crate::input::KeyPress::Circle);
        context.site_rot_y = 0.25;

        match switch_sites(&context) {
            GameEvent::ChangeSite {
                new_active_site,
                new_active_node,
                new_active_level,
                new_site_save_state,
                ..
            } => {
                assert_eq!(new_active_site, SiteId::B);
                assert_eq!(new_active_node.id, "0121");
                assert_eq!(new_active_level, Level::new(1));

                let saved = new_site_save_state.get(SiteId::A);
                assert_eq!(saved.active_node, context.active_node);
                assert_eq!(saved.site_rot, [0.0, 0.25, 0.0]);
                assert_eq!(saved.active_level, context.level);
            }
            other => panic!("expected changeSite, got {:?}", other),
        }
    }

    #[test]
    fn test_save_state_json_shape() {
        let state = SiteSaveState::initial(&sites()).unwrap();
        let json = state.to_json().unwrap();

        assert!(json.contains("\"a\":{"));
        assert!(json.contains("\"activeLevel\":\"04\""));
        assert!(json.contains("\"siteRot\":[0.0,"));
        assert_eq!(SiteSaveState::from_json(&json).unwrap(), state);
    }
}
