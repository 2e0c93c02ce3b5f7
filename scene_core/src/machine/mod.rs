//! Scene State Machine - one logical input in, at most one event out.
//!
//! Dispatch order:
//! 1. **Prompt**: an open confirmation prompt captures every input
//! 2. **Site**: free-roam navigation and node interaction
//! 3. **Level selection**: choosing a level to jump to
//! 4. **Pause**: the pause menu and its about screen
//! 5. **Media**: the media player's play/exit buttons and related words
//!
//! Inputs that match no rule produce `None`; the caller ignores them.

mod level_selection;
mod media;
mod pause;
mod prompt;
mod site;

use rand::Rng;
use site_rules::{Node, NodeRef, NodeSearch, SiteId, Sites};
use tracing::{debug, trace};

use crate::context::{SceneContext, Subscene};
use crate::error::SceneError;
use crate::events::GameEvent;

/// The dispatcher. Holds the site graphs it queries; never holds scene state.
#[derive(Debug, Clone)]
pub struct SceneMachine {
    sites: Sites,
}

impl SceneMachine {
    /// Create a machine over the given site graphs.
    pub fn new(sites: Sites) -> Self {
        Self { sites }
    }

    /// Decide the transition for `context.key_press`.
    ///
    /// Only the interaction branch draws from `rng`. The sole error is a
    /// metadata lookup for a node the active site does not know.
    pub fn step<R: Rng + ?Sized>(
        &self,
        context: &SceneContext,
        rng: &mut R,
    ) -> Result<Option<GameEvent>, SceneError> {
        let Some(key) = context.key_press else {
            return Ok(None);
        };

        let event = if context.prompt_visible {
            prompt::handle(context, key)
        } else {
            match context.subscene {
                Subscene::Site => self.handle_site(context, key, rng)?,
                Subscene::LevelSelection => self.handle_level_selection(context, key)?,
                Subscene::Pause => pause::handle(context, key),
                Subscene::Media => media::handle(context, key),
            }
        };

        match &event {
            Some(event) => debug!(
                subscene = ?context.subscene,
                prompt = context.prompt_visible,
                key = %key,
                action = %event.action(),
                "scene_event"
            ),
            None => trace!(
                subscene = ?context.subscene,
                prompt = context.prompt_visible,
                key = %key,
                "input_ignored"
            ),
        }

        Ok(event)
    }

    /// [`step`](Self::step) with the thread-local generator.
    pub fn step_with_thread_rng(
        &self,
        context: &SceneContext,
    ) -> Result<Option<GameEvent>, SceneError> {
        self.step(context, &mut rand::thread_rng())
    }

    /// Turn a search result into the node value carried by an event.
    fn resolve(&self, search: &NodeSearch, site: SiteId) -> Result<Node, SceneError> {
        Ok(match &search.node {
            NodeRef::Known(id) => self
                .sites
                .get_node_by_id(id, site)?
                .at(search.matrix_indices),
            NodeRef::Unexplored => Node::unexplored(search.matrix_indices),
        })
    }
}
