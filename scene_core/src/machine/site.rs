//! Free-roam navigation and node interaction.

use rand::Rng;
use site_rules::{is_node_visible, Direction, Node};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use tracing::{trace, warn};

use super::SceneMachine;
use crate::context::SceneContext;
use crate::error::SceneError;
use crate::events::{templates, GameEvent, InteractAnimation, InteractionScene, MoveAnimation, RejectOutcome};
use crate::input::KeyPress;

impl SceneMachine {
    pub(super) fn handle_site<R: Rng + ?Sized>(
        &self,
        context: &SceneContext,
        key: KeyPress,
        rng: &mut R,
    ) -> Result<Option<GameEvent>, SceneError> {
        // The notice swallows the input that dismisses it.
        if context.word_not_found {
            return Ok(Some(templates::hide_word_not_found()));
        }

        match key {
            KeyPress::Left => self.move_horizontal(context, Direction::Left),
            KeyPress::Right => self.move_horizontal(context, Direction::Right),
            KeyPress::Up => self.move_vertical(context, Direction::Up),
            KeyPress::Down => self.move_vertical(context, Direction::Down),
            KeyPress::Circle => Ok(interact(context, rng)),
            KeyPress::L2 => Ok(Some(templates::enter_level_selection(context.level.get()))),
            KeyPress::Triangle => Ok(Some(templates::pause_game([
                FRAC_PI_2,
                context.site_rot_y,
                0.0,
            ]))),
            KeyPress::X => Ok(None),
        }
    }

    fn move_horizontal(
        &self,
        context: &SceneContext,
        direction: Direction,
    ) -> Result<Option<GameEvent>, SceneError> {
        let Some(search) = self.sites.find_node(
            &context.active_node,
            direction,
            context.level,
            context.active_site,
            &context.game_progress,
            true,
        ) else {
            return Ok(None);
        };

        let node = self.resolve(&search, context.active_site)?;
        if !search.did_move {
            return Ok(Some(templates::change_node(node)));
        }

        let turn = match direction {
            Direction::Left => FRAC_PI_4,
            _ => -FRAC_PI_4,
        };
        Ok(Some(templates::site_move_horizontal(
            MoveAnimation::for_direction(direction),
            [0.0, context.site_rot_y + turn, 0.0],
            node,
        )))
    }

    fn move_vertical(
        &self,
        context: &SceneContext,
        direction: Direction,
    ) -> Result<Option<GameEvent>, SceneError> {
        let Some(level) = context.level.step(direction == Direction::Up) else {
            return Ok(None);
        };
        let Some(search) = self.sites.find_node(
            &context.active_node,
            direction,
            context.level,
            context.active_site,
            &context.game_progress,
            true,
        ) else {
            return Ok(None);
        };

        let node = self.resolve(&search, context.active_site)?;
        if !search.did_move {
            return Ok(Some(templates::change_node(node)));
        }

        Ok(Some(templates::site_move_vertical(
            MoveAnimation::for_direction(direction),
            level,
            node,
        )))
    }
}

/// Interact with the focused node.
fn interact<R: Rng + ?Sized>(context: &SceneContext, rng: &mut R) -> Option<GameEvent> {
    let node = &context.active_node;
    if !is_node_visible(node, &context.game_progress) {
        trace!(node = %node.id, "interaction_on_hidden_node");
        return None;
    }

    if node.upgrade_requirement > context.game_progress.sskn_level {
        let outcome = RejectOutcome::roll(rng);
        warn!(
            node = %node.id,
            requirement = node.upgrade_requirement,
            sskn_level = context.game_progress.sskn_level,
            outcome = ?outcome,
            "interaction_rejected"
        );
        return Some(outcome.into_event());
    }

    let scene = interaction_scene(node)?;
    Some(InteractAnimation::roll(rng).into_event(scene))
}

/// Scene a node opens, by type. Types outside the table open nothing.
fn interaction_scene(node: &Node) -> Option<InteractionScene> {
    match node.node_type.0 {
        0 | 2..=5 => Some(InteractionScene::Media),
        6 if node.category_tag() == "TaK" => Some(InteractionScene::Tak),
        6 => Some(InteractionScene::Media),
        7 | 8 => Some(InteractionScene::Gate),
        9 => Some(InteractionScene::Polytan),
        _ => None,
    }
}
