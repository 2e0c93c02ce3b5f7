//! The level selection overlay.

use site_rules::{Direction, Level};

use super::SceneMachine;
use crate::context::SceneContext;
use crate::error::SceneError;
use crate::events::{templates, GameEvent, MoveAnimation};
use crate::input::KeyPress;

impl SceneMachine {
    pub(super) fn handle_level_selection(
        &self,
        context: &SceneContext,
        key: KeyPress,
    ) -> Result<Option<GameEvent>, SceneError> {
        let selected = context.selected_level;

        match key {
            KeyPress::Up => Ok(selected
                .checked_add(1)
                .filter(|level| *level <= context.active_site.max_level())
                .map(templates::change_selected_level)),
            KeyPress::Down => Ok(selected
                .checked_sub(1)
                .filter(|level| *level >= 1)
                .map(templates::change_selected_level)),
            KeyPress::X => Ok(Some(templates::exit_level_selection())),
            KeyPress::Circle => self.jump_to_selected(context),
            _ => Ok(None),
        }
    }

    fn jump_to_selected(&self, context: &SceneContext) -> Result<Option<GameEvent>, SceneError> {
        let current = context.level.get();
        let selected = context.selected_level;
        if selected == current {
            return Ok(None);
        }

        let direction = if selected > current {
            Direction::Up
        } else {
            Direction::Down
        };
        let target = Level::new(selected);

        let Some(search) = self.sites.find_node(
            &context.active_node,
            direction,
            target,
            context.active_site,
            &context.game_progress,
            false,
        ) else {
            return Ok(None);
        };

        let node = self.resolve(&search, context.active_site)?;
        Ok(Some(templates::select_level(
            MoveAnimation::for_direction(direction),
            target,
            node,
        )))
    }
}
