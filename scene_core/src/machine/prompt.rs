//! The yes/no confirmation prompt opened from the pause menu.

use crate::context::{PauseComponent, PromptComponent, SceneContext};
use crate::events::{templates, GameEvent};
use crate::input::KeyPress;
use crate::save_state::switch_sites;

pub(super) fn handle(context: &SceneContext, key: KeyPress) -> Option<GameEvent> {
    match key {
        KeyPress::Left => Some(templates::change_prompt_component(PromptComponent::Yes)),
        KeyPress::Right => Some(templates::change_prompt_component(PromptComponent::No)),
        KeyPress::Circle => match context.active_prompt_component {
            PromptComponent::No => Some(templates::exit_prompt()),
            PromptComponent::Yes => confirm(context),
        },
        _ => None,
    }
}

/// Commit the action the prompt was opened for.
fn confirm(context: &SceneContext) -> Option<GameEvent> {
    match context.active_pause_component? {
        PauseComponent::Change => Some(switch_sites(context)),
        PauseComponent::Save => Some(templates::save_game()),
        PauseComponent::Load => Some(templates::load_game()),
        PauseComponent::About | PauseComponent::Exit => None,
    }
}
