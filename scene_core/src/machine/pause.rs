//! The pause menu.

use tracing::warn;

use crate::context::{PauseComponent, SceneContext};
use crate::events::{templates, GameEvent};
use crate::input::KeyPress;

/// Above this gate level the player may no longer change sites.
const CHANGE_SITE_MAX_GATE_LEVEL: u32 = 4;

pub(super) fn handle(context: &SceneContext, key: KeyPress) -> Option<GameEvent> {
    if context.showing_about {
        return Some(templates::exit_about());
    }

    match key {
        KeyPress::Up | KeyPress::Down => {
            move_focus(context.active_pause_component, key == KeyPress::Up)
                .map(templates::change_pause_component)
        }
        KeyPress::Circle => Some(select(context, context.active_pause_component?)),
        _ => None,
    }
}

/// With nothing focused, down lands on the first entry and up goes nowhere.
fn move_focus(focused: Option<PauseComponent>, up: bool) -> Option<PauseComponent> {
    match focused {
        Some(focused) => focused.neighbor(up),
        None if up => None,
        None => PauseComponent::ORDER.first().copied(),
    }
}

fn select(context: &SceneContext, focused: PauseComponent) -> GameEvent {
    match focused {
        PauseComponent::About => templates::show_about(),
        PauseComponent::Exit => templates::exit_pause([0.0, context.site_rot_y, 0.0]),
        PauseComponent::Save | PauseComponent::Load => templates::display_prompt(),
        PauseComponent::Change => {
            if context.game_progress.gate_level > CHANGE_SITE_MAX_GATE_LEVEL {
                warn!(
                    gate_level = context.game_progress.gate_level,
                    "site_change_denied"
                );
                templates::show_permission_denied()
            } else {
                templates::display_prompt()
            }
        }
    }
}
