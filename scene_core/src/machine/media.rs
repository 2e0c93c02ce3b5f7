//! The media scene.
//!
//! Focus moves vertically within a side: `play`/`exit` on the left stop at
//! the ends, the three words on the right wrap. Crossing sides returns focus
//! to wherever it last was on the other side.

use tracing::trace;

use crate::context::{MediaComponent, SceneContext};
use crate::events::{templates, GameEvent};
use crate::input::KeyPress;

pub(super) fn handle(context: &SceneContext, key: KeyPress) -> Option<GameEvent> {
    let focused = context.active_media_component;
    match key {
        KeyPress::Up | KeyPress::Down => {
            move_within_side(focused, key == KeyPress::Up).map(templates::change_media_component)
        }
        KeyPress::Left | KeyPress::Right => switch_side(context, key == KeyPress::Right),
        KeyPress::Circle => select(context),
        _ => None,
    }
}

fn move_within_side(focused: MediaComponent, up: bool) -> Option<MediaComponent> {
    match (focused, up) {
        (MediaComponent::Play, false) => Some(MediaComponent::Exit),
        (MediaComponent::Exit, true) => Some(MediaComponent::Play),
        (MediaComponent::Play, true) | (MediaComponent::Exit, false) => None,
        (MediaComponent::FstWord, true) => Some(MediaComponent::ThirdWord),
        (MediaComponent::FstWord, false) => Some(MediaComponent::SndWord),
        (MediaComponent::SndWord, true) => Some(MediaComponent::FstWord),
        (MediaComponent::SndWord, false) => Some(MediaComponent::ThirdWord),
        (MediaComponent::ThirdWord, true) => Some(MediaComponent::SndWord),
        (MediaComponent::ThirdWord, false) => Some(MediaComponent::FstWord),
    }
}

fn switch_side(context: &SceneContext, to_right: bool) -> Option<GameEvent> {
    let focused = context.active_media_component;
    let left = context.last_active_left_side_element;
    let right = context.last_active_right_side_element;

    match (to_right, focused.is_word()) {
        (true, false) => Some(templates::change_media_side(right, focused, right)),
        (false, true) => Some(templates::change_media_side(left, left, focused)),
        _ => None,
    }
}

fn select(context: &SceneContext) -> Option<GameEvent> {
    match context.active_media_component {
        MediaComponent::Play => match &context.active_node.media_file {
            Some(file) => Some(templates::play_media(file.as_str())),
            None => {
                trace!(node = %context.active_node.id, "no_media_file");
                None
            }
        },
        MediaComponent::Exit => Some(templates::exit_media()),
        _ => None,
    }
}
