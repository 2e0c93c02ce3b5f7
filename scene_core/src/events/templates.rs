//! Event templates - one pure constructor per action.

use site_rules::{Level, Node, SiteId};

use super::{GameEvent, InteractionScene, MoveAnimation};
use crate::context::{MediaComponent, PauseComponent, PromptComponent, SiteRotation};
use crate::save_state::SiteSaveState;

pub fn change_node(active_node: Node) -> GameEvent {
    GameEvent::ChangeNode { active_node }
}

pub fn site_move_horizontal(
    lain_move_animation: MoveAnimation,
    site_rot: SiteRotation,
    active_node: Node,
) -> GameEvent {
    GameEvent::SiteMoveHorizontal {
        lain_move_animation,
        site_rot,
        active_node,
    }
}

pub fn site_move_vertical(
    lain_move_animation: MoveAnimation,
    active_level: Level,
    active_node: Node,
) -> GameEvent {
    GameEvent::SiteMoveVertical {
        lain_move_animation,
        active_level,
        active_node,
    }
}

pub fn select_level(
    lain_move_animation: MoveAnimation,
    active_level: Level,
    active_node: Node,
) -> GameEvent {
    GameEvent::SelectLevel {
        lain_move_animation,
        active_level,
        active_node,
    }
}

pub fn enter_level_selection(selected_level: u8) -> GameEvent {
    GameEvent::EnterLevelSelection { selected_level }
}

pub fn exit_level_selection() -> GameEvent {
    GameEvent::ExitLevelSelection
}

pub fn change_selected_level(selected_level: u8) -> GameEvent {
    GameEvent::ChangeSelectedLevel { selected_level }
}

pub fn pause_game(site_rot: SiteRotation) -> GameEvent {
    GameEvent::PauseGame { site_rot }
}

pub fn exit_pause(site_rot: SiteRotation) -> GameEvent {
    GameEvent::ExitPause { site_rot }
}

pub fn change_pause_component(active_pause_component: PauseComponent) -> GameEvent {
    GameEvent::ChangePauseComponent {
        active_pause_component,
    }
}

pub fn show_about() -> GameEvent {
    GameEvent::ShowAbout
}

pub fn exit_about() -> GameEvent {
    GameEvent::ExitAbout
}

pub fn show_permission_denied() -> GameEvent {
    GameEvent::ShowPermissionDenied
}

pub fn display_prompt() -> GameEvent {
    GameEvent::DisplayPrompt
}

pub fn exit_prompt() -> GameEvent {
    GameEvent::ExitPrompt
}

pub fn change_prompt_component(active_prompt_component: PromptComponent) -> GameEvent {
    GameEvent::ChangePromptComponent {
        active_prompt_component,
    }
}

pub fn save_game() -> GameEvent {
    GameEvent::SaveGame
}

pub fn load_game() -> GameEvent {
    GameEvent::LoadGame
}

pub fn change_site(
    new_active_site: SiteId,
    new_active_node: Node,
    new_site_rot: SiteRotation,
    new_active_level: Level,
    new_site_save_state: SiteSaveState,
) -> GameEvent {
    GameEvent::ChangeSite {
        new_active_site,
        new_active_node,
        new_site_rot,
        new_active_level,
        new_site_save_state,
    }
}

pub fn throw_node(current_scene: InteractionScene) -> GameEvent {
    GameEvent::ThrowNode { current_scene }
}

pub fn rip_node(current_scene: InteractionScene) -> GameEvent {
    GameEvent::RipNode { current_scene }
}

pub fn knock_node() -> GameEvent {
    GameEvent::KnockNode
}

pub fn knock_node_and_fall() -> GameEvent {
    GameEvent::KnockNodeAndFall
}

pub fn explode_node() -> GameEvent {
    GameEvent::ExplodeNode
}

pub fn hide_word_not_found() -> GameEvent {
    GameEvent::HideWordNotFound
}

pub fn change_media_component(active_media_component: MediaComponent) -> GameEvent {
    GameEvent::ChangeMediaComponent {
        active_media_component,
    }
}

pub fn change_media_side(
    active_media_component: MediaComponent,
    last_active_left_side_element: MediaComponent,
    last_active_right_side_element: MediaComponent,
) -> GameEvent {
    GameEvent::ChangeMediaSide {
        active_media_component,
        last_active_left_side_element,
        last_active_right_side_element,
    }
}

pub fn play_media(media_file: impl Into<String>) -> GameEvent {
    GameEvent::PlayMedia {
        media_file: media_file.into(),
    }
}

pub fn exit_media() -> GameEvent {
    GameEvent::ExitMedia
}
