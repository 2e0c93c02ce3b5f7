//! Game events - the only way the machine reports a transition.
//!
//! Each event is an immutable value tagged with its action name and carrying
//! only the fields that action needs. On the wire an event is a flat object:
//!
//! ```json
//! { "action": "siteMoveVertical", "lainMoveAnimation": "jump_up",
//!   "activeLevel": "05", "activeNode": { ... } }
//! ```

pub mod templates;

use rand::Rng;
use serde::{Deserialize, Serialize};
use site_rules::{Direction, Level, Node, SiteId};
use std::str::FromStr;

use crate::context::{MediaComponent, PauseComponent, PromptComponent, SiteRotation};
use crate::error::SceneError;
use crate::save_state::SiteSaveState;

/// Chance that an accepted interaction plays the throw animation; the rest rip.
pub const THROW_PROBABILITY: f64 = 0.4;

/// Avatar animation attached to a movement event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAnimation {
    MoveLeft,
    MoveRight,
    JumpUp,
    JumpDown,
}

impl MoveAnimation {
    /// `move_<direction>` for horizontal and `jump_<direction>` for vertical moves.
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => MoveAnimation::MoveLeft,
            Direction::Right => MoveAnimation::MoveRight,
            Direction::Up => MoveAnimation::JumpUp,
            Direction::Down => MoveAnimation::JumpDown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoveAnimation::MoveLeft => "move_left",
            MoveAnimation::MoveRight => "move_right",
            MoveAnimation::JumpUp => "jump_up",
            MoveAnimation::JumpDown => "jump_down",
        }
    }
}

/// Scene opened by a successful interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionScene {
    Media,
    Tak,
    Gate,
    Polytan,
}

/// Animation of an accepted interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractAnimation {
    Throw,
    Rip,
}

impl InteractAnimation {
    /// Draw once: throw below [`THROW_PROBABILITY`], rip otherwise.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f64>() < THROW_PROBABILITY {
            InteractAnimation::Throw
        } else {
            InteractAnimation::Rip
        }
    }

    pub fn into_event(self, current_scene: InteractionScene) -> GameEvent {
        match self {
            InteractAnimation::Throw => templates::throw_node(current_scene),
            InteractAnimation::Rip => templates::rip_node(current_scene),
        }
    }
}

/// Refusal played when a node's upgrade requirement is not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectOutcome {
    KnockAndFall,
    Knock,
    Explode,
}

impl RejectOutcome {
    pub const ALL: [RejectOutcome; 3] = [
        RejectOutcome::KnockAndFall,
        RejectOutcome::Knock,
        RejectOutcome::Explode,
    ];

    /// Uniform pick among the three outcomes.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn into_event(self) -> GameEvent {
        match self {
            RejectOutcome::KnockAndFall => templates::knock_node_and_fall(),
            RejectOutcome::Knock => templates::knock_node(),
            RejectOutcome::Explode => templates::explode_node(),
        }
    }
}

/// A single state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GameEvent {
    /// Focus a different node without moving the avatar.
    ChangeNode { active_node: Node },
    SiteMoveHorizontal {
        lain_move_animation: MoveAnimation,
        site_rot: SiteRotation,
        active_node: Node,
    },
    SiteMoveVertical {
        lain_move_animation: MoveAnimation,
        active_level: Level,
        active_node: Node,
    },
    SelectLevel {
        lain_move_animation: MoveAnimation,
        active_level: Level,
        active_node: Node,
    },
    EnterLevelSelection { selected_level: u8 },
    ExitLevelSelection,
    ChangeSelectedLevel { selected_level: u8 },
    PauseGame { site_rot: SiteRotation },
    ExitPause { site_rot: SiteRotation },
    ChangePauseComponent { active_pause_component: PauseComponent },
    ShowAbout,
    ExitAbout,
    ShowPermissionDenied,
    DisplayPrompt,
    ExitPrompt,
    ChangePromptComponent { active_prompt_component: PromptComponent },
    /// Handed to the persistence collaborator.
    SaveGame,
    LoadGame,
    ChangeSite {
        new_active_site: SiteId,
        new_active_node: Node,
        new_site_rot: SiteRotation,
        new_active_level: Level,
        new_site_save_state: SiteSaveState,
    },
    ThrowNode { current_scene: InteractionScene },
    RipNode { current_scene: InteractionScene },
    KnockNode,
    KnockNodeAndFall,
    ExplodeNode,
    HideWordNotFound,
    /// Move focus within one side of the media scene.
    ChangeMediaComponent { active_media_component: MediaComponent },
    /// Cross to the other side of the media scene, remembering where focus was.
    ChangeMediaSide {
        active_media_component: MediaComponent,
        last_active_left_side_element: MediaComponent,
        last_active_right_side_element: MediaComponent,
    },
    PlayMedia { media_file: String },
    ExitMedia,
}

impl GameEvent {
    /// The action tag of this event.
    pub fn action(&self) -> EventAction {
        match self {
            GameEvent::ChangeNode { .. } => EventAction::ChangeNode,
            GameEvent::SiteMoveHorizontal { .. } => EventAction::SiteMoveHorizontal,
            GameEvent::SiteMoveVertical { .. } => EventAction::SiteMoveVertical,
            GameEvent::SelectLevel { .. } => EventAction::SelectLevel,
            GameEvent::EnterLevelSelection { .. } => EventAction::EnterLevelSelection,
            GameEvent::ExitLevelSelection => EventAction::ExitLevelSelection,
            GameEvent::ChangeSelectedLevel { .. } => EventAction::ChangeSelectedLevel,
            GameEvent::PauseGame { .. } => EventAction::PauseGame,
            GameEvent::ExitPause { .. } => EventAction::ExitPause,
            GameEvent::ChangePauseComponent { .. } => EventAction::ChangePauseComponent,
            GameEvent::ShowAbout => EventAction::ShowAbout,
            GameEvent::ExitAbout => EventAction::ExitAbout,
            GameEvent::ShowPermissionDenied => EventAction::ShowPermissionDenied,
            GameEvent::DisplayPrompt => EventAction::DisplayPrompt,
            GameEvent::ExitPrompt => EventAction::ExitPrompt,
            GameEvent::ChangePromptComponent { .. } => EventAction::ChangePromptComponent,
            GameEvent::SaveGame => EventAction::SaveGame,
            GameEvent::LoadGame => EventAction::LoadGame,
            GameEvent::ChangeSite { .. } => EventAction::ChangeSite,
            GameEvent::ThrowNode { .. } => EventAction::ThrowNode,
            GameEvent::RipNode { .. } => EventAction::RipNode,
            GameEvent::KnockNode => EventAction::KnockNode,
            GameEvent::KnockNodeAndFall => EventAction::KnockNodeAndFall,
            GameEvent::ExplodeNode => EventAction::ExplodeNode,
            GameEvent::HideWordNotFound => EventAction::HideWordNotFound,
            GameEvent::ChangeMediaComponent { .. } => EventAction::ChangeMediaComponent,
            GameEvent::ChangeMediaSide { .. } => EventAction::ChangeMediaSide,
            GameEvent::PlayMedia { .. } => EventAction::PlayMedia,
            GameEvent::ExitMedia => EventAction::ExitMedia,
        }
    }

    /// Whether this event refuses an interaction.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GameEvent::KnockNode
                | GameEvent::KnockNodeAndFall
                | GameEvent::ExplodeNode
                | GameEvent::ShowPermissionDenied
        )
    }
}

/// The closed set of action names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAction {
    ChangeNode,
    SiteMoveHorizontal,
    SiteMoveVertical,
    SelectLevel,
    EnterLevelSelection,
    ExitLevelSelection,
    ChangeSelectedLevel,
    PauseGame,
    ExitPause,
    ChangePauseComponent,
    ShowAbout,
    ExitAbout,
    ShowPermissionDenied,
    DisplayPrompt,
    ExitPrompt,
    ChangePromptComponent,
    SaveGame,
    LoadGame,
    ChangeSite,
    ThrowNode,
    RipNode,
    KnockNode,
    KnockNodeAndFall,
    ExplodeNode,
    HideWordNotFound,
    ChangeMediaComponent,
    ChangeMediaSide,
    PlayMedia,
    ExitMedia,
}

impl EventAction {
    pub const ALL: [EventAction; 29] = [
        EventAction::ChangeNode,
        EventAction::SiteMoveHorizontal,
        EventAction::SiteMoveVertical,
        EventAction::SelectLevel,
        EventAction::EnterLevelSelection,
        EventAction::ExitLevelSelection,
        EventAction::ChangeSelectedLevel,
        EventAction::PauseGame,
        EventAction::ExitPause,
        EventAction::ChangePauseComponent,
        EventAction::ShowAbout,
        EventAction::ExitAbout,
        EventAction::ShowPermissionDenied,
        EventAction::DisplayPrompt,
        EventAction::ExitPrompt,
        EventAction::ChangePromptComponent,
        EventAction::SaveGame,
        EventAction::LoadGame,
        EventAction::ChangeSite,
        EventAction::ThrowNode,
        EventAction::RipNode,
        EventAction::KnockNode,
        EventAction::KnockNodeAndFall,
        EventAction::ExplodeNode,
        EventAction::HideWordNotFound,
        EventAction::ChangeMediaComponent,
        EventAction::ChangeMediaSide,
        EventAction::PlayMedia,
        EventAction::ExitMedia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventAction::ChangeNode => "changeNode",
            EventAction::SiteMoveHorizontal => "siteMoveHorizontal",
            EventAction::SiteMoveVertical => "siteMoveVertical",
            EventAction::SelectLevel => "selectLevel",
            EventAction::EnterLevelSelection => "enterLevelSelection",
            EventAction::ExitLevelSelection => "exitLevelSelection",
            EventAction::ChangeSelectedLevel => "changeSelectedLevel",
            EventAction::PauseGame => "pauseGame",
            EventAction::ExitPause => "exitPause",
            EventAction::ChangePauseComponent => "changePauseComponent",
            EventAction::ShowAbout => "showAbout",
            EventAction::ExitAbout => "exitAbout",
            EventAction::ShowPermissionDenied => "showPermissionDenied",
            EventAction::DisplayPrompt => "displayPrompt",
            EventAction::ExitPrompt => "exitPrompt",
            EventAction::ChangePromptComponent => "changePromptComponent",
            EventAction::SaveGame => "saveGame",
            EventAction::LoadGame => "loadGame",
            EventAction::ChangeSite => "changeSite",
            EventAction::ThrowNode => "throwNode",
            EventAction::RipNode => "ripNode",
            EventAction::KnockNode => "knockNode",
            EventAction::KnockNodeAndFall => "knockNodeAndFall",
            EventAction::ExplodeNode => "explodeNode",
            EventAction::HideWordNotFound => "hideWordNotFound",
            EventAction::ChangeMediaComponent => "changeMediaComponent",
            EventAction::ChangeMediaSide => "changeMediaSide",
            EventAction::PlayMedia => "playMedia",
            EventAction::ExitMedia => "exitMedia",
        }
    }
}

impl FromStr for EventAction {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| SceneError::UnknownAction(s.to_string()))
    }
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use site_rules::{MatrixIndices, NodeType};

    #[test]
    fn test_action_names_parse_back() {
        for action in EventAction::ALL {
            assert_eq!(action.as_str().parse::<EventAction>().unwrap(), action);
        }
        assert!(matches!(
            "teleport".parse::<EventAction>(),
            Err(SceneError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_wire_tag_matches_action_name() {
        let node = Node::new("0410", "Lda010", NodeType(0)).at(MatrixIndices::new(0, 1));
        let events = [
            templates::change_node(node.clone()),
            templates::site_move_vertical(MoveAnimation::JumpUp, Level::new(5), node),
            templates::exit_prompt(),
            templates::knock_node_and_fall(),
            templates::change_pause_component(PauseComponent::About),
            templates::change_media_side(
                MediaComponent::FstWord,
                MediaComponent::Exit,
                MediaComponent::FstWord,
            ),
            templates::exit_media(),
        ];

        for event in events {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["action"], event.action().as_str());
        }
    }

    #[test]
    fn test_vertical_move_json_shape() {
        let node = Node::new("0520", "Cou013", NodeType(4)).at(MatrixIndices::new(0, 2));
        let event = templates::site_move_vertical(MoveAnimation::JumpUp, Level::new(5), node);
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["lainMoveAnimation"], "jump_up");
        assert_eq!(value["activeLevel"], "05");
        assert_eq!(value["activeNode"]["id"], "0520");
        assert_eq!(value["activeNode"]["matrixIndices"]["rowIdx"], 2);

        let back: GameEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_unit_event_json_shape() {
        let value = serde_json::to_value(templates::hide_word_not_found()).unwrap();
        assert_eq!(value, serde_json::json!({ "action": "hideWordNotFound" }));
    }

    #[test]
    fn test_move_animation_names() {
        assert_eq!(MoveAnimation::for_direction(Direction::Left).as_str(), "move_left");
        assert_eq!(MoveAnimation::for_direction(Direction::Down).as_str(), "jump_down");
        assert_eq!(
            serde_json::to_string(&MoveAnimation::MoveRight).unwrap(),
            "\"move_right\""
        );
    }

    #[test]
    fn test_interact_animation_threshold() {
        let mut low = StepRng::new(0, 0);
        assert_eq!(InteractAnimation::roll(&mut low), InteractAnimation::Throw);

        let mut high = StepRng::new(u64::MAX, 0);
        assert_eq!(InteractAnimation::roll(&mut high), InteractAnimation::Rip);
    }

    #[test]
    fn test_interact_animation_split() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 5_000;
        let throws = (0..trials)
            .filter(|_| InteractAnimation::roll(&mut rng) == InteractAnimation::Throw)
            .count();
        let share = throws as f64 / trials as f64;
        assert!((0.36..0.44).contains(&share), "throw share {}", share);
    }

    #[test]
    fn test_reject_outcome_events() {
        assert_eq!(RejectOutcome::Knock.into_event(), GameEvent::KnockNode);
        assert_eq!(RejectOutcome::KnockAndFall.into_event(), GameEvent::KnockNodeAndFall);
        assert_eq!(RejectOutcome::Explode.into_event(), GameEvent::ExplodeNode);
        assert!(RejectOutcome::ALL.iter().all(|o| o.into_event().is_rejection()));
    }
}
