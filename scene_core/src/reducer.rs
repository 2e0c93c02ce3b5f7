//! Reference reducer: folds one [`GameEvent`] into the next [`SceneContext`].
//!
//! Presentation-only events (rejections, permission denials, media playback,
//! and interactions opening a scene other than media) leave the context as it
//! was.

use crate::context::{MediaComponent, PauseComponent, PromptComponent, SceneContext, Subscene};
use crate::events::{GameEvent, InteractionScene};

impl SceneContext {
    /// The context after `event`. The key press is consumed.
    pub fn apply(&self, event: &GameEvent) -> SceneContext {
        let mut next = self.clone();
        next.key_press = None;

        match event {
            GameEvent::ChangeNode { active_node } => {
                next.active_node = active_node.clone();
            }
            GameEvent::SiteMoveHorizontal {
                site_rot,
                active_node,
                ..
            } => {
                next.active_node = active_node.clone();
                next.site_rot_y = site_rot[1];
            }
            GameEvent::SiteMoveVertical {
                active_level,
                active_node,
                ..
            } => {
                next.active_node = active_node.clone();
                next.level = *active_level;
            }
            GameEvent::SelectLevel {
                active_level,
                active_node,
                ..
            } => {
                next.active_node = active_node.clone();
                next.level = *active_level;
                next.selected_level = active_level.get();
                next.subscene = Subscene::Site;
            }
            GameEvent::EnterLevelSelection { selected_level } => {
                next.subscene = Subscene::LevelSelection;
                next.selected_level = *selected_level;
            }
            GameEvent::ExitLevelSelection => next.subscene = Subscene::Site,
            GameEvent::ChangeSelectedLevel { selected_level } => {
                next.selected_level = *selected_level;
            }
            GameEvent::PauseGame { .. } => {
                next.subscene = Subscene::Pause;
                next.active_pause_component = Some(PauseComponent::Change);
            }
            GameEvent::ExitPause { site_rot } => {
                next.subscene = Subscene::Site;
                next.active_pause_component = None;
                next.site_rot_y = site_rot[1];
            }
            GameEvent::ChangePauseComponent {
                active_pause_component,
            } => next.active_pause_component = Some(*active_pause_component),
            GameEvent::ShowAbout => next.showing_about = true,
            GameEvent::ExitAbout => next.showing_about = false,
            GameEvent::DisplayPrompt => {
                next.prompt_visible = true;
                next.active_prompt_component = PromptComponent::No;
            }
            GameEvent::ExitPrompt | GameEvent::SaveGame | GameEvent::LoadGame => {
                next.prompt_visible = false;
            }
            GameEvent::ChangePromptComponent {
                active_prompt_component,
            } => next.active_prompt_component = *active_prompt_component,
            GameEvent::ChangeSite {
                new_active_site,
                new_active_node,
                new_site_rot,
                new_active_level,
                new_site_save_state,
            } => {
                next.active_site = *new_active_site;
                next.active_node = new_active_node.clone();
                next.site_rot_y = new_site_rot[1];
                next.level = *new_active_level;
                next.selected_level = new_active_level.get();
                next.site_save_state = new_site_save_state.clone();
                next.prompt_visible = false;
                next.active_prompt_component = PromptComponent::No;
                next.active_pause_component = None;
                next.subscene = Subscene::Site;
            }
            GameEvent::HideWordNotFound => next.word_not_found = false,
            GameEvent::ThrowNode {
                current_scene: InteractionScene::Media,
            }
            | GameEvent::RipNode {
                current_scene: InteractionScene::Media,
            } => {
                next.subscene = Subscene::Media;
                next.reset_media_focus();
            }
            GameEvent::ExitMedia => {
                next.subscene = Subscene::Site;
                next.reset_media_focus();
            }
            GameEvent::ChangeMediaComponent {
                active_media_component,
            } => next.active_media_component = *active_media_component,
            GameEvent::ChangeMediaSide {
                active_media_component,
                last_active_left_side_element,
                last_active_right_side_element,
            } => {
                next.active_media_component = *active_media_component;
                next.last_active_left_side_element = *last_active_left_side_element;
                next.last_active_right_side_element = *last_active_right_side_element;
            }
            GameEvent::ShowPermissionDenied
            | GameEvent::PlayMedia { .. }
            | GameEvent::ThrowNode { .. }
            | GameEvent::RipNode { .. }
            | GameEvent::KnockNode
            | GameEvent::KnockNodeAndFall
            | GameEvent::ExplodeNode => {}
        }

        next
    }

    fn reset_media_focus(&mut self) {
        self.active_media_component = MediaComponent::Play;
        self.last_active_left_side_element = MediaComponent::Play;
        self.last_active_right_side_element = MediaComponent::FstWord;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyPress;
    use crate::test_support::{context, context_at, machine};
    use rand::rngs::mock::StepRng;
    use site_rules::{Level, SiteId};

    /// Feed `keys` through machine and reducer, starting from `context`.
    fn play(mut context: SceneContext, keys: &[KeyPress]) -> SceneContext {
        let machine = machine();
        let mut rng = StepRng::new(0, 0);
        for key in keys {
            context.key_press = Some(*key);
            if let Some(event) = machine.step(&context, &mut rng).unwrap() {
                context = context.apply(&event);
            }
        }
        context
    }

    #[test]
    fn test_movement_updates_position() {
        let moved = play(context(KeyPress::Right), &[KeyPress::Right]);
        assert_eq!(moved.active_node.id, "0411");
        assert!(moved.site_rot_y < 0.0);

        let jumped = play(context(KeyPress::Up), &[KeyPress::Up]);
        assert_eq!(jumped.level, Level::new(5));
        assert_eq!(jumped.active_node.id, "0520");
        assert_eq!(jumped.key_press, None);
    }

    #[test]
    fn test_level_selection_round_trip() {
        let start = context(KeyPress::L2);
        let selected = play(
            start.clone(),
            &[KeyPress::L2, KeyPress::Down, KeyPress::Circle],
        );

        assert_eq!(selected.subscene, Subscene::Site);
        assert_eq!(selected.level, Level::new(3));
        assert_eq!(selected.active_node.id, "0300");

        let cancelled = play(start, &[KeyPress::L2, KeyPress::Up, KeyPress::X]);
        assert_eq!(cancelled.subscene, Subscene::Site);
        assert_eq!(cancelled.level, Level::new(4));
    }

    #[test]
    fn test_pause_opens_on_change_and_exits() {
        let paused = play(context(KeyPress::Triangle), &[KeyPress::Triangle]);
        assert_eq!(paused.subscene, Subscene::Pause);
        assert_eq!(paused.active_pause_component, Some(PauseComponent::Change));

        let resumed = play(paused, &[KeyPress::Down, KeyPress::Down, KeyPress::Circle]);
        assert_eq!(resumed.subscene, Subscene::Site);
        assert_eq!(resumed.active_pause_component, None);
    }

    #[test]
    fn test_about_screen_toggles() {
        let paused = play(context(KeyPress::Triangle), &[KeyPress::Triangle, KeyPress::Up]);
        let about = play(paused, &[KeyPress::Circle]);
        assert!(about.showing_about);

        let back = play(about, &[KeyPress::Left]);
        assert!(!back.showing_about);
        assert_eq!(back.subscene, Subscene::Pause);
    }

    #[test]
    fn test_prompt_declined_keeps_site() {
        let declined = play(
            context(KeyPress::Triangle),
            &[KeyPress::Triangle, KeyPress::Circle, KeyPress::Circle],
        );
        assert!(!declined.prompt_visible);
        assert_eq!(declined.active_site, SiteId::A);
        assert_eq!(declined.subscene, Subscene::Pause);
    }

    #[test]
    fn test_change_site_and_back_restores_position() {
        let change = [
            KeyPress::Triangle,
            KeyPress::Circle,
            KeyPress::Left,
            KeyPress::Circle,
        ];
        let start = play(
            context_at("0413", Level::new(4), KeyPress::Right),
            &[KeyPress::Left],
        );
        assert_eq!(start.active_node.id, "0402");

        let on_b = play(start.clone(), &change);
        assert_eq!(on_b.active_site, SiteId::B);
        assert_eq!(on_b.active_node.id, "0121");
        assert_eq!(on_b.level, Level::new(1));
        assert_eq!(on_b.subscene, Subscene::Site);
        assert!(!on_b.prompt_visible);
        assert_eq!(on_b.active_pause_component, None);

        let back = play(on_b, &change);
        assert_eq!(back.active_site, SiteId::A);
        assert_eq!(back.active_node, start.active_node);
        assert_eq!(back.site_rot_y, start.site_rot_y);
        assert_eq!(back.level, start.level);
    }

    #[test]
    fn test_media_scene_round_trip() {
        let watching = play(context(KeyPress::Circle), &[KeyPress::Circle]);
        assert_eq!(watching.subscene, Subscene::Media);
        assert_eq!(watching.active_media_component, MediaComponent::Play);

        let words = play(
            watching,
            &[KeyPress::Right, KeyPress::Down, KeyPress::Left, KeyPress::Down],
        );
        assert_eq!(words.active_media_component, MediaComponent::Exit);
        assert_eq!(words.last_active_right_side_element, MediaComponent::SndWord);

        let back = play(words.clone(), &[KeyPress::Right]);
        assert_eq!(back.active_media_component, MediaComponent::SndWord);
        assert_eq!(back.last_active_left_side_element, MediaComponent::Exit);

        let left = play(words, &[KeyPress::Circle]);
        assert_eq!(left.subscene, Subscene::Site);
        assert_eq!(left.active_media_component, MediaComponent::Play);
        assert_eq!(left.active_node.id, "0410");
    }

    #[test]
    fn test_other_scenes_stay_on_site() {
        let tak = play(
            context_at("0411", Level::new(4), KeyPress::Circle),
            &[KeyPress::Circle],
        );
        assert_eq!(tak.subscene, Subscene::Site);
    }

    #[test]
    fn test_presentation_events_leave_context() {
        let context = context(KeyPress::Circle);
        let mut expected = context.clone();
        expected.key_press = None;

        for event in [
            GameEvent::ShowPermissionDenied,
            GameEvent::KnockNode,
            GameEvent::KnockNodeAndFall,
            GameEvent::ExplodeNode,
            GameEvent::PlayMedia {
                media_file: "LDA010.STR".into(),
            },
        ] {
            assert_eq!(context.apply(&event), expected);
        }
    }

    #[test]
    fn test_hide_word_not_found() {
        let mut context = context(KeyPress::X);
        context.word_not_found = true;
        assert!(!context.apply(&GameEvent::HideWordNotFound).word_not_found);
    }
}
