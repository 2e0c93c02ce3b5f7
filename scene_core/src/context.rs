//! The scene context - the read-only snapshot the machine decides from.

use serde::{Deserialize, Serialize};
use site_rules::{GameProgress, Level, Node, SiteId, Sites};
use std::f64::consts::FRAC_PI_4;

use crate::error::SceneError;
use crate::input::KeyPress;
use crate::save_state::SiteSaveState;

/// Site rotation as `[x, y, z]` radians.
pub type SiteRotation = [f64; 3];

/// Y rotation that faces ring column `matrix_idx`.
///
/// Each step to the right turns the site by -45 degrees.
pub fn facing_rotation(matrix_idx: u8) -> f64 {
    -f64::from(matrix_idx) * FRAC_PI_4
}

/// Primary interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subscene {
    Site,
    LevelSelection,
    Pause,
    /// The media player opened by interacting with a media node.
    Media,
}

/// Entries of the pause menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseComponent {
    Load,
    About,
    Change,
    Save,
    Exit,
}

impl PauseComponent {
    pub const ORDER: [PauseComponent; 5] = [
        PauseComponent::Load,
        PauseComponent::About,
        PauseComponent::Change,
        PauseComponent::Save,
        PauseComponent::Exit,
    ];

    /// The entry above (`up`) or below this one. Focus does not wrap.
    pub fn neighbor(self, up: bool) -> Option<Self> {
        let idx = Self::ORDER.iter().position(|c| *c == self)?;
        let next = if up { idx.checked_sub(1)? } else { idx + 1 };
        Self::ORDER.get(next).copied()
    }
}

/// Focusable elements of the media scene.
///
/// `play` and `exit` form the left side; the three related words the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaComponent {
    Play,
    Exit,
    FstWord,
    SndWord,
    ThirdWord,
}

impl MediaComponent {
    pub fn is_word(self) -> bool {
        matches!(
            self,
            MediaComponent::FstWord | MediaComponent::SndWord | MediaComponent::ThirdWord
        )
    }
}

/// Options of the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptComponent {
    Yes,
    No,
}

/// Everything the machine reads for one input.
///
/// The reducer owns the authoritative copy; the machine only borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneContext {
    pub subscene: Subscene,
    pub selected_level: u8,
    pub active_pause_component: Option<PauseComponent>,
    pub game_progress: GameProgress,
    pub active_site: SiteId,
    pub site_rot_y: f64,
    pub active_node: Node,
    /// Level the player is standing on.
    pub level: Level,
    pub key_press: Option<KeyPress>,
    pub showing_about: bool,
    pub prompt_visible: bool,
    pub active_prompt_component: PromptComponent,
    pub site_save_state: SiteSaveState,
    pub word_not_found: bool,
    pub active_media_component: MediaComponent,
    /// Where focus returns when the media scene switches back to the left side.
    pub last_active_left_side_element: MediaComponent,
    pub last_active_right_side_element: MediaComponent,
}

impl SceneContext {
    /// A fresh context standing at `site`'s start point, with both sites'
    /// save slots seeded from their start points.
    pub fn new(sites: &Sites, site: SiteId, game_progress: GameProgress) -> Result<Self, SceneError> {
        let site_save_state = SiteSaveState::initial(sites)?;
        let snapshot = site_save_state.get(site).clone();

        Ok(Self {
            subscene: Subscene::Site,
            selected_level: snapshot.active_level.get(),
            active_pause_component: None,
            game_progress,
            active_site: site,
            site_rot_y: snapshot.site_rot[1],
            active_node: snapshot.active_node,
            level: snapshot.active_level,
            key_press: None,
            showing_about: false,
            prompt_visible: false,
            active_prompt_component: PromptComponent::No,
            site_save_state,
            word_not_found: false,
            active_media_component: MediaComponent::Play,
            last_active_left_side_element: MediaComponent::Play,
            last_active_right_side_element: MediaComponent::FstWord,
        })
    }

    /// The same context with `key` as the pending input.
    pub fn with_key_press(mut self, key: KeyPress) -> Self {
        self.key_press = Some(key);
        self
    }

    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(source: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(source)?)
    }
}
