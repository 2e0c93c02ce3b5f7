//! Logical inputs, the physical key mapping and the input cooldown gate.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::error::SceneError;

/// Logical input token consumed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyPress {
    Left,
    Right,
    Up,
    Down,
    Circle,
    Triangle,
    L2,
    X,
}

impl KeyPress {
    pub const ALL: [KeyPress; 8] = [
        KeyPress::Left,
        KeyPress::Right,
        KeyPress::Up,
        KeyPress::Down,
        KeyPress::Circle,
        KeyPress::Triangle,
        KeyPress::L2,
        KeyPress::X,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KeyPress::Left => "LEFT",
            KeyPress::Right => "RIGHT",
            KeyPress::Up => "UP",
            KeyPress::Down => "DOWN",
            KeyPress::Circle => "CIRCLE",
            KeyPress::Triangle => "TRIANGLE",
            KeyPress::L2 => "L2",
            KeyPress::X => "X",
        }
    }
}

impl FromStr for KeyPress {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SceneError::UnknownKey(s.to_string()))
    }
}

impl std::fmt::Display for KeyPress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct InputConfig {
    #[serde(default)]
    bindings: BTreeMap<String, KeyPress>,
}

/// Physical key code to logical input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<u32, KeyPress>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let bindings = [
            (37, KeyPress::Left),
            (38, KeyPress::Up),
            (39, KeyPress::Right),
            (40, KeyPress::Down),
            (88, KeyPress::Circle),
            (90, KeyPress::X),
            (68, KeyPress::Triangle),
            (69, KeyPress::L2),
        ];
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }
}

impl KeyMap {
    /// Default bindings overridden by the `[bindings]` table of `source`.
    ///
    /// ```toml
    /// [bindings]
    /// 13 = "CIRCLE"
    /// 27 = "TRIANGLE"
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, SceneError> {
        let config: InputConfig = toml::from_str(source)?;
        let mut map = Self::default();
        for (code, key) in config.bindings {
            let code = code
                .trim()
                .parse::<u32>()
                .map_err(|_| SceneError::InvalidBinding(code.clone()))?;
            map.bind(code, key);
        }
        Ok(map)
    }

    pub fn bind(&mut self, code: u32, key: KeyPress) {
        self.bindings.insert(code, key);
    }

    /// The logical input for `code`, or `None` when it has no mapping.
    pub fn map(&self, code: u32) -> Option<KeyPress> {
        self.bindings.get(&code).copied()
    }
}

/// Busy flag serializing inputs while a transition is being presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputGate {
    busy: bool,
}

impl InputGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an input if none is in flight, locking the gate.
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Called by the presentation layer once the transition has played out.
    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_from_str() {
        for key in KeyPress::ALL {
            assert_eq!(key.as_str().parse::<KeyPress>().unwrap(), key);
        }
        assert!(matches!(
            "START".parse::<KeyPress>(),
            Err(SceneError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_key_press_wire_names_match_tokens() {
        for key in KeyPress::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::default();
        assert_eq!(map.map(37), Some(KeyPress::Left));
        assert_eq!(map.map(40), Some(KeyPress::Down));
        assert_eq!(map.map(88), Some(KeyPress::Circle));
        assert_eq!(map.map(69), Some(KeyPress::L2));
        assert_eq!(map.map(13), None);
    }

    #[test]
    fn test_bindings_from_toml_override_defaults() {
        let map = KeyMap::from_toml_str(
            r#"
            [bindings]
            13 = "CIRCLE"
            37 = "RIGHT"
            "#,
        )
        .unwrap();

        assert_eq!(map.map(13), Some(KeyPress::Circle));
        assert_eq!(map.map(37), Some(KeyPress::Right));
        assert_eq!(map.map(38), Some(KeyPress::Up));
    }

    #[test]
    fn test_bad_bindings_are_rejected() {
        assert!(matches!(
            KeyMap::from_toml_str("[bindings]\nenter = \"CIRCLE\""),
            Err(SceneError::InvalidBinding(_))
        ));
        assert!(matches!(
            KeyMap::from_toml_str("[bindings]\n13 = \"START\""),
            Err(SceneError::Parse(_))
        ));
    }

    #[test]
    fn test_input_gate_serializes_inputs() {
        let mut gate = InputGate::new();
        assert!(gate.try_begin());
        assert!(gate.is_busy());
        assert!(!gate.try_begin());

        gate.finish();
        assert!(gate.try_begin());
    }
}
