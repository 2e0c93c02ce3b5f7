//! Shared fixtures for the scene tests.
//!
//! Site `a`, level 04 (row 1 unless noted):
//!
//! | col | node | notes |
//! |-----|------|-------|
//! | 0 | `0410` Lda010 | start, media |
//! | 1 | `0411` TaK001 | type 6 |
//! | 2 | `0402` Pol002 | row 0, type 9 |
//! | 3 | `0413` Gat003 | type 8 |
//! | 4 | `0414` Tda004 | needs sskn level 3 |
//! | 7 | `0471` Lda071 | hidden until Lda999 is viewed |

use site_rules::{GameProgress, Level, SiteId, Sites};

use crate::context::SceneContext;
use crate::input::KeyPress;
use crate::machine::SceneMachine;

const SITE_A: &str = r#"
    site = "a"
    start = { level = "04", matrix_idx = 0, row_idx = 1 }

    [[nodes]]
    id = "0300"
    node_name = "Dia003"
    type = 3

    [[nodes]]
    id = "0410"
    node_name = "Lda010"
    type = 0
    media_file = "LDA010.STR"

    [[nodes]]
    id = "0411"
    node_name = "TaK001"
    type = 6

    [[nodes]]
    id = "0402"
    node_name = "Pol002"
    type = 9

    [[nodes]]
    id = "0413"
    node_name = "Gat003"
    type = 8

    [[nodes]]
    id = "0414"
    node_name = "Tda004"
    type = 2
    upgrade_requirement = 3

    [[nodes]]
    id = "0471"
    node_name = "Lda071"
    type = 0
    unlocked_by = "Lda999"

    [[nodes]]
    id = "0520"
    node_name = "Cou005"
    type = 4

    [[nodes]]
    id = "1001"
    node_name = "Eda010"
    type = 0

    [levels."03"]
    rows = [
        ["0300", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
    ]

    [levels."04"]
    rows = [
        ["", "", "0402", "", "", "", "", ""],
        ["0410", "0411", "", "0413", "0414", "", "", "0471"],
        ["", "", "", "", "", "", "", ""],
    ]

    [levels."05"]
    rows = [
        ["", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
        ["0520", "", "", "", "", "", "", ""],
    ]

    [levels."10"]
    rows = [
        ["", "", "", "", "", "", "", ""],
        ["1001", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
    ]
"#;

const SITE_B: &str = r#"
    site = "b"
    start = { level = "01", matrix_idx = 2, row_idx = 1 }

    [[nodes]]
    id = "0121"
    node_name = "Ekm001"
    type = 0

    [[nodes]]
    id = "1320"
    node_name = "Ere013"
    type = 7

    [levels."01"]
    rows = [
        ["", "", "", "", "", "", "", ""],
        ["", "", "0121", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
    ]

    [levels."13"]
    rows = [
        ["", "", "1320", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
    ]
"#;

pub(crate) fn sites() -> Sites {
    Sites::from_toml_strs(SITE_A, SITE_B).unwrap()
}

pub(crate) fn machine() -> SceneMachine {
    SceneMachine::new(sites())
}

/// Site `a` at its start point with `key` pending.
pub(crate) fn context(key: KeyPress) -> SceneContext {
    SceneContext::new(&sites(), SiteId::A, GameProgress::new())
        .unwrap()
        .with_key_press(key)
}

/// Site `a` standing on node `id` of `level`.
pub(crate) fn context_at(id: &str, level: Level, key: KeyPress) -> SceneContext {
    let sites = sites();
    let (indices, _) = sites
        .get(SiteId::A)
        .level_matrix(level)
        .and_then(|matrix| matrix.placed().find(|(_, placed)| *placed == id))
        .unwrap_or_else(|| panic!("{} is not placed on level {}", id, level));

    let mut context = context(key);
    context.active_node = sites.get(SiteId::A).node_at(level, indices).unwrap();
    context.level = level;
    context.selected_level = level.get();
    context
}
