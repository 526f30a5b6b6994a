//! Level dataset and configuration loading tests.
//!
//! Hosts supply levels as JSON and configuration as TOML; these tests run
//! a session over externally loaded data.

use flexbox_quest::core::{ContainerProperty, GameConfig, ItemIndex, ItemProperty, UnknownLevelPolicy};
use flexbox_quest::engine::{FlexboxGame, GameError};
use flexbox_quest::levels::{Difficulty, LevelError, LevelId, LevelSet};

const LEVELS_JSON: &str = r#"[
    {
        "id": 1,
        "title": "Center an Item",
        "description": "Center the box both horizontally and vertically in the container.",
        "hint": "Use justify-content and align-items.",
        "difficulty": "beginner",
        "containerTarget": {
            "display": "flex",
            "flexDirection": "row",
            "justifyContent": "center",
            "alignItems": "center",
            "flexWrap": "nowrap",
            "alignContent": "stretch"
        }
    },
    {
        "id": 2,
        "title": "Grow the Middle",
        "difficulty": "intermediate",
        "containerTarget": { "display": "flex" },
        "itemTarget": {
            "flexGrow": ["0", "1", "0"],
            "flexBasis": ["auto", "auto", "50px"]
        }
    }
]"#;

#[test]
fn test_session_over_json_levels() {
    let levels = LevelSet::from_json_str(LEVELS_JSON).unwrap();
    let mut game = FlexboxGame::new(levels);

    game.set_current_level(LevelId::new(2)).unwrap();
    assert_eq!(game.current_level().difficulty, Difficulty::Intermediate);

    game.update_container_property(ContainerProperty::Display, "flex");
    game.update_item_property(ItemProperty::FlexGrow, ItemIndex::SECOND, "1");
    assert!(!game.check_solution().is_correct);

    // Only the third item's basis is still wrong.
    let mismatches = game.mismatches();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].expected, "50px");
    assert_eq!(mismatches[0].actual, "auto");

    game.update_item_property(ItemProperty::FlexBasis, ItemIndex::THIRD, "50px");
    let outcome = game.check_solution();
    assert!(outcome.is_correct);
    assert_eq!(outcome.points_awarded, 20);
}

#[test]
fn test_json_duplicate_ids_rejected() {
    let json = r#"[
        { "id": 1, "title": "A", "difficulty": "beginner", "containerTarget": { "display": "flex" } },
        { "id": 1, "title": "B", "difficulty": "beginner", "containerTarget": { "display": "flex" } }
    ]"#;
    assert!(matches!(LevelSet::from_json_str(json), Err(LevelError::DuplicateId(_))));
}

#[test]
fn test_json_empty_container_target_rejected() {
    let json = r#"[{ "id": 1, "title": "A", "difficulty": "beginner", "containerTarget": {} }]"#;
    assert!(matches!(
        LevelSet::from_json_str(json),
        Err(LevelError::EmptyContainerTarget(_))
    ));
}

#[test]
fn test_json_unknown_difficulty_rejected() {
    let json = r#"[{ "id": 1, "title": "A", "difficulty": "expert", "containerTarget": { "display": "flex" } }]"#;
    assert!(matches!(LevelSet::from_json_str(json), Err(LevelError::Parse(_))));
}

#[test]
fn test_builtin_levels_roundtrip_through_json() {
    let set = LevelSet::builtin();
    let levels: Vec<_> = set.iter().cloned().collect();
    let json = serde_json::to_string(&levels).unwrap();

    let reloaded = LevelSet::from_json_str(&json).unwrap();
    assert_eq!(reloaded.len(), set.len());
    for (a, b) in reloaded.iter().zip(set.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_session_with_toml_config() {
    let config = GameConfig::from_toml_str(
        r#"
        page_size = 5
        unknown_level = "reject"

        [points]
        beginner = 15
        "#,
    )
    .unwrap();
    assert_eq!(config.unknown_level, UnknownLevelPolicy::Reject);

    let mut game = FlexboxGame::with_config(LevelSet::builtin(), config).unwrap();
    assert_eq!(game.total_pages(), 3);
    assert!(matches!(
        game.set_current_level(LevelId::new(0)),
        Err(GameError::InvalidLevelId(_))
    ));

    game.update_container_property(ContainerProperty::Display, "flex");
    game.update_container_property(ContainerProperty::JustifyContent, "center");
    game.update_container_property(ContainerProperty::AlignItems, "center");
    assert_eq!(game.check_solution().points_awarded, 15);
}
