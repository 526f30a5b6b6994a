//! Bundled level dataset.
//!
//! Levels 1-5 are beginner container exercises; later levels introduce
//! wrapping, reversed axes and per-item properties.

use crate::core::{ContainerProperty, ItemProperty};

use super::level::{Difficulty, Level, LevelId};
use super::registry::LevelSet;

/// Container target in canonical order:
/// display, flex-direction, justify-content, align-items, flex-wrap, align-content.
fn container(level: Level, values: [&str; 6]) -> Level {
    ContainerProperty::ALL
        .into_iter()
        .zip(values)
        .fold(level, |level, (prop, value)| level.with_container(prop, value))
}

fn level(id: u32, title: &str, difficulty: Difficulty, description: &str, hint: &str) -> Level {
    Level::new(LevelId::new(id), title, difficulty)
        .with_description(description)
        .with_hint(hint)
}

/// All bundled levels in progression order.
#[must_use]
pub fn builtin_levels() -> Vec<Level> {
    use Difficulty::{Advanced, Beginner, Intermediate};

    vec![
        container(
            level(
                1,
                "Center an Item",
                Beginner,
                "Center the box both horizontally and vertically in the container.",
                "Use justify-content for horizontal centering and align-items for vertical centering.",
            ),
            ["flex", "row", "center", "center", "nowrap", "stretch"],
        ),
        container(
            level(
                2,
                "Row of Items",
                Beginner,
                "Arrange the boxes in a row with space between them.",
                "Use justify-content: space-between to create space between items.",
            ),
            ["flex", "row", "space-between", "center", "nowrap", "stretch"],
        ),
        container(
            level(
                3,
                "Column Stack",
                Beginner,
                "Stack the boxes in a column centered horizontally.",
                "Use flex-direction: column to stack vertically and align-items: center to center horizontally.",
            ),
            ["flex", "column", "flex-start", "center", "nowrap", "stretch"],
        ),
        container(
            level(
                4,
                "Wrap Items",
                Beginner,
                "Make the items wrap to the next line when they don't fit.",
                "Use flex-wrap: wrap to allow items to flow to the next line.",
            ),
            ["flex", "row", "center", "flex-start", "wrap", "flex-start"],
        ),
        container(
            level(
                5,
                "End Alignment",
                Beginner,
                "Align items to the end of the container both horizontally and vertically.",
                "Use justify-content: flex-end and align-items: flex-end.",
            ),
            ["flex", "row", "flex-end", "flex-end", "nowrap", "stretch"],
        ),
        container(
            level(
                6,
                "Even Spacing",
                Intermediate,
                "Give every box the same amount of space on both sides.",
                "space-around puts half-size gaps at the edges; space-evenly makes every gap equal.",
            ),
            ["flex", "row", "space-evenly", "center", "nowrap", "stretch"],
        ),
        container(
            level(
                7,
                "Reverse the Row",
                Intermediate,
                "Show the boxes in reverse order, packed against the left edge.",
                "row-reverse flips the main axis, so flex-end now points left.",
            ),
            ["flex", "row-reverse", "flex-end", "center", "nowrap", "stretch"],
        ),
        container(
            level(
                8,
                "Bottom-Up Column",
                Intermediate,
                "Stack the boxes from the bottom of the container, centered horizontally.",
                "column-reverse starts the main axis at the bottom.",
            ),
            ["inline-flex", "column-reverse", "flex-start", "center", "nowrap", "stretch"],
        ),
        container(
            level(
                9,
                "Grow the Middle",
                Intermediate,
                "Let the middle box take up all of the leftover space.",
                "Give only the second item a flex-grow greater than zero.",
            ),
            ["flex", "row", "flex-start", "stretch", "nowrap", "stretch"],
        )
        .with_items(ItemProperty::FlexGrow, ["0", "1", "0"]),
        container(
            level(
                10,
                "Jump the Queue",
                Advanced,
                "Move the last box to the front without touching the markup.",
                "order is compared before source position; lower values come first.",
            ),
            ["flex", "row", "center", "center", "nowrap", "stretch"],
        )
        .with_items(ItemProperty::Order, ["0", "0", "-1"]),
        container(
            level(
                11,
                "Odd One Out",
                Advanced,
                "Keep the boxes at the top but pull the middle one down to the bottom.",
                "align-self overrides align-items for a single item.",
            ),
            ["flex", "row", "space-around", "flex-start", "nowrap", "stretch"],
        )
        .with_items(ItemProperty::AlignSelf, ["auto", "flex-end", "auto"]),
        container(
            level(
                12,
                "Sidebar Layout",
                Advanced,
                "Build a fixed sidebar next to a content area that fills the rest, wrapping on small screens.",
                "A fixed flex-basis with flex-shrink: 0 keeps the sidebar from collapsing.",
            ),
            ["flex", "row", "flex-start", "stretch", "wrap", "flex-start"],
        )
        .with_items(ItemProperty::FlexGrow, ["0", "1", "0"])
        .with_items(ItemProperty::FlexShrink, ["0", "1", "1"])
        .with_items(ItemProperty::FlexBasis, ["200px", "auto", "100px"]),
    ]
}

impl LevelSet {
    /// The bundled dataset.
    #[must_use]
    pub fn builtin() -> Self {
        // Only fails if the bundled data breaks its own invariants.
        Self::new(builtin_levels()).expect("bundled levels are valid")
    }
}
