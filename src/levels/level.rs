//! Level definitions - static challenge data.
//!
//! A `Level` is a target style configuration the learner must reproduce.
//! Container targets are required; item targets are optional and, when
//! present, give a value for every tracked item.
//!
//! ## Example
//!
//! ```
//! use flexbox_quest::core::{ContainerProperty, UserAttempt};
//! use flexbox_quest::levels::{Difficulty, Level, LevelId};
//!
//! let level = Level::new(LevelId::new(1), "Center an Item", Difficulty::Beginner)
//!     .with_container(ContainerProperty::Display, "flex")
//!     .with_container(ContainerProperty::JustifyContent, "center");
//!
//! assert!(!level.matches(&UserAttempt::baseline()));
//! assert!(level.matches(&level.target_attempt()));
//! ```

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{ContainerProperty, ItemIndex, ItemProperty, UserAttempt, ITEM_COUNT};
use crate::css;

/// Unique identifier of a level. Ordering in the level set defines
/// progression; ids are positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(pub u32);

impl LevelId {
    /// Create a new level ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

/// Level difficulty. Determines the points awarded on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a compared value lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertySlot {
    Container(ContainerProperty),
    Item(ItemProperty, ItemIndex),
}

impl fmt::Display for PropertySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertySlot::Container(prop) => write!(f, "{prop}"),
            PropertySlot::Item(prop, item) => write!(f, "{item} {prop}"),
        }
    }
}

/// A targeted value the attempt doesn't reproduce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch<'a> {
    pub slot: PropertySlot,
    pub expected: &'a str,
    pub actual: &'a str,
}

/// Static level definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: LevelId,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub hint: String,

    pub difficulty: Difficulty,

    /// Required container values. Keys not listed are not checked.
    pub container_target: FxHashMap<ContainerProperty, String>,

    /// Required per-item values. `None` means items are not checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_target: Option<FxHashMap<ItemProperty, [String; ITEM_COUNT]>>,
}

impl Level {
    /// Create a level with no targets yet.
    pub fn new(id: LevelId, title: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            hint: String::new(),
            difficulty,
            container_target: FxHashMap::default(),
            item_target: None,
        }
    }

    /// Builder: set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set the hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Builder: require a container value.
    #[must_use]
    pub fn with_container(mut self, prop: ContainerProperty, value: impl Into<String>) -> Self {
        self.container_target.insert(prop, value.into());
        self
    }

    /// Builder: require values for every tracked item.
    #[must_use]
    pub fn with_items(mut self, prop: ItemProperty, values: [&str; ITEM_COUNT]) -> Self {
        self.item_target
            .get_or_insert_with(FxHashMap::default)
            .insert(prop, values.map(str::to_string));
        self
    }

    /// Whether item values are part of this level's target.
    #[must_use]
    pub fn has_item_target(&self) -> bool {
        self.item_target.is_some()
    }

    /// Every targeted value the attempt gets wrong, in canonical order.
    ///
    /// Comparison is exact string equality: no case folding, trimming or
    /// unit normalization.
    #[must_use]
    pub fn mismatches<'a>(&'a self, attempt: &'a UserAttempt) -> Vec<Mismatch<'a>> {
        let mut out = Vec::new();

        for prop in ContainerProperty::ALL {
            if let Some(expected) = self.container_target.get(&prop) {
                let actual = attempt.container(prop);
                if actual != expected.as_str() {
                    out.push(Mismatch {
                        slot: PropertySlot::Container(prop),
                        expected: expected.as_str(),
                        actual,
                    });
                }
            }
        }

        if let Some(items) = &self.item_target {
            for prop in ItemProperty::ALL {
                let Some(expected) = items.get(&prop) else {
                    continue;
                };
                for item in ItemIndex::all() {
                    let actual = attempt.item(prop, item);
                    if actual != expected[item.get()] {
                        out.push(Mismatch {
                            slot: PropertySlot::Item(prop, item),
                            expected: &expected[item.get()],
                            actual,
                        });
                    }
                }
            }
        }

        out
    }

    /// Whether the attempt reproduces every targeted value.
    #[must_use]
    pub fn matches(&self, attempt: &UserAttempt) -> bool {
        let container_match = self
            .container_target
            .iter()
            .all(|(prop, expected)| attempt.container(*prop) == expected.as_str());

        let item_match = match &self.item_target {
            None => true,
            Some(items) => items.iter().all(|(prop, expected)| {
                ItemIndex::all().all(|item| attempt.item(*prop, item) == expected[item.get()])
            }),
        };

        container_match && item_match
    }

    /// The attempt that solves this level: baseline values overlaid
    /// with every target.
    #[must_use]
    pub fn target_attempt(&self) -> UserAttempt {
        let mut attempt = UserAttempt::baseline();
        for (prop, value) in &self.container_target {
            attempt.container_properties.set(*prop, value.clone());
        }
        if let Some(items) = &self.item_target {
            for (prop, values) in items {
                attempt.item_properties[*prop] = values.clone();
            }
        }
        attempt
    }

    /// CSS for the solved layout.
    #[must_use]
    pub fn target_css(&self) -> String {
        css::render_css(&self.target_attempt())
    }
}
