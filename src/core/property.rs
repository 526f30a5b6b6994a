//! Style property vocabulary.
//!
//! The game tracks a closed set of style properties:
//! - `ContainerProperty`: six properties of the flex container
//! - `ItemProperty`: five properties set per tracked item
//!
//! Tracked items are addressed by `ItemIndex`, which can only hold
//! `0..ITEM_COUNT`. Unknown keys and out-of-range items are therefore
//! unrepresentable once a value has been constructed.
//!
//! ## Naming
//!
//! Each key has two spellings:
//! - `key()`: camelCase, used in level datasets and serialized state
//! - `css_name()`: kebab-case, used in generated CSS
//!
//! ```
//! use flexbox_quest::core::ContainerProperty;
//!
//! let prop = ContainerProperty::JustifyContent;
//! assert_eq!(prop.key(), "justifyContent");
//! assert_eq!(prop.css_name(), "justify-content");
//! assert_eq!(prop.default_value(), "flex-start");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of items tracked per level.
pub const ITEM_COUNT: usize = 3;

/// Container-level style property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerProperty {
    Display,
    FlexDirection,
    JustifyContent,
    AlignItems,
    FlexWrap,
    AlignContent,
}

impl ContainerProperty {
    /// All container properties in canonical order.
    pub const ALL: [ContainerProperty; 6] = [
        ContainerProperty::Display,
        ContainerProperty::FlexDirection,
        ContainerProperty::JustifyContent,
        ContainerProperty::AlignItems,
        ContainerProperty::FlexWrap,
        ContainerProperty::AlignContent,
    ];

    /// Position in `ALL`, used as a storage slot.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dataset key (camelCase).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ContainerProperty::Display => "display",
            ContainerProperty::FlexDirection => "flexDirection",
            ContainerProperty::JustifyContent => "justifyContent",
            ContainerProperty::AlignItems => "alignItems",
            ContainerProperty::FlexWrap => "flexWrap",
            ContainerProperty::AlignContent => "alignContent",
        }
    }

    /// CSS declaration name (kebab-case).
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            ContainerProperty::Display => "display",
            ContainerProperty::FlexDirection => "flex-direction",
            ContainerProperty::JustifyContent => "justify-content",
            ContainerProperty::AlignItems => "align-items",
            ContainerProperty::FlexWrap => "flex-wrap",
            ContainerProperty::AlignContent => "align-content",
        }
    }

    /// Value on entry to a level.
    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            ContainerProperty::Display => "block",
            ContainerProperty::FlexDirection => "row",
            ContainerProperty::JustifyContent => "flex-start",
            ContainerProperty::AlignItems => "stretch",
            ContainerProperty::FlexWrap => "nowrap",
            ContainerProperty::AlignContent => "stretch",
        }
    }

    /// Values offered by the control panel.
    ///
    /// Advisory only: the engine accepts any string.
    #[must_use]
    pub const fn options(self) -> &'static [&'static str] {
        match self {
            ContainerProperty::Display => &["block", "flex", "inline-flex"],
            ContainerProperty::FlexDirection => &["row", "row-reverse", "column", "column-reverse"],
            ContainerProperty::JustifyContent => &[
                "flex-start",
                "flex-end",
                "center",
                "space-between",
                "space-around",
                "space-evenly",
            ],
            ContainerProperty::AlignItems => &["flex-start", "flex-end", "center", "baseline", "stretch"],
            ContainerProperty::FlexWrap => &["nowrap", "wrap", "wrap-reverse"],
            ContainerProperty::AlignContent => &[
                "flex-start",
                "flex-end",
                "center",
                "space-between",
                "space-around",
                "stretch",
            ],
        }
    }

    /// Parse a dataset key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for ContainerProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Per-item style property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemProperty {
    FlexGrow,
    FlexShrink,
    FlexBasis,
    AlignSelf,
    Order,
}

impl ItemProperty {
    /// All item properties in canonical order.
    pub const ALL: [ItemProperty; 5] = [
        ItemProperty::FlexGrow,
        ItemProperty::FlexShrink,
        ItemProperty::FlexBasis,
        ItemProperty::AlignSelf,
        ItemProperty::Order,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dataset key (camelCase).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ItemProperty::FlexGrow => "flexGrow",
            ItemProperty::FlexShrink => "flexShrink",
            ItemProperty::FlexBasis => "flexBasis",
            ItemProperty::AlignSelf => "alignSelf",
            ItemProperty::Order => "order",
        }
    }

    /// CSS declaration name (kebab-case).
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            ItemProperty::FlexGrow => "flex-grow",
            ItemProperty::FlexShrink => "flex-shrink",
            ItemProperty::FlexBasis => "flex-basis",
            ItemProperty::AlignSelf => "align-self",
            ItemProperty::Order => "order",
        }
    }

    /// Value of every item on entry to a level.
    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            ItemProperty::FlexGrow => "0",
            ItemProperty::FlexShrink => "1",
            ItemProperty::FlexBasis => "auto",
            ItemProperty::AlignSelf => "auto",
            ItemProperty::Order => "0",
        }
    }

    /// Values offered by the item control panel.
    #[must_use]
    pub const fn options(self) -> &'static [&'static str] {
        match self {
            ItemProperty::FlexGrow => &["0", "1", "2", "3"],
            ItemProperty::FlexShrink => &["0", "1", "2", "3"],
            ItemProperty::FlexBasis => &["auto", "0px", "50px", "100px", "150px", "200px", "25%", "50%"],
            ItemProperty::AlignSelf => &["auto", "flex-start", "flex-end", "center", "baseline", "stretch"],
            ItemProperty::Order => &["-1", "0", "1", "2", "3"],
        }
    }

    /// Parse a dataset key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for ItemProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Index of a tracked item, always in `0..ITEM_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ItemIndex(u8);

/// Raw index outside `0..ITEM_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("item index {0} out of range 0..{max}", max = ITEM_COUNT)]
pub struct ItemIndexOutOfRange(pub usize);

impl ItemIndex {
    pub const FIRST: ItemIndex = ItemIndex(0);
    pub const SECOND: ItemIndex = ItemIndex(1);
    pub const THIRD: ItemIndex = ItemIndex(2);

    /// Create an item index, rejecting anything past the last tracked item.
    pub fn new(index: usize) -> Result<Self, ItemIndexOutOfRange> {
        if index < ITEM_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(ItemIndexOutOfRange(index))
        }
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every tracked item.
    pub fn all() -> impl Iterator<Item = ItemIndex> {
        (0..ITEM_COUNT as u8).map(ItemIndex)
    }
}

impl TryFrom<usize> for ItemIndex {
    type Error = ItemIndexOutOfRange;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<ItemIndex> for usize {
    fn from(index: ItemIndex) -> Self {
        index.get()
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Items are numbered from 1 in the UI.
        write!(f, "Item {}", self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_property_index_matches_all() {
        for (i, prop) in ContainerProperty::ALL.iter().enumerate() {
            assert_eq!(prop.index(), i);
        }
    }

    #[test]
    fn test_item_property_index_matches_all() {
        for (i, prop) in ItemProperty::ALL.iter().enumerate() {
            assert_eq!(prop.index(), i);
        }
    }

    #[test]
    fn test_defaults_are_offered_options() {
        for prop in ContainerProperty::ALL {
            assert!(prop.options().contains(&prop.default_value()), "{prop}");
        }
        for prop in ItemProperty::ALL {
            assert!(prop.options().contains(&prop.default_value()), "{prop}");
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(ContainerProperty::from_key("flexWrap"), Some(ContainerProperty::FlexWrap));
        assert_eq!(ContainerProperty::from_key("flex-wrap"), None);
        assert_eq!(ItemProperty::from_key("alignSelf"), Some(ItemProperty::AlignSelf));
        assert_eq!(ItemProperty::from_key("gap"), None);
    }

    #[test]
    fn test_serde_uses_dataset_keys() {
        let json = serde_json::to_string(&ContainerProperty::AlignContent).unwrap();
        assert_eq!(json, "\"alignContent\"");

        let prop: ItemProperty = serde_json::from_str("\"flexBasis\"").unwrap();
        assert_eq!(prop, ItemProperty::FlexBasis);
    }

    #[test]
    fn test_item_index_bounds() {
        assert_eq!(ItemIndex::new(0), Ok(ItemIndex::FIRST));
        assert_eq!(ItemIndex::new(2), Ok(ItemIndex::THIRD));
        assert_eq!(
            ItemIndex::new(ITEM_COUNT).unwrap_err().to_string(),
            format!("item index {ITEM_COUNT} out of range 0..{ITEM_COUNT}")
        );
        assert_eq!(ItemIndex::new(3), Err(ItemIndexOutOfRange(3)));
        assert_eq!(ItemIndex::all().count(), ITEM_COUNT);
    }

    #[test]
    fn test_item_index_serde_rejects_out_of_range() {
        let idx: ItemIndex = serde_json::from_str("1").unwrap();
        assert_eq!(idx, ItemIndex::SECOND);
        assert!(serde_json::from_str::<ItemIndex>("7").is_err());
    }

    #[test]
    fn test_item_index_display() {
        assert_eq!(format!("{}", ItemIndex::FIRST), "Item 1");
    }
}
