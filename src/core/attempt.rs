//! The learner's attempt: current values of every tracked property.
//!
//! Storage is fixed-size and indexed by the closed property enums, so an
//! attempt is always fully populated. `Default` is the baseline every level
//! starts from.
//!
//! Both property bags serialize as maps keyed by the camelCase property
//! name. Deserialization requires every key exactly once.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::property::{ContainerProperty, ItemIndex, ItemProperty, ITEM_COUNT};

/// Values of the six container properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerProperties {
    values: [String; 6],
}

impl ContainerProperties {
    /// Get the value of a property.
    #[must_use]
    pub fn get(&self, prop: ContainerProperty) -> &str {
        &self.values[prop.index()]
    }

    /// Overwrite the value of a property.
    pub fn set(&mut self, prop: ContainerProperty, value: impl Into<String>) {
        self.values[prop.index()] = value.into();
    }

    /// Iterate `(property, value)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ContainerProperty, &str)> {
        ContainerProperty::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

impl Default for ContainerProperties {
    fn default() -> Self {
        Self {
            values: ContainerProperty::ALL.map(|p| p.default_value().to_string()),
        }
    }
}

impl Index<ContainerProperty> for ContainerProperties {
    type Output = str;

    fn index(&self, prop: ContainerProperty) -> &str {
        self.get(prop)
    }
}

impl Serialize for ContainerProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ContainerProperty::ALL.len()))?;
        for (prop, value) in self.iter() {
            map.serialize_entry(&prop, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ContainerProperties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ContainerVisitor;

        impl<'de> Visitor<'de> for ContainerVisitor {
            type Value = ContainerProperties;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with every container property")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut found: [Option<String>; 6] = Default::default();
                while let Some(prop) = access.next_key::<ContainerProperty>()? {
                    let slot = &mut found[prop.index()];
                    if slot.is_some() {
                        return Err(de::Error::duplicate_field(prop.key()));
                    }
                    *slot = Some(access.next_value()?);
                }

                let mut props = ContainerProperties::default();
                for prop in ContainerProperty::ALL {
                    let value = found[prop.index()]
                        .take()
                        .ok_or_else(|| de::Error::missing_field(prop.key()))?;
                    props.values[prop.index()] = value;
                }
                Ok(props)
            }
        }

        deserializer.deserialize_map(ContainerVisitor)
    }
}

/// Values of the five item properties for each tracked item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemProperties {
    values: [[String; ITEM_COUNT]; 5],
}

impl ItemProperties {
    /// Get one item's value for a property.
    #[must_use]
    pub fn get(&self, prop: ItemProperty, item: ItemIndex) -> &str {
        &self.values[prop.index()][item.get()]
    }

    /// Overwrite one item's value, leaving the other items untouched.
    pub fn set(&mut self, prop: ItemProperty, item: ItemIndex, value: impl Into<String>) {
        self.values[prop.index()][item.get()] = value.into();
    }

    /// All item values for a property, ordered by item.
    #[must_use]
    pub fn values(&self, prop: ItemProperty) -> &[String; ITEM_COUNT] {
        &self.values[prop.index()]
    }
}

impl Default for ItemProperties {
    fn default() -> Self {
        Self {
            values: ItemProperty::ALL.map(|p| std::array::from_fn(|_| p.default_value().to_string())),
        }
    }
}

impl Index<ItemProperty> for ItemProperties {
    type Output = [String; ITEM_COUNT];

    fn index(&self, prop: ItemProperty) -> &Self::Output {
        self.values(prop)
    }
}

impl IndexMut<ItemProperty> for ItemProperties {
    fn index_mut(&mut self, prop: ItemProperty) -> &mut Self::Output {
        &mut self.values[prop.index()]
    }
}

impl Serialize for ItemProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ItemProperty::ALL.len()))?;
        for prop in ItemProperty::ALL {
            map.serialize_entry(&prop, self.values(prop))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ItemProperties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ItemVisitor;

        impl<'de> Visitor<'de> for ItemVisitor {
            type Value = ItemProperties;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with every item property")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut found: [Option<[String; ITEM_COUNT]>; 5] = Default::default();
                while let Some(prop) = access.next_key::<ItemProperty>()? {
                    let slot = &mut found[prop.index()];
                    if slot.is_some() {
                        return Err(de::Error::duplicate_field(prop.key()));
                    }
                    *slot = Some(access.next_value()?);
                }

                let mut props = ItemProperties::default();
                for prop in ItemProperty::ALL {
                    props[prop] = found[prop.index()]
                        .take()
                        .ok_or_else(|| de::Error::missing_field(prop.key()))?;
                }
                Ok(props)
            }
        }

        deserializer.deserialize_map(ItemVisitor)
    }
}

/// A full set of attempted property values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttempt {
    pub container_properties: ContainerProperties,
    pub item_properties: ItemProperties,
}

impl UserAttempt {
    /// Baseline attempt (same as `Default`).
    #[must_use]
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Container value for a property.
    #[must_use]
    pub fn container(&self, prop: ContainerProperty) -> &str {
        self.container_properties.get(prop)
    }

    /// Item value for a property.
    #[must_use]
    pub fn item(&self, prop: ItemProperty, item: ItemIndex) -> &str {
        self.item_properties.get(prop, item)
    }

    /// Whether the container currently lays out its children as flex items.
    ///
    /// Item controls only have a visible effect in this case.
    #[must_use]
    pub fn is_flex_container(&self) -> bool {
        matches!(self.container(ContainerProperty::Display), "flex" | "inline-flex")
    }

    /// Whether the control for a container property is enabled.
    ///
    /// Everything but `display` is inert for a block container, and
    /// `align-content` only applies to wrapping lines. Advisory: updates
    /// to a disabled property are still accepted.
    #[must_use]
    pub fn is_control_enabled(&self, prop: ContainerProperty) -> bool {
        let is_block = self.container(ContainerProperty::Display) == "block";
        match prop {
            ContainerProperty::Display => true,
            ContainerProperty::AlignContent => {
                !is_block && self.container(ContainerProperty::FlexWrap) != "nowrap"
            }
            _ => !is_block,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_values() {
        let attempt = UserAttempt::baseline();

        assert_eq!(attempt.container(ContainerProperty::Display), "block");
        assert_eq!(attempt.container(ContainerProperty::FlexDirection), "row");
        assert_eq!(attempt.container(ContainerProperty::JustifyContent), "flex-start");
        assert_eq!(attempt.container(ContainerProperty::AlignItems), "stretch");
        assert_eq!(attempt.container(ContainerProperty::FlexWrap), "nowrap");
        assert_eq!(attempt.container(ContainerProperty::AlignContent), "stretch");

        assert_eq!(attempt.item_properties[ItemProperty::FlexGrow], ["0", "0", "0"]);
        assert_eq!(attempt.item_properties[ItemProperty::FlexShrink], ["1", "1", "1"]);
        assert_eq!(attempt.item_properties[ItemProperty::FlexBasis], ["auto", "auto", "auto"]);
        assert_eq!(attempt.item_properties[ItemProperty::AlignSelf], ["auto", "auto", "auto"]);
        assert_eq!(attempt.item_properties[ItemProperty::Order], ["0", "0", "0"]);
    }

    #[test]
    fn test_item_set_touches_single_slot() {
        let mut items = ItemProperties::default();
        items.set(ItemProperty::Order, ItemIndex::SECOND, "-1");

        assert_eq!(items[ItemProperty::Order], ["0", "-1", "0"]);
        assert_eq!(items[ItemProperty::FlexGrow], ["0", "0", "0"]);
    }

    #[test]
    fn test_container_iter_canonical_order() {
        let props = ContainerProperties::default();
        let keys: Vec<_> = props.iter().map(|(p, _)| p).collect();
        assert_eq!(keys, ContainerProperty::ALL);
    }

    #[test]
    fn test_json_uses_property_names() {
        let json = serde_json::to_value(UserAttempt::baseline()).unwrap();

        assert_eq!(json["containerProperties"]["flexDirection"], "row");
        assert_eq!(json["containerProperties"].as_object().unwrap().len(), 6);
        assert_eq!(json["itemProperties"]["flexShrink"], serde_json::json!(["1", "1", "1"]));
        assert_eq!(json["itemProperties"].as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_json_roundtrip_keeps_values() {
        let mut attempt = UserAttempt::baseline();
        attempt.container_properties.set(ContainerProperty::AlignContent, "center");
        attempt.item_properties.set(ItemProperty::Order, ItemIndex::THIRD, "-1");

        let json = serde_json::to_string(&attempt).unwrap();
        let decoded: UserAttempt = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, attempt);
    }

    #[test]
    fn test_json_rejects_missing_container_key() {
        let json = r#"{"display": "flex", "flexDirection": "row"}"#;
        let err = serde_json::from_str::<ContainerProperties>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `justifyContent`"));
    }

    #[test]
    fn test_json_rejects_unknown_and_duplicate_keys() {
        let unknown = r#"{"display": "flex", "gap": "1rem"}"#;
        assert!(serde_json::from_str::<ContainerProperties>(unknown).is_err());

        let mut json = serde_json::to_value(ItemProperties::default()).unwrap();
        json.as_object_mut().unwrap().remove("order");
        let err = serde_json::from_value::<ItemProperties>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `order`"));

        let duplicate = r#"{"flexGrow": ["0","0","0"], "flexGrow": ["1","1","1"]}"#;
        let err = serde_json::from_str::<ItemProperties>(duplicate).unwrap_err();
        assert!(err.to_string().contains("duplicate field `flexGrow`"));
    }

    #[test]
    fn test_flex_container() {
        let mut attempt = UserAttempt::baseline();
        assert!(!attempt.is_flex_container());

        attempt.container_properties.set(ContainerProperty::Display, "inline-flex");
        assert!(attempt.is_flex_container());

        attempt.container_properties.set(ContainerProperty::Display, "Flex");
        assert!(!attempt.is_flex_container()); // Case-sensitive
    }

    #[test]
    fn test_control_enablement() {
        let mut attempt = UserAttempt::baseline();
        assert!(attempt.is_control_enabled(ContainerProperty::Display));
        assert!(!attempt.is_control_enabled(ContainerProperty::JustifyContent));
        assert!(!attempt.is_control_enabled(ContainerProperty::AlignContent));

        attempt.container_properties.set(ContainerProperty::Display, "flex");
        assert!(attempt.is_control_enabled(ContainerProperty::JustifyContent));
        assert!(!attempt.is_control_enabled(ContainerProperty::AlignContent));

        attempt.container_properties.set(ContainerProperty::FlexWrap, "wrap");
        assert!(attempt.is_control_enabled(ContainerProperty::AlignContent));
    }
}
