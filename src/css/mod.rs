//! Generated CSS for an attempt.
//!
//! Output is one `.container` rule followed by one `.item-N` rule per
//! tracked item, declarations in canonical property order:
//!
//! ```
//! use flexbox_quest::core::UserAttempt;
//! use flexbox_quest::css::render_css;
//!
//! let css = render_css(&UserAttempt::baseline());
//! assert!(css.starts_with(".container {\n  display: block;\n"));
//! assert!(css.contains(".item-3 {\n  flex-grow: 0;\n"));
//! ```

use std::fmt::Write;

use crate::core::{ContainerProperty, ItemIndex, ItemProperty, UserAttempt};

/// Render an attempt as CSS text.
#[must_use]
pub fn render_css(attempt: &UserAttempt) -> String {
    let mut out = String::with_capacity(512);

    out.push_str(".container {\n");
    for prop in ContainerProperty::ALL {
        declaration(&mut out, prop.css_name(), attempt.container(prop));
    }
    out.push('}');

    for item in ItemIndex::all() {
        // Writing to a String cannot fail.
        let _ = write!(out, "\n\n.item-{} {{\n", item.get() + 1);
        for prop in ItemProperty::ALL {
            declaration(&mut out, prop.css_name(), attempt.item(prop, item));
        }
        out.push('}');
    }

    out
}

fn declaration(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "  {name}: {value};");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_css() {
        let css = render_css(&UserAttempt::baseline());

        let expected_container = ".container {
  display: block;
  flex-direction: row;
  justify-content: flex-start;
  align-items: stretch;
  flex-wrap: nowrap;
  align-content: stretch;
}";
        assert!(css.starts_with(expected_container));

        let expected_item = ".item-2 {
  flex-grow: 0;
  flex-shrink: 1;
  flex-basis: auto;
  align-self: auto;
  order: 0;
}";
        assert!(css.contains(expected_item));
        assert!(css.ends_with("order: 0;\n}"));
    }

    #[test]
    fn test_css_reflects_item_changes() {
        let mut attempt = UserAttempt::baseline();
        attempt.item_properties.set(ItemProperty::FlexBasis, ItemIndex::THIRD, "25%");

        let css = render_css(&attempt);
        let item3 = css.split(".item-3").nth(1).unwrap();
        assert!(item3.contains("flex-basis: 25%;"));

        let item1 = css.split(".item-1").nth(1).unwrap();
        assert!(item1.starts_with(" {\n  flex-grow: 0;\n  flex-shrink: 1;\n  flex-basis: auto;"));
    }

    #[test]
    fn test_css_rule_count() {
        let css = render_css(&UserAttempt::baseline());
        assert_eq!(css.matches('{').count(), 4);
        assert_eq!(css.matches(';').count(), 6 + 3 * 5);
    }
}
