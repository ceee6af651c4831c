//! Attribute builders for the select widget.
//!
//! The toggle button carries the `combobox` role and owns keyboard focus;
//! it reports the highlighted item through `aria-activedescendant`.

use serde::Serialize;

use crate::state::SelectState;

use super::{
    Attributes, ItemAttributes, LabelAttributes, MenuAttributes, Role, active_descendant,
    label_id, menu_id, toggle_button_id,
};

/// Attributes for the select's toggle button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleButtonAttributes {
    pub id: String,
    pub role: Role,
    #[serde(rename = "tabindex")]
    pub tab_index: i32,
    #[serde(rename = "aria-activedescendant")]
    pub aria_activedescendant: String,
    #[serde(rename = "aria-controls")]
    pub aria_controls: String,
    #[serde(rename = "aria-expanded")]
    pub aria_expanded: bool,
    #[serde(rename = "aria-haspopup")]
    pub aria_haspopup: Role,
    #[serde(rename = "aria-labelledby")]
    pub aria_labelledby: String,
}

impl Attributes for ToggleButtonAttributes {
    fn to_attrs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("role", self.role.as_str().to_string()),
            ("tabindex", self.tab_index.to_string()),
            ("aria-activedescendant", self.aria_activedescendant.clone()),
            ("aria-controls", self.aria_controls.clone()),
            ("aria-expanded", self.aria_expanded.to_string()),
            ("aria-haspopup", self.aria_haspopup.as_str().to_string()),
            ("aria-labelledby", self.aria_labelledby.clone()),
        ]
    }
}

/// The label points at the toggle button.
pub fn label(id: &str) -> LabelAttributes {
    LabelAttributes {
        id: label_id(id),
        html_for: toggle_button_id(id),
    }
}

pub fn toggle_button<Item>(id: &str, state: &SelectState<Item>) -> ToggleButtonAttributes {
    ToggleButtonAttributes {
        id: toggle_button_id(id),
        role: Role::Combobox,
        tab_index: 0,
        aria_activedescendant: active_descendant(id, state.highlighted_index),
        aria_controls: menu_id(id),
        aria_expanded: state.is_open,
        aria_haspopup: Role::Listbox,
        aria_labelledby: label_id(id),
    }
}

pub fn menu(id: &str) -> MenuAttributes {
    super::menu(id)
}

/// Attributes for the item at `index`.
///
/// An item is `aria-selected` when it sits at the position of the selected
/// item in `items`.
pub fn item<Item: PartialEq>(
    id: &str,
    index: usize,
    items: &[Item],
    state: &SelectState<Item>,
) -> ItemAttributes {
    let selected_position = state
        .selected_item
        .as_ref()
        .and_then(|selected| items.iter().position(|item| item == selected));

    super::item(id, index, selected_position == Some(index))
}
