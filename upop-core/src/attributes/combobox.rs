//! Attribute builders for the combobox widget.
//!
//! Here the input carries the `combobox` role and focus; the toggle button is
//! taken out of the tab order.

use serde::Serialize;

use crate::state::ComboboxState;

use super::{
    Attributes, ItemAttributes, LabelAttributes, MenuAttributes, Role, active_descendant,
    input_id, label_id, menu_id, toggle_button_id,
};

/// Attributes for the combobox's text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputAttributes {
    pub id: String,
    pub role: Role,
    #[serde(rename = "autocomplete")]
    pub auto_complete: &'static str,
    pub value: String,
    #[serde(rename = "aria-activedescendant")]
    pub aria_activedescendant: String,
    #[serde(rename = "aria-autocomplete")]
    pub aria_autocomplete: &'static str,
    #[serde(rename = "aria-controls")]
    pub aria_controls: String,
    #[serde(rename = "aria-expanded")]
    pub aria_expanded: bool,
    #[serde(rename = "aria-labelledby")]
    pub aria_labelledby: String,
}

impl Attributes for InputAttributes {
    fn to_attrs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("role", self.role.as_str().to_string()),
            ("autocomplete", self.auto_complete.to_string()),
            ("value", self.value.clone()),
            ("aria-activedescendant", self.aria_activedescendant.clone()),
            ("aria-autocomplete", self.aria_autocomplete.to_string()),
            ("aria-controls", self.aria_controls.clone()),
            ("aria-expanded", self.aria_expanded.to_string()),
            ("aria-labelledby", self.aria_labelledby.clone()),
        ]
    }
}

/// Attributes for the combobox's toggle button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleButtonAttributes {
    pub id: String,
    #[serde(rename = "tabindex")]
    pub tab_index: i32,
    #[serde(rename = "aria-controls")]
    pub aria_controls: String,
    #[serde(rename = "aria-expanded")]
    pub aria_expanded: bool,
}

impl Attributes for ToggleButtonAttributes {
    fn to_attrs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("tabindex", self.tab_index.to_string()),
            ("aria-controls", self.aria_controls.clone()),
            ("aria-expanded", self.aria_expanded.to_string()),
        ]
    }
}

/// The label points at the input.
pub fn label(id: &str) -> LabelAttributes {
    LabelAttributes {
        id: label_id(id),
        html_for: input_id(id),
    }
}

pub fn input<Item>(id: &str, state: &ComboboxState<Item>) -> InputAttributes {
    InputAttributes {
        id: input_id(id),
        role: Role::Combobox,
        auto_complete: "off",
        value: state.input_value.clone(),
        aria_activedescendant: active_descendant(id, state.highlighted_index),
        aria_autocomplete: "list",
        aria_controls: menu_id(id),
        aria_expanded: state.is_open,
        aria_labelledby: label_id(id),
    }
}

pub fn toggle_button<Item>(id: &str, state: &ComboboxState<Item>) -> ToggleButtonAttributes {
    ToggleButtonAttributes {
        id: toggle_button_id(id),
        tab_index: -1,
        aria_controls: menu_id(id),
        aria_expanded: state.is_open,
    }
}

pub fn menu(id: &str) -> MenuAttributes {
    super::menu(id)
}

/// Attributes for the item at `index`; the highlighted item is the
/// `aria-selected` one.
pub fn item<Item>(id: &str, index: usize, state: &ComboboxState<Item>) -> ItemAttributes {
    super::item(id, index, state.highlighted_index == Some(index))
}
