//! ARIA/DOM attribute records derived from widget state.
//!
//! Builders are pure functions of an id prefix and a state. Records serialize
//! with HTML attribute names, and [`Attributes::to_attrs`] flattens them to
//! string pairs for hosts that set attributes one by one.
//!
//! Element ids all share the widget id as prefix:
//!
//! | Role          | Id                      |
//! |---------------|-------------------------|
//! | label         | `<id>-label`            |
//! | toggle button | `<id>-toggle-button`    |
//! | input         | `<id>-input`            |
//! | menu          | `<id>-menu`             |
//! | item          | `<id>-item-<index>`     |

pub mod combobox;
pub mod select;

use serde::Serialize;

/// Flattening of an attribute record to `(name, value)` pairs.
pub trait Attributes {
    fn to_attrs(&self) -> Vec<(&'static str, String)>;
}

/// ARIA roles used by the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Combobox,
    Listbox,
    Option,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Combobox => "combobox",
            Role::Listbox => "listbox",
            Role::Option => "option",
        }
    }
}

/// Attributes for the `<label>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelAttributes {
    pub id: String,
    #[serde(rename = "for")]
    pub html_for: String,
}

impl Attributes for LabelAttributes {
    fn to_attrs(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.id.clone()), ("for", self.html_for.clone())]
    }
}

/// Attributes for the listbox element holding the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuAttributes {
    pub id: String,
    pub role: Role,
    #[serde(rename = "aria-labelledby")]
    pub aria_labelledby: String,
}

impl Attributes for MenuAttributes {
    fn to_attrs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("role", self.role.as_str().to_string()),
            ("aria-labelledby", self.aria_labelledby.clone()),
        ]
    }
}

/// Attributes for one option in the listbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemAttributes {
    pub id: String,
    pub role: Role,
    #[serde(rename = "aria-disabled")]
    pub aria_disabled: bool,
    #[serde(rename = "aria-selected")]
    pub aria_selected: bool,
}

impl Attributes for ItemAttributes {
    fn to_attrs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("role", self.role.as_str().to_string()),
            ("aria-disabled", self.aria_disabled.to_string()),
            ("aria-selected", self.aria_selected.to_string()),
        ]
    }
}

pub fn label_id(id: &str) -> String {
    format!("{id}-label")
}

pub fn toggle_button_id(id: &str) -> String {
    format!("{id}-toggle-button")
}

pub fn input_id(id: &str) -> String {
    format!("{id}-input")
}

pub fn menu_id(id: &str) -> String {
    format!("{id}-menu")
}

pub fn item_id(id: &str, index: usize) -> String {
    format!("{id}-item-{index}")
}

/// `aria-activedescendant` value: the highlighted item's id, or empty.
pub fn active_descendant(id: &str, highlighted_index: Option<usize>) -> String {
    highlighted_index
        .map(|index| item_id(id, index))
        .unwrap_or_default()
}

pub(crate) fn menu(id: &str) -> MenuAttributes {
    MenuAttributes {
        id: menu_id(id),
        role: Role::Listbox,
        aria_labelledby: label_id(id),
    }
}

pub(crate) fn item(id: &str, index: usize, selected: bool) -> ItemAttributes {
    ItemAttributes {
        id: item_id(id, index),
        role: Role::Option,
        aria_disabled: false,
        aria_selected: selected,
    }
}
