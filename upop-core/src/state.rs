//! Widget state values.
//!
//! States are plain values: every transition produces a new one that replaces
//! the previous. The item list is never part of the state; only the selected
//! item and the highlighted position are.

use serde::{Deserialize, Serialize};

/// Converts an item (or no item) to display text.
///
/// Owned by the host and handed to the combobox reducer on every transition.
pub type ItemToString<Item> = dyn Fn(Option<&Item>) -> String;

/// Read access shared by both widget states, used by the side-effect
/// dispatcher to compare fields.
pub trait WidgetState {
    type Item;

    fn is_open(&self) -> bool;

    fn highlighted_index(&self) -> Option<usize>;

    fn selected_item(&self) -> Option<&Self::Item>;

    /// Text of the input. Widgets without an input return `None`.
    fn input_value(&self) -> Option<&str> {
        None
    }
}

/// Partial initial state supplied by the owner.
///
/// Every field left `None` falls back to its default: closed, nothing
/// highlighted, nothing selected, and (combobox) the selected item's text.
/// An initial highlight is kept only when the state also starts open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateOverrides<Item> {
    pub is_open: Option<bool>,
    pub highlighted_index: Option<usize>,
    pub selected_item: Option<Item>,
    pub input_value: Option<String>,
}

impl<Item> Default for StateOverrides<Item> {
    fn default() -> Self {
        Self {
            is_open: None,
            highlighted_index: None,
            selected_item: None,
            input_value: None,
        }
    }
}

impl<Item> StateOverrides<Item> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = Some(is_open);
        self
    }

    pub fn highlighted_index(mut self, index: usize) -> Self {
        self.highlighted_index = Some(index);
        self
    }

    pub fn selected_item(mut self, item: Item) -> Self {
        self.selected_item = Some(item);
        self
    }

    pub fn input_value(mut self, value: impl Into<String>) -> Self {
        self.input_value = Some(value.into());
        self
    }
}

/// State of a select widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectState<Item> {
    pub is_open: bool,
    /// `None` when nothing is highlighted.
    pub highlighted_index: Option<usize>,
    pub selected_item: Option<Item>,
}

impl<Item> SelectState<Item> {
    /// Build the initial state, merging `overrides` over the defaults.
    ///
    /// A highlight is dropped when the state starts closed.
    pub fn new(overrides: StateOverrides<Item>) -> Self {
        let is_open = overrides.is_open.unwrap_or(false);

        Self {
            is_open,
            highlighted_index: overrides.highlighted_index.filter(|_| is_open),
            selected_item: overrides.selected_item,
        }
    }
}

impl<Item> Default for SelectState<Item> {
    fn default() -> Self {
        Self::new(StateOverrides::default())
    }
}

impl<Item> WidgetState for SelectState<Item> {
    type Item = Item;

    fn is_open(&self) -> bool {
        self.is_open
    }

    fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    fn selected_item(&self) -> Option<&Item> {
        self.selected_item.as_ref()
    }
}

/// State of a combobox widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboboxState<Item> {
    pub is_open: bool,
    pub highlighted_index: Option<usize>,
    pub selected_item: Option<Item>,
    pub input_value: String,
}

impl<Item> ComboboxState<Item> {
    /// Build the initial state, merging `overrides` over the defaults.
    ///
    /// Without an explicit input value the input shows
    /// `item_to_string(selected_item)`. A highlight is dropped when the state
    /// starts closed.
    pub fn new(
        overrides: StateOverrides<Item>,
        item_to_string: &dyn Fn(Option<&Item>) -> String,
    ) -> Self {
        let input_value = match overrides.input_value {
            Some(value) => value,
            None => item_to_string(overrides.selected_item.as_ref()),
        };

        let is_open = overrides.is_open.unwrap_or(false);

        Self {
            is_open,
            highlighted_index: overrides.highlighted_index.filter(|_| is_open),
            selected_item: overrides.selected_item,
            input_value,
        }
    }
}

impl<Item> WidgetState for ComboboxState<Item> {
    type Item = Item;

    fn is_open(&self) -> bool {
        self.is_open
    }

    fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    fn selected_item(&self) -> Option<&Item> {
        self.selected_item.as_ref()
    }

    fn input_value(&self) -> Option<&str> {
        Some(&self.input_value)
    }
}
