//! Controlled props: state fields driven by an external owner.
//!
//! An owner that controls a field keeps its own copy of the value and hands it
//! to the widget on every render. [`ControlProp`] notices when that value
//! changes and the widget then applies an [`Override`], which dispatches the
//! matching override action through the reducer like any other action.

use log::debug;

use crate::action::Action;

/// A field value forced by the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override<Item> {
    IsOpen(bool),
    SelectedItem(Option<Item>),
    HighlightedIndex(Option<usize>),
    /// Ignored by the select, which has no input.
    InputValue(String),
}

impl<Item> From<Override<Item>> for Action<Item> {
    fn from(value: Override<Item>) -> Self {
        match value {
            Override::IsOpen(is_open) => Action::IsOpenChanged { is_open },
            Override::SelectedItem(item) => Action::SelectedItemChanged { item },
            Override::HighlightedIndex(index) => Action::HighlightedIndexChanged { index },
            Override::InputValue(input_value) => Action::ControlInputValueChanged { input_value },
        }
    }
}

/// Watches an owner-supplied value for changes.
///
/// `None` means the owner does not control the field right now. A change is
/// reported only when the new value is `Some` and differs from the value seen
/// on the previous update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlProp<T> {
    name: &'static str,
    previous: Option<T>,
}

impl<T: Clone + PartialEq> ControlProp<T> {
    pub fn new(name: &'static str, initial: Option<T>) -> Self {
        Self {
            name,
            previous: initial,
        }
    }

    /// Record `value` and return it if it is a change the widget must apply.
    pub fn update(&mut self, value: Option<T>) -> Option<T> {
        let changed = match &value {
            Some(value) => self.previous.as_ref() != Some(value),
            None => false,
        };

        self.previous = value.clone();

        if changed {
            debug!("[control] {} changed", self.name);
            value
        } else {
            None
        }
    }

    /// Whether the owner currently controls this field.
    pub fn is_controlled(&self) -> bool {
        self.previous.is_some()
    }
}
