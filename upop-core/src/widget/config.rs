//! Widget configuration.

use std::fmt;
use std::rc::Rc;

use crate::effects::Callbacks;
use crate::state::{ComboboxState, ItemToString, SelectState};

/// Configuration for a [`super::Select`].
///
/// Controlled values (`is_open`, `selected_item`, `highlighted_index`) seed
/// the initial state. Owners that keep controlling a field afterwards pass
/// each new value to the matching `control_*` method on the widget.
pub struct SelectOptions<Item> {
    pub items: Vec<Item>,
    /// Element id prefix. Generated when absent.
    pub id: Option<String>,
    pub is_open: Option<bool>,
    pub selected_item: Option<Option<Item>>,
    pub highlighted_index: Option<Option<usize>>,
    pub callbacks: Callbacks<SelectState<Item>>,
}

impl<Item> SelectOptions<Item> {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            id: None,
            is_open: None,
            selected_item: None,
            highlighted_index: None,
            callbacks: Callbacks::default(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = Some(is_open);
        self
    }

    pub fn selected_item(mut self, item: Option<Item>) -> Self {
        self.selected_item = Some(item);
        self
    }

    pub fn highlighted_index(mut self, index: Option<usize>) -> Self {
        self.highlighted_index = Some(index);
        self
    }

    pub fn on_is_open_change(mut self, f: impl FnMut(&SelectState<Item>) + 'static) -> Self {
        self.callbacks.on_is_open_change = Some(Box::new(f));
        self
    }

    pub fn on_selected_item_change(
        mut self,
        f: impl FnMut(&SelectState<Item>) + 'static,
    ) -> Self {
        self.callbacks.on_selected_item_change = Some(Box::new(f));
        self
    }

    pub fn on_highlighted_index_change(
        mut self,
        f: impl FnMut(&SelectState<Item>) + 'static,
    ) -> Self {
        self.callbacks.on_highlighted_index_change = Some(Box::new(f));
        self
    }
}

impl<Item: fmt::Debug> fmt::Debug for SelectOptions<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectOptions")
            .field("items", &self.items)
            .field("id", &self.id)
            .field("is_open", &self.is_open)
            .field("selected_item", &self.selected_item)
            .field("highlighted_index", &self.highlighted_index)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

/// Configuration for a [`super::Combobox`].
pub struct ComboboxOptions<Item> {
    pub items: Vec<Item>,
    pub id: Option<String>,
    pub item_to_string: Rc<ItemToString<Item>>,
    pub is_open: Option<bool>,
    pub selected_item: Option<Option<Item>>,
    pub highlighted_index: Option<Option<usize>>,
    pub input_value: Option<String>,
    pub callbacks: Callbacks<ComboboxState<Item>>,
}

impl<Item> ComboboxOptions<Item> {
    pub fn new(
        items: Vec<Item>,
        item_to_string: impl Fn(Option<&Item>) -> String + 'static,
    ) -> Self {
        Self {
            items,
            id: None,
            item_to_string: Rc::new(item_to_string),
            is_open: None,
            selected_item: None,
            highlighted_index: None,
            input_value: None,
            callbacks: Callbacks::default(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = Some(is_open);
        self
    }

    pub fn selected_item(mut self, item: Option<Item>) -> Self {
        self.selected_item = Some(item);
        self
    }

    pub fn highlighted_index(mut self, index: Option<usize>) -> Self {
        self.highlighted_index = Some(index);
        self
    }

    pub fn input_value(mut self, value: impl Into<String>) -> Self {
        self.input_value = Some(value.into());
        self
    }

    pub fn on_is_open_change(mut self, f: impl FnMut(&ComboboxState<Item>) + 'static) -> Self {
        self.callbacks.on_is_open_change = Some(Box::new(f));
        self
    }

    pub fn on_selected_item_change(
        mut self,
        f: impl FnMut(&ComboboxState<Item>) + 'static,
    ) -> Self {
        self.callbacks.on_selected_item_change = Some(Box::new(f));
        self
    }

    pub fn on_highlighted_index_change(
        mut self,
        f: impl FnMut(&ComboboxState<Item>) + 'static,
    ) -> Self {
        self.callbacks.on_highlighted_index_change = Some(Box::new(f));
        self
    }

    pub fn on_input_value_change(
        mut self,
        f: impl FnMut(&ComboboxState<Item>) + 'static,
    ) -> Self {
        self.callbacks.on_input_value_change = Some(Box::new(f));
        self
    }
}

impl<Item: fmt::Debug> fmt::Debug for ComboboxOptions<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboboxOptions")
            .field("items", &self.items)
            .field("id", &self.id)
            .field("is_open", &self.is_open)
            .field("selected_item", &self.selected_item)
            .field("highlighted_index", &self.highlighted_index)
            .field("input_value", &self.input_value)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}
