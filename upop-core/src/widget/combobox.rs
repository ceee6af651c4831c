//! Combobox widget: owns the state of one combobox instance.

use std::rc::Rc;

use log::{debug, trace};

use crate::action::{Action, PreventDefault};
use crate::attributes::combobox::{self as attrs, InputAttributes, ToggleButtonAttributes};
use crate::attributes::{ItemAttributes, LabelAttributes, MenuAttributes};
use crate::combobox;
use crate::control::{ControlProp, Override};
use crate::effects::{self, Callbacks, Changes, SideEffects};
use crate::elements::{ItemElements, ScrollIntoView};
use crate::id::WidgetId;
use crate::key::Key;
use crate::state::{ComboboxState, ItemToString, StateOverrides};

use super::config::ComboboxOptions;

/// A combobox (text input with a listbox of suggestions).
///
/// Filtering is left to the owner: react to input changes (for example from
/// `on_input_value_change`, or by comparing [`Changes::input_value`]) and call
/// [`Combobox::set_items`] with the filtered list.
pub struct Combobox<Item> {
    id: WidgetId,
    items: Vec<Item>,
    item_to_string: Rc<ItemToString<Item>>,
    state: ComboboxState<Item>,
    elements: ItemElements<Item>,
    callbacks: Callbacks<ComboboxState<Item>>,
    is_open: ControlProp<bool>,
    selected_item: ControlProp<Option<Item>>,
    highlighted_index: ControlProp<Option<usize>>,
    input_value: ControlProp<String>,
}

impl<Item: Clone + PartialEq> Combobox<Item> {
    pub fn new(options: ComboboxOptions<Item>) -> Self {
        let id = options.id.map(WidgetId::new).unwrap_or_else(WidgetId::generate);

        let overrides = StateOverrides {
            is_open: options.is_open,
            highlighted_index: options.highlighted_index.flatten(),
            selected_item: options.selected_item.clone().flatten(),
            input_value: options.input_value.clone(),
        };
        let state = ComboboxState::new(overrides, &*options.item_to_string);

        debug!("[combobox] {} created with {} items", id, options.items.len());

        Self {
            id,
            items: options.items,
            item_to_string: options.item_to_string,
            state,
            elements: ItemElements::new(),
            callbacks: options.callbacks,
            is_open: ControlProp::new("is_open", options.is_open),
            selected_item: ControlProp::new("selected_item", options.selected_item),
            highlighted_index: ControlProp::new("highlighted_index", options.highlighted_index),
            input_value: ControlProp::new("input_value", options.input_value),
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn state(&self) -> &ComboboxState<Item> {
        &self.state
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Replace the item list, typically with a filtered one.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Text for `item` as the input would show it.
    pub fn item_to_string(&self, item: Option<&Item>) -> String {
        (self.item_to_string)(item)
    }

    pub fn dispatch(&mut self, action: Action<Item>) -> &ComboboxState<Item> {
        self.dispatch_with_changes(action);
        &self.state
    }

    pub fn dispatch_with_changes(&mut self, action: Action<Item>) -> Changes {
        trace!("[combobox] {} dispatch {}", self.id, action.tag());

        let next = combobox::reduce(&self.items, &*self.item_to_string, &self.state, &action);
        let prev = std::mem::replace(&mut self.state, next);

        let mut side_effects = SideEffects {
            items: &self.items,
            elements: &self.elements,
            callbacks: &mut self.callbacks,
        };
        effects::notify(&prev, &self.state, &action, &mut side_effects)
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn input_click(&mut self) -> &ComboboxState<Item> {
        self.dispatch(Action::input_click())
    }

    pub fn input_blur(&mut self) -> &ComboboxState<Item> {
        self.dispatch(Action::input_blur())
    }

    /// Key press in the input. Check `prevent_default` afterwards to know
    /// whether the host should cancel the native behavior.
    pub fn input_key_down(
        &mut self,
        key: impl Into<Key>,
        prevent_default: PreventDefault,
    ) -> &ComboboxState<Item> {
        self.dispatch(Action::input_key_down(key, prevent_default))
    }

    /// The user edited the input text.
    pub fn input_change(&mut self, value: impl Into<String>) -> &ComboboxState<Item> {
        self.dispatch(Action::input_value_changed(value))
    }

    pub fn toggle_button_click(&mut self) -> &ComboboxState<Item> {
        self.dispatch(Action::toggle_button_click())
    }

    pub fn menu_mouse_leave(&mut self) -> &ComboboxState<Item> {
        self.dispatch(Action::menu_mouse_leave())
    }

    pub fn item_click(&mut self, index: usize) -> &ComboboxState<Item> {
        self.dispatch(Action::item_click(index))
    }

    pub fn item_mouse_move(&mut self, index: usize) -> &ComboboxState<Item> {
        self.dispatch(Action::item_mouse_move(index))
    }

    // -------------------------------------------------------------------------
    // Controlled props
    // -------------------------------------------------------------------------

    /// Force a field to `value`, bypassing the interaction rules.
    ///
    /// Overriding the selected item also rewrites the input text; overriding
    /// the highlighted index does not.
    pub fn apply_external_override(&mut self, value: Override<Item>) -> &ComboboxState<Item> {
        debug!("[combobox] {} external override", self.id);
        self.dispatch(value.into())
    }

    pub fn control_is_open(&mut self, value: Option<bool>) {
        if let Some(is_open) = self.is_open.update(value) {
            self.apply_external_override(Override::IsOpen(is_open));
        }
    }

    pub fn control_selected_item(&mut self, value: Option<Option<Item>>) {
        if let Some(item) = self.selected_item.update(value) {
            self.apply_external_override(Override::SelectedItem(item));
        }
    }

    pub fn control_highlighted_index(&mut self, value: Option<Option<usize>>) {
        if let Some(index) = self.highlighted_index.update(value) {
            self.apply_external_override(Override::HighlightedIndex(index));
        }
    }

    pub fn control_input_value(&mut self, value: Option<String>) {
        if let Some(input_value) = self.input_value.update(value) {
            self.apply_external_override(Override::InputValue(input_value));
        }
    }

    // -------------------------------------------------------------------------
    // Elements
    // -------------------------------------------------------------------------

    pub fn capture_element(&mut self, item: Item, element: Option<Box<dyn ScrollIntoView>>) {
        self.elements.capture(item, element);
    }

    pub fn elements(&self) -> &ItemElements<Item> {
        &self.elements
    }

    /// Forget every registered element, e.g. before re-rendering a new list.
    pub fn clear_elements(&mut self) {
        self.elements.clear();
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn label_attributes(&self) -> LabelAttributes {
        attrs::label(self.id.as_str())
    }

    pub fn input_attributes(&self) -> InputAttributes {
        attrs::input(self.id.as_str(), &self.state)
    }

    pub fn toggle_button_attributes(&self) -> ToggleButtonAttributes {
        attrs::toggle_button(self.id.as_str(), &self.state)
    }

    pub fn menu_attributes(&self) -> MenuAttributes {
        attrs::menu(self.id.as_str())
    }

    pub fn item_attributes(&self, index: usize) -> ItemAttributes {
        attrs::item(self.id.as_str(), index, &self.state)
    }
}

impl<Item: std::fmt::Debug> std::fmt::Debug for Combobox<Item> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Combobox")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("state", &self.state)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}
