//! Select widget: owns the state of one select instance.

use log::{debug, trace};

use crate::action::Action;
use crate::attributes::select::{self as attrs, ToggleButtonAttributes};
use crate::attributes::{ItemAttributes, LabelAttributes, MenuAttributes};
use crate::control::{ControlProp, Override};
use crate::effects::{self, Callbacks, Changes, SideEffects};
use crate::elements::{ItemElements, ScrollIntoView};
use crate::id::WidgetId;
use crate::key::Key;
use crate::select;
use crate::state::{SelectState, StateOverrides};

use super::config::SelectOptions;

/// A select (listbox opened from a toggle button).
///
/// The host forwards each DOM or terminal event to one of the event methods
/// (or builds an [`Action`] and calls [`Select::dispatch`]), then re-renders
/// from [`Select::state`] and the attribute getters.
///
/// # Example
///
/// ```ignore
/// let mut select = Select::new(
///     SelectOptions::new(vec!["Low", "Medium", "High"])
///         .id("priority")
///         .on_selected_item_change(|state| println!("{:?}", state.selected_item)),
/// );
///
/// select.toggle_button_click();
/// select.item_click(2);
/// assert_eq!(select.state().selected_item, Some("High"));
/// ```
pub struct Select<Item> {
    id: WidgetId,
    items: Vec<Item>,
    state: SelectState<Item>,
    elements: ItemElements<Item>,
    callbacks: Callbacks<SelectState<Item>>,
    is_open: ControlProp<bool>,
    selected_item: ControlProp<Option<Item>>,
    highlighted_index: ControlProp<Option<usize>>,
}

impl<Item: Clone + PartialEq> Select<Item> {
    pub fn new(options: SelectOptions<Item>) -> Self {
        let id = options.id.map(WidgetId::new).unwrap_or_else(WidgetId::generate);

        let overrides = StateOverrides {
            is_open: options.is_open,
            highlighted_index: options.highlighted_index.flatten(),
            selected_item: options.selected_item.clone().flatten(),
            input_value: None,
        };

        debug!("[select] {} created with {} items", id, options.items.len());

        Self {
            id,
            items: options.items,
            state: SelectState::new(overrides),
            elements: ItemElements::new(),
            callbacks: options.callbacks,
            is_open: ControlProp::new("is_open", options.is_open),
            selected_item: ControlProp::new("selected_item", options.selected_item),
            highlighted_index: ControlProp::new("highlighted_index", options.highlighted_index),
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn state(&self) -> &SelectState<Item> {
        &self.state
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Replace the item list used by subsequent transitions.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Reduce `action` against the current items, store the result and run
    /// side effects.
    pub fn dispatch(&mut self, action: Action<Item>) -> &SelectState<Item> {
        self.dispatch_with_changes(action);
        &self.state
    }

    /// Like [`Select::dispatch`], reporting which fields changed.
    pub fn dispatch_with_changes(&mut self, action: Action<Item>) -> Changes {
        trace!("[select] {} dispatch {}", self.id, action.tag());

        let next = select::reduce(&self.items, &self.state, &action);
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

    pub fn toggle_button_click(&mut self) -> &SelectState<Item> {
        self.dispatch(Action::toggle_button_click())
    }

    pub fn toggle_button_key_down(&mut self, key: impl Into<Key>) -> &SelectState<Item> {
        self.dispatch(Action::toggle_button_key_down(key))
    }

    pub fn toggle_button_blur(&mut self) -> &SelectState<Item> {
        self.dispatch(Action::toggle_button_blur())
    }

    pub fn menu_mouse_leave(&mut self) -> &SelectState<Item> {
        self.dispatch(Action::menu_mouse_leave())
    }

    pub fn item_click(&mut self, index: usize) -> &SelectState<Item> {
        self.dispatch(Action::item_click(index))
    }

    pub fn item_mouse_move(&mut self, index: usize) -> &SelectState<Item> {
        self.dispatch(Action::item_mouse_move(index))
    }

    // -------------------------------------------------------------------------
    // Controlled props
    // -------------------------------------------------------------------------

    /// Force a field to `value`, bypassing the interaction rules.
    ///
    /// [`Override::InputValue`] has no effect on a select.
    pub fn apply_external_override(&mut self, value: Override<Item>) -> &SelectState<Item> {
        debug!("[select] {} external override", self.id);
        self.dispatch(value.into())
    }

    /// Pass the owner's current `is_open` value (`None` when uncontrolled).
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

    // -------------------------------------------------------------------------
    // Elements
    // -------------------------------------------------------------------------

    /// Register (`Some`) or forget (`None`) the rendered element of `item`.
    pub fn capture_element(&mut self, item: Item, element: Option<Box<dyn ScrollIntoView>>) {
        self.elements.capture(item, element);
    }

    pub fn elements(&self) -> &ItemElements<Item> {
        &self.elements
    }

    pub fn clear_elements(&mut self) {
        self.elements.clear();
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn label_attributes(&self) -> LabelAttributes {
        attrs::label(self.id.as_str())
    }

    pub fn toggle_button_attributes(&self) -> ToggleButtonAttributes {
        attrs::toggle_button(self.id.as_str(), &self.state)
    }

    pub fn menu_attributes(&self) -> MenuAttributes {
        attrs::menu(self.id.as_str())
    }

    pub fn item_attributes(&self, index: usize) -> ItemAttributes {
        attrs::item(self.id.as_str(), index, &self.items, &self.state)
    }
}

impl<Item: std::fmt::Debug> std::fmt::Debug for Select<Item> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("state", &self.state)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}
