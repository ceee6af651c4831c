//! Side-effect dispatcher.
//!
//! Runs after every transition: compares the previous and next state, fires
//! the owner's change callbacks for the fields that differ, and scrolls the
//! newly highlighted item into view after keyboard navigation. This is the
//! only part of the core that reaches outside of it.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::action::Action;
use crate::elements::ElementLookup;
use crate::state::WidgetState;

/// Callback fired with the full next state.
pub type ChangeCallback<S> = Box<dyn FnMut(&S)>;

/// Optional change callbacks, one per tracked field.
pub struct Callbacks<S> {
    pub on_is_open_change: Option<ChangeCallback<S>>,
    pub on_selected_item_change: Option<ChangeCallback<S>>,
    pub on_highlighted_index_change: Option<ChangeCallback<S>>,
    /// Only fires for widgets with an input.
    pub on_input_value_change: Option<ChangeCallback<S>>,
}

impl<S> Default for Callbacks<S> {
    fn default() -> Self {
        Self {
            on_is_open_change: None,
            on_selected_item_change: None,
            on_highlighted_index_change: None,
            on_input_value_change: None,
        }
    }
}

impl<S> fmt::Debug for Callbacks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_is_open_change", &self.on_is_open_change.is_some())
            .field("on_selected_item_change", &self.on_selected_item_change.is_some())
            .field(
                "on_highlighted_index_change",
                &self.on_highlighted_index_change.is_some(),
            )
            .field("on_input_value_change", &self.on_input_value_change.is_some())
            .finish()
    }
}

/// Collaborators the dispatcher may call into.
pub struct SideEffects<'a, S: WidgetState> {
    /// The item list used for the transition.
    pub items: &'a [S::Item],
    pub elements: &'a dyn ElementLookup<S::Item>,
    pub callbacks: &'a mut Callbacks<S>,
}

/// Which fields a transition changed, and whether an item was scrolled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Changes {
    pub is_open: bool,
    pub selected_item: bool,
    pub highlighted_index: bool,
    pub input_value: bool,
    pub scrolled: bool,
}

impl Changes {
    /// Compare two states field by field.
    pub fn between<S>(prev: &S, next: &S) -> Self
    where
        S: WidgetState,
        S::Item: PartialEq,
    {
        Self {
            is_open: prev.is_open() != next.is_open(),
            selected_item: prev.selected_item() != next.selected_item(),
            highlighted_index: prev.highlighted_index() != next.highlighted_index(),
            input_value: prev.input_value() != next.input_value(),
            scrolled: false,
        }
    }

    /// True when no state field changed.
    pub fn is_empty(&self) -> bool {
        !(self.is_open || self.selected_item || self.highlighted_index || self.input_value)
    }
}

/// Fire change callbacks and scroll requests for the transition
/// `prev -> next` caused by `action`.
pub fn notify<S>(
    prev: &S,
    next: &S,
    action: &Action<S::Item>,
    effects: &mut SideEffects<'_, S>,
) -> Changes
where
    S: WidgetState,
    S::Item: PartialEq,
{
    let mut changes = Changes::between(prev, next);
    let callbacks = &mut *effects.callbacks;

    if changes.is_open {
        fire(&mut callbacks.on_is_open_change, next);
    }

    if changes.selected_item {
        fire(&mut callbacks.on_selected_item_change, next);
    }

    if changes.highlighted_index {
        fire(&mut callbacks.on_highlighted_index_change, next);
    }

    if changes.input_value {
        fire(&mut callbacks.on_input_value_change, next);
    }

    if action.is_navigation() && changes.highlighted_index {
        let element = next
            .highlighted_index()
            .and_then(|index| effects.items.get(index))
            .and_then(|item| effects.elements.element(item));

        if let Some(element) = element {
            debug!(
                "[effects] scrolling item {:?} into view",
                next.highlighted_index()
            );
            element.scroll_into_view();
            changes.scrolled = true;
        }
    }

    changes
}

fn fire<S>(callback: &mut Option<ChangeCallback<S>>, state: &S) {
    if let Some(callback) = callback {
        callback(state);
    }
}
