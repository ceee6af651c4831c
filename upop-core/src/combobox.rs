//! Combobox reducer.
//!
//! A combobox pairs a free-text input with a listbox. Unlike the select,
//! arrow navigation wraps around the list, and every selection rewrites the
//! input text with `item_to_string(item)` so text and selection agree.
//!
//! The reducer never filters. Owners filter their list when the input value
//! changes and pass the new list on the next transition.

use log::trace;

use crate::action::Action;
use crate::key::Key;
use crate::state::ComboboxState;

/// Compute the state that follows `action`.
///
/// Toggle-button key and blur actions, which only a select produces, leave
/// the state unchanged.
pub fn reduce<Item: Clone>(
    items: &[Item],
    item_to_string: &dyn Fn(Option<&Item>) -> String,
    state: &ComboboxState<Item>,
    action: &Action<Item>,
) -> ComboboxState<Item> {
    let mut next = state.clone();
    let highlighted = || state.highlighted_index.map(|index| items.get(index).cloned());

    match action {
        Action::InputClick | Action::ToggleButtonClick => {
            next.is_open = !state.is_open;
        }
        Action::InputKeyDown {
            key,
            prevent_default,
        } => match key {
            Key::Down => {
                next.is_open = true;
                next.highlighted_index = wrap_next(state.highlighted_index, items.len());
            }
            Key::Up => {
                next.is_open = true;
                next.highlighted_index = wrap_previous(state.highlighted_index, items.len());
            }
            Key::Enter if state.is_open => {
                prevent_default.prevent();
                next.is_open = false;
                if let Some(item) = highlighted() {
                    select_item(&mut next, item, item_to_string);
                }
            }
            Key::Escape => {
                next.is_open = false;
            }
            _ => {}
        },
        Action::InputValueChanged { input_value } => {
            next.is_open = true;
            next.input_value = input_value.clone();
        }
        Action::InputBlur => {
            next.is_open = false;
            if let Some(item) = highlighted() {
                select_item(&mut next, item, item_to_string);
            }
        }
        Action::ItemClick { index } => {
            next.is_open = false;
            select_item(&mut next, items.get(*index).cloned(), item_to_string);
        }
        Action::ItemMouseMove { index } => {
            next.highlighted_index = Some(*index);
        }
        Action::MenuMouseLeave => {
            next.highlighted_index = None;
        }
        Action::IsOpenChanged { is_open } => {
            next.is_open = *is_open;
        }
        Action::SelectedItemChanged { item } => {
            select_item(&mut next, item.clone(), item_to_string);
        }
        Action::HighlightedIndexChanged { index } => {
            next.highlighted_index = *index;
        }
        Action::ControlInputValueChanged { input_value } => {
            next.input_value = input_value.clone();
        }
        other => {
            trace!("[combobox] ignoring {}", other.tag());
        }
    }

    if !next.is_open {
        next.highlighted_index = None;
    }

    next
}

/// Selection always rewrites the input text.
fn select_item<Item>(
    next: &mut ComboboxState<Item>,
    item: Option<Item>,
    item_to_string: &dyn Fn(Option<&Item>) -> String,
) {
    next.input_value = item_to_string(item.as_ref());
    next.selected_item = item;
}

fn wrap_next(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.map_or(0, |index| (index + 1) % len))
}

fn wrap_previous(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None | Some(0) => Some(len - 1),
        Some(index) => Some(index.min(len) - 1),
    }
}
