//! Select reducer.
//!
//! A select is a listbox opened from a toggle button. Keyboard navigation
//! clamps at both ends of the list (it never wraps), and closing the menu by
//! blur commits the highlighted item.

use log::trace;

use crate::action::Action;
use crate::key::Key;
use crate::state::SelectState;

/// Compute the state that follows `action`.
///
/// `items` is the list as rendered for this transition. Indices that fall
/// outside it select nothing rather than failing. Input actions, which only
/// a combobox produces, leave the state unchanged.
pub fn reduce<Item: Clone>(
    items: &[Item],
    state: &SelectState<Item>,
    action: &Action<Item>,
) -> SelectState<Item> {
    let mut next = state.clone();

    match action {
        Action::ToggleButtonClick => {
            next.is_open = !state.is_open;
        }
        Action::ToggleButtonKeyDown { key } => {
            key_down(items, state, &mut next, key);
        }
        Action::ToggleButtonBlur => {
            next.is_open = false;
            // Keep the prior selection when nothing is highlighted.
            if let Some(item) = state.highlighted_index.and_then(|index| items.get(index)) {
                next.selected_item = Some(item.clone());
            }
        }
        Action::MenuMouseLeave => {
            next.highlighted_index = None;
        }
        Action::ItemMouseMove { index } => {
            next.highlighted_index = Some(*index);
        }
        Action::ItemClick { index } => {
            next.is_open = false;
            next.selected_item = items.get(*index).cloned();
        }
        Action::IsOpenChanged { is_open } => {
            next.is_open = *is_open;
        }
        Action::SelectedItemChanged { item } => {
            next.selected_item = item.clone();
        }
        Action::HighlightedIndexChanged { index } => {
            next.highlighted_index = *index;
        }
        other => {
            trace!("[select] ignoring {}", other.tag());
        }
    }

    if !next.is_open {
        next.highlighted_index = None;
    }

    next
}

fn key_down<Item: Clone>(
    items: &[Item],
    state: &SelectState<Item>,
    next: &mut SelectState<Item>,
    key: &Key,
) {
    let last = items.len().checked_sub(1);

    match key {
        key if key.is_activation() => {
            next.is_open = !state.is_open;
            if let Some(index) = state.highlighted_index {
                next.selected_item = items.get(index).cloned();
            }
        }
        Key::Down => {
            next.is_open = true;
            next.highlighted_index = match (state.highlighted_index, last) {
                (_, None) => None,
                (None, Some(_)) => Some(0),
                (Some(index), Some(last)) => Some((index + 1).min(last)),
            };
        }
        Key::Up => {
            next.is_open = true;
            next.highlighted_index = match (state.highlighted_index, last) {
                (_, None) => None,
                (None, Some(last)) => Some(last),
                (Some(index), Some(last)) => Some(index.saturating_sub(1).min(last)),
            };
        }
        Key::Escape => {
            next.is_open = false;
        }
        _ => {}
    }
}
