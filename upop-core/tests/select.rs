use upop_core::prelude::*;
use upop_core::select::reduce;

#[derive(Debug, Clone, PartialEq)]
struct TestItem {
    id: &'static str,
    name: &'static str,
}

fn items() -> Vec<TestItem> {
    vec![
        TestItem { id: "1", name: "one" },
        TestItem { id: "2", name: "two" },
    ]
}

fn run(state: SelectState<TestItem>, actions: &[Action<TestItem>]) -> SelectState<TestItem> {
    let items = items();
    actions
        .iter()
        .fold(state, |state, action| reduce(&items, &state, action))
}

fn open_at(index: usize) -> SelectState<TestItem> {
    SelectState {
        is_open: true,
        highlighted_index: Some(index),
        selected_item: None,
    }
}

#[test]
fn test_default_state() {
    let state: SelectState<TestItem> = SelectState::default();
    assert!(!state.is_open);
    assert_eq!(state.highlighted_index, None);
    assert_eq!(state.selected_item, None);
}

#[test]
fn test_initial_state_overrides() {
    let state = SelectState::new(StateOverrides::new().is_open(true).highlighted_index(1));
    assert!(state.is_open);
    assert_eq!(state.highlighted_index, Some(1));
    assert_eq!(state.selected_item, None::<TestItem>);
}

#[test]
fn test_initial_highlight_while_closed_is_dropped() {
    let state: SelectState<TestItem> =
        SelectState::new(StateOverrides::new().highlighted_index(1));
    assert!(!state.is_open);
    assert_eq!(state.highlighted_index, None);
}

#[test]
fn test_toggle_button_click_toggles() {
    let state = run(SelectState::default(), &[Action::toggle_button_click()]);
    assert!(state.is_open);

    let state = run(state, &[Action::toggle_button_click()]);
    assert!(!state.is_open);
}

#[test]
fn test_down_arrow_opens_and_highlights_first() {
    let state = run(SelectState::default(), &[Action::toggle_button_key_down("ArrowDown")]);
    assert_eq!(state, open_at(0));
}

#[test]
fn test_up_arrow_opens_and_highlights_last() {
    let state = run(SelectState::default(), &[Action::toggle_button_key_down("ArrowUp")]);
    assert_eq!(state, open_at(1));
}

#[test]
fn test_navigation_clamps_at_ends() {
    let down = Action::toggle_button_key_down(Key::Down);
    let state = run(SelectState::default(), &[down.clone(), down.clone(), down]);
    assert_eq!(state.highlighted_index, Some(1));

    let up = Action::toggle_button_key_down(Key::Up);
    let state = run(state, &[up.clone(), up.clone(), up]);
    assert_eq!(state.highlighted_index, Some(0));
}

#[test]
fn test_stale_highlight_is_clamped_to_list() {
    let state = run(open_at(5), &[Action::toggle_button_key_down(Key::Down)]);
    assert_eq!(state.highlighted_index, Some(1));

    let state = run(open_at(5), &[Action::toggle_button_key_down(Key::Up)]);
    assert_eq!(state.highlighted_index, Some(1));
}

#[test]
fn test_navigation_on_empty_list_highlights_nothing() {
    let empty: Vec<TestItem> = Vec::new();
    let state = reduce(
        &empty,
        &SelectState::default(),
        &Action::toggle_button_key_down(Key::Down),
    );
    assert!(state.is_open);
    assert_eq!(state.highlighted_index, None);
}

#[test]
fn test_enter_toggles() {
    let state = run(SelectState::default(), &[Action::toggle_button_key_down("Enter")]);
    assert!(state.is_open);
    assert_eq!(state.highlighted_index, None);

    let state = run(state, &[Action::toggle_button_key_down("Enter")]);
    assert!(!state.is_open);
}

#[test]
fn test_enter_selects_highlighted_item() {
    let state = run(
        SelectState::default(),
        &[
            Action::toggle_button_key_down(Key::Down),
            Action::toggle_button_key_down(Key::Enter),
        ],
    );
    assert!(!state.is_open);
    assert_eq!(state.highlighted_index, None);
    assert_eq!(state.selected_item, Some(items()[0].clone()));
}

#[test]
fn test_space_selects_highlighted_item() {
    let state = run(
        SelectState::default(),
        &[
            Action::toggle_button_key_down(Key::Down),
            Action::toggle_button_key_down(" "),
        ],
    );
    assert!(!state.is_open);
    assert_eq!(state.selected_item, Some(items()[0].clone()));
}

#[test]
fn test_escape_closes_without_selecting() {
    let state = run(
        SelectState::default(),
        &[
            Action::toggle_button_key_down(Key::Down),
            Action::toggle_button_key_down(Key::Escape),
        ],
    );
    assert_eq!(state, SelectState::default());
}

#[test]
fn test_other_keys_are_ignored() {
    let state = run(open_at(1), &[Action::toggle_button_key_down("a")]);
    assert_eq!(state, open_at(1));
}

#[test]
fn test_blur_selects_highlighted_item() {
    let state = run(open_at(1), &[Action::toggle_button_blur()]);
    assert!(!state.is_open);
    assert_eq!(state.selected_item, Some(items()[1].clone()));
}

#[test]
fn test_blur_without_highlight_keeps_selection() {
    let state = SelectState {
        is_open: true,
        highlighted_index: None,
        selected_item: Some(items()[0].clone()),
    };
    let state = run(state, &[Action::toggle_button_blur()]);
    assert!(!state.is_open);
    assert_eq!(state.selected_item, Some(items()[0].clone()));
}

#[test]
fn test_item_click_selects_and_closes() {
    let state = run(open_at(0), &[Action::item_click(1)]);
    assert!(!state.is_open);
    assert_eq!(state.highlighted_index, None);
    assert_eq!(state.selected_item, Some(items()[1].clone()));
}

#[test]
fn test_item_click_out_of_range_selects_nothing() {
    let state = SelectState {
        is_open: true,
        highlighted_index: None,
        selected_item: Some(items()[0].clone()),
    };
    let state = run(state, &[Action::item_click(9)]);
    assert!(!state.is_open);
    assert_eq!(state.selected_item, None);
}

#[test]
fn test_mouse_move_and_leave() {
    let state = run(
        SelectState::default(),
        &[Action::toggle_button_click(), Action::item_mouse_move(1)],
    );
    assert_eq!(state.highlighted_index, Some(1));

    let state = run(state, &[Action::menu_mouse_leave()]);
    assert!(state.is_open);
    assert_eq!(state.highlighted_index, None);
}

#[test]
fn test_mouse_move_while_closed_highlights_nothing() {
    let state = run(SelectState::default(), &[Action::item_mouse_move(1)]);
    assert_eq!(state.highlighted_index, None);
}

#[test]
fn test_input_actions_are_ignored() {
    let state = run(
        open_at(0),
        &[
            Action::input_click(),
            Action::input_blur(),
            Action::input_value_changed("two"),
            Action::control_input_value_changed("two"),
        ],
    );
    assert_eq!(state, open_at(0));
}

#[test]
fn test_overrides_set_fields() {
    let state = run(
        SelectState::default(),
        &[
            Action::is_open_changed(true),
            Action::highlighted_index_changed(Some(1)),
            Action::selected_item_changed(Some(items()[0].clone())),
        ],
    );
    assert!(state.is_open);
    assert_eq!(state.highlighted_index, Some(1));
    assert_eq!(state.selected_item, Some(items()[0].clone()));
}

#[test]
fn test_highlight_override_while_closed_is_dropped() {
    let state = run(
        SelectState::default(),
        &[Action::highlighted_index_changed(Some(1))],
    );
    assert_eq!(state.highlighted_index, None);
}

#[test]
fn test_closing_override_clears_highlight() {
    let state = run(open_at(1), &[Action::is_open_changed(false)]);
    assert!(!state.is_open);
    assert_eq!(state.highlighted_index, None);
}

#[test]
fn test_closed_state_never_has_highlight() {
    let actions = [
        Action::toggle_button_key_down(Key::Down),
        Action::toggle_button_key_down(Key::Down),
        Action::item_mouse_move(0),
        Action::toggle_button_key_down(Key::Escape),
        Action::toggle_button_click(),
        Action::item_mouse_move(1),
        Action::toggle_button_blur(),
        Action::highlighted_index_changed(Some(0)),
        Action::toggle_button_key_down(Key::Up),
        Action::item_click(0),
    ];

    let items = items();
    let mut state = SelectState::default();
    for action in &actions {
        state = reduce(&items, &state, action);
        if !state.is_open {
            assert_eq!(state.highlighted_index, None, "after {}", action.tag());
        }
    }
}

#[test]
fn test_reduce_leaves_input_state_untouched() {
    let before = open_at(0);
    let items = items();
    let _ = reduce(&items, &before, &Action::toggle_button_click());
    assert_eq!(before, open_at(0));
}
