use upop_core::combobox::reduce;
use upop_core::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct TestItem {
    id: &'static str,
    name: &'static str,
}

fn items() -> Vec<TestItem> {
    vec![
        TestItem { id: "1", name: "one" },
        TestItem { id: "2", name: "two" },
        TestItem { id: "3", name: "three" },
    ]
}

fn item_to_string(item: Option<&TestItem>) -> String {
    item.map(|item| item.name.to_string()).unwrap_or_default()
}

fn initial() -> ComboboxState<TestItem> {
    ComboboxState::new(StateOverrides::default(), &item_to_string)
}

fn run(
    state: ComboboxState<TestItem>,
    actions: &[Action<TestItem>],
) -> ComboboxState<TestItem> {
    let items = items();
    actions
        .iter()
        .fold(state, |state, action| {
            reduce(&items, &item_to_string, &state, action)
        })
}

fn key(name: &str) -> Action<TestItem> {
    Action::input_key_down(name, PreventDefault::new())
}

#[test]
fn test_initial_input_value_follows_selected_item() {
    let state = ComboboxState::new(
        StateOverrides::new().selected_item(items()[1].clone()),
        &item_to_string,
    );
    assert_eq!(state.input_value, "two");
    assert!(!state.is_open);
}

#[test]
fn test_initial_input_value_override_wins() {
    let state = ComboboxState::new(
        StateOverrides::new()
            .selected_item(items()[1].clone())
            .input_value("typed"),
        &item_to_string,
    );
    assert_eq!(state.input_value, "typed");
}

#[test]
fn test_initial_state_without_selection_has_empty_input() {
    let state = initial();
    assert_eq!(state.input_value, "");
    assert_eq!(state.highlighted_index, None);
    assert_eq!(state.selected_item, None);
}

#[test]
fn test_initial_highlight_while_closed_is_dropped() {
    let closed = ComboboxState::new(StateOverrides::new().highlighted_index(2), &item_to_string);
    assert_eq!(closed.highlighted_index, None);

    let open = ComboboxState::new(
        StateOverrides::new().is_open(true).highlighted_index(2),
        &item_to_string,
    );
    assert_eq!(open.highlighted_index, Some(2));
}

#[test]
fn test_input_click_toggles() {
    let state = run(initial(), &[Action::input_click()]);
    assert!(state.is_open);

    let state = run(state, &[Action::input_click()]);
    assert!(!state.is_open);
}

#[test]
fn test_toggle_button_click_toggles() {
    let state = run(initial(), &[Action::toggle_button_click()]);
    assert!(state.is_open);
}

#[test]
fn test_down_arrow_wraps() {
    let state = run(initial(), &[key("ArrowDown")]);
    assert!(state.is_open);
    assert_eq!(state.highlighted_index, Some(0));

    let state = run(state, &[key("ArrowDown"), key("ArrowDown")]);
    assert_eq!(state.highlighted_index, Some(2));

    let state = run(state, &[key("ArrowDown")]);
    assert_eq!(state.highlighted_index, Some(0));
}

#[test]
fn test_up_arrow_wraps() {
    let state = run(initial(), &[key("ArrowUp")]);
    assert!(state.is_open);
    assert_eq!(state.highlighted_index, Some(2));

    let state = run(state, &[key("ArrowUp"), key("ArrowUp")]);
    assert_eq!(state.highlighted_index, Some(0));

    let state = run(state, &[key("ArrowUp")]);
    assert_eq!(state.highlighted_index, Some(2));
}

#[test]
fn test_arrows_on_empty_list_highlight_nothing() {
    let empty: Vec<TestItem> = Vec::new();
    let state = reduce(&empty, &item_to_string, &initial(), &key("ArrowDown"));
    assert!(state.is_open);
    assert_eq!(state.highlighted_index, None);
}

#[test]
fn test_enter_selects_highlighted_and_prevents_default() {
    let prevent_default = PreventDefault::new();
    let state = run(
        initial(),
        &[
            key("ArrowDown"),
            key("ArrowDown"),
            Action::input_key_down(Key::Enter, prevent_default.clone()),
        ],
    );

    assert!(prevent_default.is_prevented());
    assert!(!state.is_open);
    assert_eq!(state.highlighted_index, None);
    assert_eq!(state.selected_item, Some(items()[1].clone()));
    assert_eq!(state.input_value, "two");
}

#[test]
fn test_enter_while_closed_is_ignored() {
    let prevent_default = PreventDefault::new();
    let state = run(
        initial(),
        &[Action::input_key_down(Key::Enter, prevent_default.clone())],
    );

    assert!(!prevent_default.is_prevented());
    assert_eq!(state, initial());
}

#[test]
fn test_enter_without_highlight_closes_and_keeps_selection() {
    let selected = ComboboxState {
        is_open: true,
        highlighted_index: None,
        selected_item: Some(items()[0].clone()),
        input_value: "on".to_string(),
    };
    let state = run(selected, &[key("Enter")]);
    assert!(!state.is_open);
    assert_eq!(state.selected_item, Some(items()[0].clone()));
    assert_eq!(state.input_value, "on");
}

#[test]
fn test_prevent_default_hook_runs() {
    use std::cell::Cell;
    use std::rc::Rc;

    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let prevent_default = PreventDefault::with_hook(move || counter.set(counter.get() + 1));

    run(
        initial(),
        &[
            Action::input_click(),
            Action::input_key_down(Key::Enter, prevent_default.clone()),
        ],
    );

    assert_eq!(calls.get(), 1);
    assert!(prevent_default.is_prevented());
}

#[test]
fn test_escape_closes() {
    let state = run(initial(), &[key("ArrowDown"), key("Escape")]);
    assert!(!state.is_open);
    assert_eq!(state.highlighted_index, None);
    assert_eq!(state.selected_item, None);
}

#[test]
fn test_typing_opens_and_sets_input() {
    let state = run(initial(), &[Action::input_value_changed("tw")]);
    assert!(state.is_open);
    assert_eq!(state.input_value, "tw");
    assert_eq!(state.selected_item, None);
}

#[test]
fn test_blur_selects_highlighted_item() {
    let state = run(initial(), &[key("ArrowUp"), Action::input_blur()]);
    assert!(!state.is_open);
    assert_eq!(state.selected_item, Some(items()[2].clone()));
    assert_eq!(state.input_value, "three");
}

#[test]
fn test_blur_without_highlight_keeps_typed_text() {
    let state = run(
        initial(),
        &[Action::input_value_changed("tw"), Action::input_blur()],
    );
    assert!(!state.is_open);
    assert_eq!(state.input_value, "tw");
    assert_eq!(state.selected_item, None);
}

#[test]
fn test_item_click_selects_and_rewrites_input() {
    let state = run(
        initial(),
        &[Action::input_value_changed("t"), Action::item_click(2)],
    );
    assert!(!state.is_open);
    assert_eq!(state.selected_item, Some(items()[2].clone()));
    assert_eq!(state.input_value, "three");
}

#[test]
fn test_item_click_out_of_range_clears_selection() {
    let state = ComboboxState::new(
        StateOverrides::new().selected_item(items()[0].clone()),
        &item_to_string,
    );
    let state = run(state, &[Action::item_click(7)]);
    assert_eq!(state.selected_item, None);
    assert_eq!(state.input_value, "");
}

#[test]
fn test_mouse_move_and_leave() {
    let state = run(
        initial(),
        &[Action::input_click(), Action::item_mouse_move(2)],
    );
    assert_eq!(state.highlighted_index, Some(2));

    let state = run(state, &[Action::menu_mouse_leave()]);
    assert!(state.is_open);
    assert_eq!(state.highlighted_index, None);
}

#[test]
fn test_selected_item_override_rewrites_input() {
    let state = run(
        initial(),
        &[Action::selected_item_changed(Some(items()[1].clone()))],
    );
    assert_eq!(state.selected_item, Some(items()[1].clone()));
    assert_eq!(state.input_value, "two");

    let state = run(state, &[Action::selected_item_changed(None)]);
    assert_eq!(state.selected_item, None);
    assert_eq!(state.input_value, "");
}

#[test]
fn test_highlight_override_keeps_input() {
    let state = run(
        initial(),
        &[
            Action::input_value_changed("typed"),
            Action::highlighted_index_changed(Some(1)),
        ],
    );
    assert_eq!(state.highlighted_index, Some(1));
    assert_eq!(state.input_value, "typed");
    assert_eq!(state.selected_item, None);
}

#[test]
fn test_input_value_override_keeps_open_state() {
    let state = run(initial(), &[Action::control_input_value_changed("abc")]);
    assert!(!state.is_open);
    assert_eq!(state.input_value, "abc");
}

#[test]
fn test_closing_override_is_idempotent() {
    let once = run(initial(), &[key("ArrowDown"), Action::is_open_changed(false)]);
    let twice = run(once.clone(), &[Action::is_open_changed(false)]);
    assert_eq!(once, twice);
    assert_eq!(twice.highlighted_index, None);
}

#[test]
fn test_toggle_button_keys_are_ignored() {
    let state = run(
        initial(),
        &[
            Action::toggle_button_key_down(Key::Down),
            Action::toggle_button_blur(),
        ],
    );
    assert_eq!(state, initial());
}

#[test]
fn test_item_to_string_is_read_per_transition() {
    let items = items();
    let upper = |item: Option<&TestItem>| {
        item.map(|item| item.name.to_uppercase()).unwrap_or_default()
    };

    let state = reduce(&items, &upper, &initial(), &Action::item_click(0));
    assert_eq!(state.input_value, "ONE");
}

#[test]
fn test_filtered_list_is_used_for_selection() {
    let filtered = vec![items()[2].clone()];
    let state = run(initial(), &[Action::input_value_changed("thr")]);
    let state = reduce(&filtered, &item_to_string, &state, &key("ArrowDown"));
    let state = reduce(&filtered, &item_to_string, &state, &key("Enter"));

    assert_eq!(state.selected_item, Some(items()[2].clone()));
    assert_eq!(state.input_value, "three");
}
