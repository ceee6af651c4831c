//! Non-interactive mode: run textual actions and print each resulting state
//! as one JSON line.

use std::io::Write;

use log::info;
use serde::Serialize;
use upop_core::effects::Changes;
use upop_core::prelude::*;

use crate::WidgetKind;
use crate::books::{Book, book_to_string, books, filter_books};
use crate::error::CliError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Step<'a, S> {
    action: &'a Action<Book>,
    state: &'a S,
    changes: Changes,
    /// Only present for input key presses.
    #[serde(skip_serializing_if = "Option::is_none")]
    default_prevented: Option<bool>,
    /// Titles of the items the next action sees.
    items: Vec<&'static str>,
}

pub fn run(kind: WidgetKind, tokens: &[String], out: &mut impl Write) -> Result<(), CliError> {
    let actions = tokens
        .iter()
        .map(|token| Action::parse(token))
        .collect::<Result<Vec<Action<Book>>, _>>()?;

    info!("running {} scripted actions on a {:?}", actions.len(), kind);

    match kind {
        WidgetKind::Select => run_select(actions, out),
        WidgetKind::Combobox => run_combobox(actions, out),
    }
}

fn run_select(actions: Vec<Action<Book>>, out: &mut impl Write) -> Result<(), CliError> {
    let mut select = Select::new(SelectOptions::new(books()).id("select"));

    for action in actions {
        let changes = select.dispatch_with_changes(action.clone());
        write_step(
            out,
            &Step {
                action: &action,
                state: select.state(),
                changes,
                default_prevented: None,
                items: titles(select.items()),
            },
        )?;
    }

    Ok(())
}

fn run_combobox(actions: Vec<Action<Book>>, out: &mut impl Write) -> Result<(), CliError> {
    let all = books();
    let mut combobox =
        Combobox::new(ComboboxOptions::new(all.clone(), book_to_string).id("combobox"));

    for action in actions {
        let prevent_default = match &action {
            Action::InputKeyDown {
                prevent_default, ..
            } => Some(prevent_default.clone()),
            _ => None,
        };

        let changes = combobox.dispatch_with_changes(action.clone());
        if changes.input_value {
            let filtered = filter_books(&combobox.state().input_value, &all);
            combobox.set_items(filtered);
        }

        write_step(
            out,
            &Step {
                action: &action,
                state: combobox.state(),
                changes,
                default_prevented: prevent_default.map(|handle| handle.is_prevented()),
                items: titles(combobox.items()),
            },
        )?;
    }

    Ok(())
}

fn titles(items: &[Book]) -> Vec<&'static str> {
    items.iter().map(|book| book.title).collect()
}

fn write_step<S: Serialize>(out: &mut impl Write, step: &Step<'_, S>) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, step)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn run_script(kind: WidgetKind, tokens: &[&str]) -> Vec<Value> {
        let tokens: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
        let mut out = Vec::new();
        run(kind, &tokens, &mut out).unwrap();

        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_select_script() {
        let steps = run_script(
            WidgetKind::Select,
            &[
                "toggle-button-key-down:ArrowDown",
                "toggle-button-key-down:ArrowDown",
                "toggle-button-key-down:Enter",
            ],
        );

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0]["state"]["highlightedIndex"], 0);
        assert_eq!(steps[0]["changes"]["isOpen"], true);
        assert_eq!(steps[2]["state"]["isOpen"], false);
        assert_eq!(steps[2]["state"]["highlightedIndex"], Value::Null);
        assert_eq!(steps[2]["state"]["selectedItem"]["title"], "War and Peace");
        assert!(steps[2].get("defaultPrevented").is_none());
    }

    #[test]
    fn test_combobox_script_filters_and_selects() {
        let steps = run_script(
            WidgetKind::Combobox,
            &[
                "input-value-changed:karamazov",
                "input-key-down:ArrowDown",
                "input-key-down:Enter",
            ],
        );

        assert_eq!(steps[0]["items"], serde_json::json!(["The Brothers Karamazov"]));
        assert_eq!(steps[1]["state"]["highlightedIndex"], 0);
        assert_eq!(steps[2]["defaultPrevented"], true);
        assert_eq!(steps[2]["state"]["inputValue"], "The Brothers Karamazov");
        assert_eq!(steps[2]["action"]["type"], "input-key-down");
    }

    #[test]
    fn test_invalid_action_fails_before_running() {
        let mut out = Vec::new();
        let tokens = vec!["toggle-button-click".to_string(), "item-click:x".to_string()];
        let result = run(WidgetKind::Select, &tokens, &mut out);

        assert!(matches!(result, Err(CliError::Parse(_))));
        assert!(out.is_empty());
    }
}
