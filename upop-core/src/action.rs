//! Actions: the tagged event records fed to the reducers.
//!
//! Every user interaction a host observes (a click on the toggle button, a key
//! press in the input, the pointer leaving the menu) becomes one [`Action`].
//! The last four variants are external overrides, dispatched when an owner
//! forces a field to a value (see [`crate::control`]).
//!
//! Actions serialize as internally tagged records:
//!
//! ```ignore
//! {"type": "item-click", "index": 1}
//! {"type": "input-value-changed", "inputValue": "war"}
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::ParseActionError;
use crate::key::Key;

/// A user interaction or external override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Action<Item> {
    ToggleButtonClick,
    ToggleButtonKeyDown {
        key: Key,
    },
    ToggleButtonBlur,
    MenuMouseLeave,
    ItemClick {
        index: usize,
    },
    ItemMouseMove {
        index: usize,
    },
    InputClick,
    InputBlur,
    InputKeyDown {
        key: Key,
        #[serde(skip)]
        prevent_default: PreventDefault,
    },
    InputValueChanged {
        input_value: String,
    },

    // External overrides
    IsOpenChanged {
        is_open: bool,
    },
    SelectedItemChanged {
        item: Option<Item>,
    },
    HighlightedIndexChanged {
        index: Option<usize>,
    },
    ControlInputValueChanged {
        input_value: String,
    },
}

impl<Item> Action<Item> {
    pub fn toggle_button_click() -> Self {
        Action::ToggleButtonClick
    }

    pub fn toggle_button_key_down(key: impl Into<Key>) -> Self {
        Action::ToggleButtonKeyDown { key: key.into() }
    }

    pub fn toggle_button_blur() -> Self {
        Action::ToggleButtonBlur
    }

    pub fn menu_mouse_leave() -> Self {
        Action::MenuMouseLeave
    }

    pub fn item_click(index: usize) -> Self {
        Action::ItemClick { index }
    }

    pub fn item_mouse_move(index: usize) -> Self {
        Action::ItemMouseMove { index }
    }

    pub fn input_click() -> Self {
        Action::InputClick
    }

    pub fn input_blur() -> Self {
        Action::InputBlur
    }

    /// Key press in the combobox input.
    ///
    /// The reducer calls `prevent_default.prevent()` when it consumes the key
    /// (Enter on an open menu), so the host can suppress form submission.
    pub fn input_key_down(key: impl Into<Key>, prevent_default: PreventDefault) -> Self {
        Action::InputKeyDown {
            key: key.into(),
            prevent_default,
        }
    }

    pub fn input_value_changed(input_value: impl Into<String>) -> Self {
        Action::InputValueChanged {
            input_value: input_value.into(),
        }
    }

    pub fn is_open_changed(is_open: bool) -> Self {
        Action::IsOpenChanged { is_open }
    }

    pub fn selected_item_changed(item: Option<Item>) -> Self {
        Action::SelectedItemChanged { item }
    }

    pub fn highlighted_index_changed(index: Option<usize>) -> Self {
        Action::HighlightedIndexChanged { index }
    }

    pub fn control_input_value_changed(input_value: impl Into<String>) -> Self {
        Action::ControlInputValueChanged {
            input_value: input_value.into(),
        }
    }

    /// The serialized tag of this action.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::ToggleButtonClick => "toggle-button-click",
            Action::ToggleButtonKeyDown { .. } => "toggle-button-key-down",
            Action::ToggleButtonBlur => "toggle-button-blur",
            Action::MenuMouseLeave => "menu-mouse-leave",
            Action::ItemClick { .. } => "item-click",
            Action::ItemMouseMove { .. } => "item-mouse-move",
            Action::InputClick => "input-click",
            Action::InputBlur => "input-blur",
            Action::InputKeyDown { .. } => "input-key-down",
            Action::InputValueChanged { .. } => "input-value-changed",
            Action::IsOpenChanged { .. } => "is-open-changed",
            Action::SelectedItemChanged { .. } => "selected-item-changed",
            Action::HighlightedIndexChanged { .. } => "highlighted-index-changed",
            Action::ControlInputValueChanged { .. } => "control-input-value-changed",
        }
    }

    /// Whether this action forces state from outside rather than reporting
    /// a user interaction.
    pub fn is_override(&self) -> bool {
        matches!(
            self,
            Action::IsOpenChanged { .. }
                | Action::SelectedItemChanged { .. }
                | Action::HighlightedIndexChanged { .. }
                | Action::ControlInputValueChanged { .. }
        )
    }

    /// Arrow-key navigation on either the toggle button or the input.
    pub fn is_navigation(&self) -> bool {
        match self {
            Action::ToggleButtonKeyDown { key } | Action::InputKeyDown { key, .. } => {
                key.is_vertical_arrow()
            }
            _ => false,
        }
    }

    /// Parse a textual action of the form `tag` or `tag:argument`.
    ///
    /// Accepted arguments: an index for `item-click`/`item-mouse-move`, a DOM
    /// key name for the key-down actions, free text for the value actions,
    /// `true`/`false` for `is-open-changed` and an index or `-1` for
    /// `highlighted-index-changed`. `selected-item-changed` carries an item
    /// and cannot be parsed.
    pub fn parse(token: &str) -> Result<Self, ParseActionError> {
        let (tag, argument) = match token.split_once(':') {
            Some((tag, argument)) => (tag, Some(argument)),
            None => (token, None),
        };

        let action = match tag {
            "toggle-button-click" => Action::ToggleButtonClick,
            "toggle-button-key-down" => {
                Action::toggle_button_key_down(require(argument, "toggle-button-key-down", "key")?)
            }
            "toggle-button-blur" => Action::ToggleButtonBlur,
            "menu-mouse-leave" => Action::MenuMouseLeave,
            "item-click" => {
                Action::item_click(parse_index(require(argument, "item-click", "index")?)?)
            }
            "item-mouse-move" => {
                let index = require(argument, "item-mouse-move", "index")?;
                Action::item_mouse_move(parse_index(index)?)
            }
            "input-click" => Action::InputClick,
            "input-blur" => Action::InputBlur,
            "input-key-down" => Action::input_key_down(
                require(argument, "input-key-down", "key")?,
                PreventDefault::new(),
            ),
            "input-value-changed" => {
                Action::input_value_changed(require(argument, "input-value-changed", "text")?)
            }
            "is-open-changed" => {
                let value = require(argument, "is-open-changed", "boolean")?;
                match value {
                    "true" => Action::IsOpenChanged { is_open: true },
                    "false" => Action::IsOpenChanged { is_open: false },
                    other => return Err(ParseActionError::InvalidBool(other.to_string())),
                }
            }
            "highlighted-index-changed" => {
                let value = require(argument, "highlighted-index-changed", "index")?;
                let index = if value == "-1" {
                    None
                } else {
                    Some(parse_index(value)?)
                };
                Action::HighlightedIndexChanged { index }
            }
            "control-input-value-changed" => Action::control_input_value_changed(require(
                argument,
                "control-input-value-changed",
                "text",
            )?),
            other => return Err(ParseActionError::UnknownAction(other.to_string())),
        };

        Ok(action)
    }
}

fn require<'a>(
    argument: Option<&'a str>,
    action: &'static str,
    what: &'static str,
) -> Result<&'a str, ParseActionError> {
    argument.ok_or(ParseActionError::MissingArgument {
        action,
        argument: what,
    })
}

fn parse_index(value: &str) -> Result<usize, ParseActionError> {
    value
        .trim()
        .parse()
        .map_err(|source| ParseActionError::InvalidIndex {
            value: value.to_string(),
            source,
        })
}

/// Handle through which the reducer asks the host to cancel the native
/// default of a key press.
///
/// Clones share the same flag, so the host keeps one clone and inspects it
/// after dispatching. An optional hook runs on `prevent()`, for hosts that
/// hold a live event object.
#[derive(Clone, Default)]
pub struct PreventDefault {
    prevented: Rc<Cell<bool>>,
    hook: Option<Rc<dyn Fn()>>,
}

impl PreventDefault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` whenever the default is prevented.
    pub fn with_hook(hook: impl Fn() + 'static) -> Self {
        Self {
            prevented: Rc::new(Cell::new(false)),
            hook: Some(Rc::new(hook)),
        }
    }

    pub fn prevent(&self) {
        self.prevented.set(true);
        if let Some(hook) = &self.hook {
            hook();
        }
    }

    pub fn is_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl fmt::Debug for PreventDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreventDefault")
            .field("prevented", &self.prevented.get())
            .finish_non_exhaustive()
    }
}

/// Handles compare equal when they share the same flag.
impl PartialEq for PreventDefault {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.prevented, &other.prevented)
    }
}
