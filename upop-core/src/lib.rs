//! Headless select and combobox widgets.
//!
//! The core is a pair of pure reducers ([`select::reduce`],
//! [`combobox::reduce`]) turning [`Action`]s into new states, attribute
//! builders deriving ARIA attributes from state ([`attributes`]), and a
//! side-effect dispatcher ([`effects::notify`]) that fires change callbacks
//! and scroll requests. [`widget`] wraps them into stateful widgets for hosts.

pub mod action;
pub mod attributes;
pub mod combobox;
pub mod control;
pub mod effects;
pub mod elements;
pub mod error;
pub mod filter;
pub mod id;
pub mod key;
pub mod select;
pub mod state;
pub mod widget;

pub use action::{Action, PreventDefault};
pub use error::ParseActionError;
pub use key::Key;
pub use state::{ComboboxState, SelectState, StateOverrides, WidgetState};

pub mod prelude {
    pub use crate::action::{Action, PreventDefault};
    pub use crate::attributes::Attributes;
    pub use crate::control::{ControlProp, Override};
    pub use crate::effects::{Callbacks, Changes};
    pub use crate::elements::{ElementLookup, ItemElements, NoElements, ScrollIntoView};
    pub use crate::error::ParseActionError;
    pub use crate::filter::filter_items;
    pub use crate::id::WidgetId;
    pub use crate::key::Key;
    pub use crate::state::{ComboboxState, SelectState, StateOverrides, WidgetState};
    pub use crate::widget::{Combobox, ComboboxOptions, Select, SelectOptions};
}
