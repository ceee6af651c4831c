//! Host-side widgets.
//!
//! [`Select`] and [`Combobox`] own everything one widget instance needs
//! between events: its id, the current item list, state, registered item
//! elements, change callbacks and controlled-prop watchers. Every event runs
//! the canonical reducer followed by the side-effect dispatcher.

mod combobox;
pub mod config;
mod select;

pub use combobox::Combobox;
pub use config::{ComboboxOptions, SelectOptions};
pub use select::Select;
