//! Item to element association, used only to scroll the highlighted item
//! into view.
//!
//! The core never sees rendering-layer types. Hosts register whatever handle
//! they have for an item's element behind [`ScrollIntoView`], and the
//! side-effect dispatcher looks it up through [`ElementLookup`].

use std::fmt;

/// A rendered element that can be scrolled to the nearest visible position.
pub trait ScrollIntoView {
    fn scroll_into_view(&self);
}

/// Finds the element registered for an item.
pub trait ElementLookup<Item> {
    fn element(&self, item: &Item) -> Option<&dyn ScrollIntoView>;
}

/// Lookup with nothing registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoElements;

impl<Item> ElementLookup<Item> for NoElements {
    fn element(&self, _item: &Item) -> Option<&dyn ScrollIntoView> {
        None
    }
}

/// Owner-side registry of item elements.
///
/// Hosts call [`ItemElements::capture`] from their element ref callback:
/// with `Some` when the element mounts and `None` when it unmounts.
pub struct ItemElements<Item> {
    entries: Vec<(Item, Box<dyn ScrollIntoView>)>,
}

impl<Item> Default for ItemElements<Item> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<Item: PartialEq> ItemElements<Item> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (`Some`) or forget (`None`) the element for `item`.
    pub fn capture(&mut self, item: Item, element: Option<Box<dyn ScrollIntoView>>) {
        let position = self.entries.iter().position(|(existing, _)| *existing == item);

        match (position, element) {
            (Some(position), Some(element)) => self.entries[position].1 = element,
            (None, Some(element)) => self.entries.push((item, element)),
            (Some(position), None) => {
                self.entries.remove(position);
            }
            (None, None) => {}
        }
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.entries.iter().any(|(existing, _)| existing == item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<Item: PartialEq> ElementLookup<Item> for ItemElements<Item> {
    fn element(&self, item: &Item) -> Option<&dyn ScrollIntoView> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == item)
            .map(|(_, element)| element.as_ref())
    }
}

impl<Item> fmt::Debug for ItemElements<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemElements")
            .field("len", &self.entries.len())
            .finish()
    }
}
