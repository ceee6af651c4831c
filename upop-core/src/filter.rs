//! Owner-side filtering for comboboxes.
//!
//! The combobox reducer never filters. An owner typically calls
//! [`filter_items`] when the input value changes and hands the result back
//! to the widget as the new item list.

use std::cmp::Reverse;

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// The items whose text matches `query`, best match first.
///
/// Each whitespace-separated word of `query` must fuzzy-match the item's
/// `item_to_string` text, ignoring case. Equal scores keep list order, and an
/// empty query keeps every item.
pub fn filter_items<Item: Clone>(
    query: &str,
    items: &[Item],
    item_to_string: &dyn Fn(Option<&Item>) -> String,
) -> Vec<Item> {
    if query.trim().is_empty() {
        return items.to_vec();
    }

    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(Config::DEFAULT);
    let mut buf = Vec::new();

    let mut scored: Vec<(u32, &Item)> = items
        .iter()
        .filter_map(|item| {
            let text = item_to_string(Some(item));
            let score = pattern.score(Utf32Str::new(&text, &mut buf), &mut matcher)?;
            Some((score, item))
        })
        .collect();

    scored.sort_by_key(|&(score, _)| Reverse(score));

    scored.into_iter().map(|(_, item)| item.clone()).collect()
}
