//! In-memory text search for list screens.

/// An item that list screens can filter by free text.
pub trait Searchable {
    /// Text the search query is matched against.
    fn search_text(&self) -> String;

    /// Check whether this item matches an already-lowercased, trimmed needle.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.search_text().to_lowercase().contains(needle)
    }
}

/// Filter `items` by `query`.
///
/// Case-insensitive substring match on the trimmed query; a blank query keeps
/// every item. Order is preserved.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    items.iter().filter(|item| item.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str);

    impl Searchable for Item {
        fn search_text(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_blank_query_keeps_all() {
        let items = [Item("a"), Item("b")];
        assert_eq!(filter_items(&items, "   ").len(), 2);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let items = [Item("Sea View Towers"), Item("Palm Court"), Item("Seaside")];
        let hits: Vec<_> = filter_items(&items, " SEA ").iter().map(|i| i.0).collect();
        assert_eq!(hits, vec!["Sea View Towers", "Seaside"]);
    }
}
