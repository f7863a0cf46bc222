use std::fmt;
use std::sync::Arc;

use rpl_types::Named;

/// Ordered collection of uniquely named items.
///
/// Lookups are linear scans. Collections here hold a handful of pantry
/// entries or recipes, so there is no index to keep in sync.
#[derive(Clone, PartialEq, Eq)]
pub struct Store<T> {
    items: Vec<Arc<T>>,
}

impl<T> Store<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Every item, in insertion order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator {
        self.items.iter().map(|item| &**item)
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `self` and `other` hold the very same item
    /// allocation under `name`. Used to observe structural sharing between
    /// snapshots.
    #[doc(hidden)]
    pub fn shares_item(&self, other: &Self, name: &str) -> bool
    where
        T: Named,
    {
        match (self.position(name), other.position(name)) {
            (Some(a), Some(b)) => Arc::ptr_eq(&self.items[a], &other.items[b]),
            _ => false,
        }
    }

    fn position(&self, name: &str) -> Option<usize>
    where
        T: Named,
    {
        self.items.iter().position(|item| item.name() == name)
    }
}

impl<T: Named> Store<T> {
    /// Build a store from `items`, keeping the first item for each name.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut store = Self::new();
        for item in items {
            let name = item.name().to_string();
            if !store.add(item) {
                tracing::warn!(name = %name, "dropping duplicate seed item");
            }
        }
        store
    }

    /// Returns `true` if an item named `name` is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Append `item` unless an item with the same name already exists.
    ///
    /// Returns `false`, leaving the store untouched, on a duplicate name.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(item.name()) {
            tracing::warn!(name = item.name(), "rejecting duplicate name");
            return false;
        }
        tracing::debug!(name = item.name(), "adding item");
        self.items.push(Arc::new(item));
        true
    }

    /// Remove the item whose name matches `item`'s.
    pub fn remove(&mut self, item: &T) -> bool {
        self.remove_by_name(item.name())
    }

    /// Remove the first item named `name`.
    ///
    /// Returns `true` if an item was removed, `false` if the name was absent.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.items.remove(idx);
                tracing::debug!(name, "removed item");
                true
            }
            None => {
                tracing::debug!(name, "remove of absent name ignored");
                false
            }
        }
    }

    /// The item named `name`, if any.
    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        self.position(name).map(|idx| &*self.items[idx])
    }
}

impl<T: Named + Clone> Store<T> {
    /// Mutable access to the item named `name`.
    ///
    /// If the item is shared with another snapshot it is copied first, so
    /// the other snapshot never observes the edit.
    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut T> {
        let idx = self.position(name)?;
        Some(Arc::make_mut(&mut self.items[idx]))
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Named> FromIterator<T> for Store<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.all()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rpl_types::{Ingredient, Recipe, RecipeIngredient};

    fn names<T: Named>(store: &Store<T>) -> Vec<String> {
        store.all().map(|item| item.name().to_string()).collect()
    }

    // -----------------------------------------------------------------------
    // Core CRUD
    // -----------------------------------------------------------------------

    #[test]
    fn add_distinct_names_keeps_order() {
        let mut store = Store::new();
        assert!(store.add(Ingredient::new("Rice")));
        assert!(store.add(Ingredient::new("Beans")));
        assert_eq!(names(&store), vec!["Rice", "Beans"]);
    }

    #[test]
    fn add_duplicate_is_rejected() {
        let mut store = Store::new();
        assert!(store.add(Ingredient::new("Rice").with_count(1)));
        let before = store.clone();

        assert!(!store.add(Ingredient::new("Rice").with_count(9)));
        assert_eq!(store, before);
        assert_eq!(store.get_by_name("Rice").unwrap().count, 1);
    }

    #[test]
    fn remove_present_item() {
        let mut store = Store::new();
        store.add(Ingredient::new("Rice"));
        store.add(Ingredient::new("Beans"));

        assert!(store.remove(&Ingredient::new("Rice")));
        assert!(store.get_by_name("Rice").is_none());
        assert_eq!(names(&store), vec!["Beans"]);
    }

    #[test]
    fn remove_absent_name_is_noop() {
        let mut store = Store::new();
        store.add(Ingredient::new("Rice"));
        let before = store.clone();

        assert!(!store.remove_by_name("Saffron"));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_matches_by_name_only() {
        let mut store = Store::new();
        store.add(Recipe::with_ingredients(
            "Soup",
            vec![RecipeIngredient::new("Tomato", 2)],
        ));
        assert!(store.remove(&Recipe::new("Soup")));
        assert!(store.is_empty());
    }

    #[test]
    fn get_by_name_missing_is_none() {
        let store: Store<Ingredient> = Store::new();
        assert!(store.get_by_name("Anything").is_none());
    }

    #[test]
    fn edit_through_get_by_name_mut() {
        let mut store = Store::new();
        store.add(Ingredient::new("Rice"));
        store.get_by_name_mut("Rice").unwrap().count = 4;
        assert_eq!(store.get_by_name("Rice").unwrap().count, 4);
        assert!(store.get_by_name_mut("Barley").is_none());
    }

    #[test]
    fn from_items_keeps_first_duplicate() {
        let store = Store::from_items([
            Ingredient::new("Salt").with_count(1),
            Ingredient::new("Pepper"),
            Ingredient::new("Salt").with_count(7),
        ]);
        assert_eq!(names(&store), vec!["Salt", "Pepper"]);
        assert_eq!(store.get_by_name("Salt").unwrap().count, 1);
    }

    // -----------------------------------------------------------------------
    // Structural sharing
    // -----------------------------------------------------------------------

    #[test]
    fn clone_shares_items() {
        let mut store = Store::new();
        store.add(Ingredient::new("Rice"));
        let copy = store.clone();
        assert!(store.shares_item(&copy, "Rice"));
    }

    #[test]
    fn edit_copies_only_touched_item() {
        let mut original = Store::new();
        original.add(Ingredient::new("Rice"));
        original.add(Ingredient::new("Beans"));

        let mut draft = original.clone();
        draft.get_by_name_mut("Rice").unwrap().count = 3;

        assert_eq!(original.get_by_name("Rice").unwrap().count, 0);
        assert_eq!(draft.get_by_name("Rice").unwrap().count, 3);
        assert!(!draft.shares_item(&original, "Rice"));
        assert!(draft.shares_item(&original, "Beans"));
    }

    // -----------------------------------------------------------------------
    // Invariants
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn names_stay_unique(raw in proptest::collection::vec("[a-d]{1,2}", 0..30)) {
            let mut store = Store::new();
            for name in &raw {
                store.add(Ingredient::new(name.clone()));
            }
            let mut seen = names(&store);
            let len = seen.len();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), len);
        }

        #[test]
        fn add_then_remove_restores(
            raw in proptest::collection::vec("[a-z]{1,6}", 0..10),
            extra in "[A-Z]{1,6}",
        ) {
            let mut store: Store<Ingredient> = raw.into_iter().map(Ingredient::new).collect();
            let before = store.clone();
            prop_assert!(store.add(Ingredient::new(extra.clone())));
            prop_assert_eq!(store.all().last().map(|i| i.name()), Some(extra.as_str()));
            prop_assert!(store.remove_by_name(&extra));
            prop_assert_eq!(store, before);
        }
    }
}
