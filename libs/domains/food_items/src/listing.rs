//! Pure listing adapter: search and sort over an already-fetched snapshot.
//!
//! These functions never touch storage; the handler fetches the visible
//! items once and applies them in memory, so changing the search term or
//! sort order costs no extra query.

use crate::models::{FoodItem, SortOrder};

/// Keep items matching `term` case-insensitively against the name,
/// keywords, placement, and category names.
pub fn search(items: Vec<FoodItem>, term: &str) -> Vec<FoodItem> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.placement.to_lowercase().contains(&needle)
                || item
                    .keywords
                    .iter()
                    .any(|k| k.to_lowercase().contains(&needle))
                || item
                    .categories
                    .iter()
                    .any(|c| c.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Reorder items by the requested order. Sorting is stable: ties keep the
/// sequence they arrived in.
pub fn sort(mut items: Vec<FoodItem>, order: SortOrder) -> Vec<FoodItem> {
    match order {
        SortOrder::NameAsc => items.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::QuantityDesc => items.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
        SortOrder::QuantityAsc => items.sort_by(|a, b| a.quantity.cmp(&b.quantity)),
        SortOrder::ExpirationAsc => items.sort_by(|a, b| a.expiration_date.cmp(&b.expiration_date)),
        SortOrder::ExpirationDesc => {
            items.sort_by(|a, b| b.expiration_date.cmp(&a.expiration_date))
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateFoodItem;

    fn item(name: &str, quantity: i32, expiration: &str) -> FoodItem {
        FoodItem::new(CreateFoodItem {
            name: name.to_string(),
            expiration_date: expiration.to_string(),
            quantity,
            image_url: None,
            keywords: vec![],
            placement: "pantry".to_string(),
            category_names: vec![],
        })
        .unwrap()
    }

    fn names(items: &[FoodItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let items = vec![item("Oat Milk", 1, "2026-09-01"), item("Rice", 1, "2027-01-01")];
        let found = search(items, "milk");
        assert_eq!(names(&found), vec!["Oat Milk"]);
    }

    #[test]
    fn test_search_matches_keywords_placement_and_categories() {
        let mut with_keyword = item("Yogurt", 1, "2026-09-01");
        with_keyword.keywords = vec!["Dairy".to_string()];

        let mut with_category = item("Cereal", 1, "2027-01-01");
        with_category.categories = vec!["Breakfast".to_string()];

        let mut with_placement = item("Beans", 1, "2027-06-01");
        with_placement.placement = "cellar".to_string();

        let items = vec![with_keyword, with_category, with_placement];

        assert_eq!(names(&search(items.clone(), "dairy")), vec!["Yogurt"]);
        assert_eq!(names(&search(items.clone(), "breakfast")), vec!["Cereal"]);
        assert_eq!(names(&search(items, "cellar")), vec!["Beans"]);
    }

    #[test]
    fn test_search_empty_term_keeps_everything() {
        let items = vec![item("A", 1, "2026-09-01"), item("B", 1, "2026-09-02")];
        assert_eq!(search(items, "").len(), 2);
    }

    #[test]
    fn test_sort_by_name() {
        let items = vec![
            item("Rice", 1, "2027-01-01"),
            item("Apples", 1, "2026-09-01"),
        ];
        let sorted = sort(items, SortOrder::NameAsc);
        assert_eq!(names(&sorted), vec!["Apples", "Rice"]);
    }

    #[test]
    fn test_sort_by_quantity_both_directions() {
        let items = vec![
            item("A", 2, "2026-09-01"),
            item("B", 5, "2026-09-01"),
            item("C", 1, "2026-09-01"),
        ];
        assert_eq!(
            names(&sort(items.clone(), SortOrder::QuantityDesc)),
            vec!["B", "A", "C"]
        );
        assert_eq!(
            names(&sort(items, SortOrder::QuantityAsc)),
            vec!["C", "A", "B"]
        );
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let items = vec![
            item("First", 3, "2026-09-01"),
            item("Second", 3, "2026-09-01"),
            item("Third", 3, "2026-09-01"),
        ];
        let sorted = sort(items, SortOrder::QuantityAsc);
        assert_eq!(names(&sorted), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_sort_by_expiration() {
        let items = vec![
            item("Later", 1, "2027-01-01"),
            item("Sooner", 1, "2026-09-01"),
        ];
        assert_eq!(
            names(&sort(items.clone(), SortOrder::ExpirationAsc)),
            vec!["Sooner", "Later"]
        );
        assert_eq!(
            names(&sort(items, SortOrder::ExpirationDesc)),
            vec!["Later", "Sooner"]
        );
    }
}
