use crate::models::Item;
use regex::Regex;
use std::borrow::Borrow;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static LEADING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|i|gli|un|une|een)\s+")
        .expect("leading article pattern is valid")
});

/// Sort items by name using library-style normalization, original name breaking ties
pub fn sort_items_by_name<T: Borrow<Item>>(items: &mut [T]) {
    items.sort_by(|a, b| {
        let (a, b): (&Item, &Item) = (a.borrow(), b.borrow());
        normalize_for_sorting(&a.name)
            .cmp(&normalize_for_sorting(&b.name))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Normalize string for library science sorting
/// - Strip leading articles (a, an, the)
/// - Normalize unicode (NFD then lowercase)
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);
    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading articles following library science conventions
pub fn strip_leading_articles(s: &str) -> String {
    LEADING_ARTICLE.replace(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_strip_leading_articles() {
        assert_eq!(strip_leading_articles("The Update Framework"), "Update Framework");
        assert_eq!(strip_leading_articles("Anchore"), "Anchore");
    }

    #[test]
    fn test_normalize_for_sorting() {
        assert_eq!(normalize_for_sorting("The   Big  Thing "), "big thing");
    }

    #[test]
    fn test_sort_items_by_name() {
        let mut items = vec![item("Zot"), item("The Update Framework"), item("etcd"), item("Argo")];
        sort_items_by_name(&mut items);

        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Argo", "etcd", "The Update Framework", "Zot"]);
    }

    #[test]
    fn test_sort_item_refs() {
        let owned = vec![item("b"), item("a")];
        let mut refs: Vec<&Item> = owned.iter().collect();
        sort_items_by_name(&mut refs);

        assert_eq!(refs[0].name, "a");
    }
}
