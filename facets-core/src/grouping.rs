use crate::models::{Group, Item};
use std::collections::{BTreeMap, BTreeSet};

/// Name of the implicit group used when a landscape defines no groups
pub const DEFAULT_GROUP: &str = "default";

/// Decides whether a category is shown in a group
pub trait GroupClassifier {
    fn belongs_to_group(&self, category: &str, group: &str) -> bool;

    /// Whether an item is shown in `group`, by default through any of its categories
    fn contains_item(&self, item: &Item, group: &str) -> bool {
        item.all_categories()
            .any(|category| self.belongs_to_group(category, group))
    }
}

impl<F> GroupClassifier for F
where
    F: Fn(&str, &str) -> bool,
{
    fn belongs_to_group(&self, category: &str, group: &str) -> bool {
        self(category, group)
    }
}

/// Group definitions indexed by name.
///
/// Without any definitions every category belongs to [`DEFAULT_GROUP`].
#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    names: Vec<String>,
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl GroupIndex {
    pub fn new(groups: &[Group]) -> Self {
        let mut index = GroupIndex::default();

        for group in groups {
            if !index.categories.contains_key(&group.name) {
                index.names.push(group.name.clone());
            }
            index
                .categories
                .entry(group.name.clone())
                .or_default()
                .extend(group.categories.iter().cloned());
        }

        index
    }

    /// Group names in definition order
    pub fn group_names(&self) -> Vec<String> {
        if self.names.is_empty() {
            vec![DEFAULT_GROUP.to_string()]
        } else {
            self.names.clone()
        }
    }

    pub fn contains_group(&self, group: &str) -> bool {
        if self.names.is_empty() {
            group == DEFAULT_GROUP
        } else {
            self.categories.contains_key(group)
        }
    }
}

impl GroupClassifier for GroupIndex {
    fn belongs_to_group(&self, category: &str, group: &str) -> bool {
        if self.names.is_empty() {
            return group == DEFAULT_GROUP;
        }
        self.categories
            .get(group)
            .is_some_and(|categories| categories.contains(category))
    }

    fn contains_item(&self, item: &Item, group: &str) -> bool {
        if self.names.is_empty() {
            return group == DEFAULT_GROUP;
        }
        item.all_categories()
            .any(|category| self.belongs_to_group(category, group))
    }
}

/// Partition items by group.
/// An item lands in every group that shows its category or one of its additional categories;
/// without group definitions every item lands in [`DEFAULT_GROUP`].
pub fn group_items<'a, C>(
    items: &'a [Item],
    groups: &[String],
    classifier: &C,
) -> BTreeMap<String, Vec<&'a Item>>
where
    C: GroupClassifier + ?Sized,
{
    groups
        .iter()
        .map(|group| {
            let members = items
                .iter()
                .filter(|item| classifier.contains_item(item, group))
                .collect();
            (group.clone(), members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_groups() -> Vec<Group> {
        serde_json::from_value(json!([
            {"name": "projects", "categories": ["Runtime", "Orchestration"]},
            {"name": "members", "categories": ["Members"]}
        ]))
        .unwrap()
    }

    fn sample_items() -> Vec<Item> {
        serde_json::from_value(json!([
            {"name": "containerd", "category": "Runtime"},
            {"name": "Acme", "category": "Members",
             "additional_categories": [{"category": "Orchestration"}]},
            {"name": "Orphan", "category": "Unlisted"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_group_index_membership() {
        let index = GroupIndex::new(&sample_groups());
        assert!(index.belongs_to_group("Runtime", "projects"));
        assert!(!index.belongs_to_group("Runtime", "members"));
        assert!(!index.belongs_to_group("Runtime", "unknown"));
        assert_eq!(index.group_names(), vec!["projects", "members"]);
    }

    #[test]
    fn test_empty_index_uses_default_group() {
        let index = GroupIndex::new(&[]);
        assert_eq!(index.group_names(), vec![DEFAULT_GROUP]);
        assert!(index.belongs_to_group("Anything", DEFAULT_GROUP));
        assert!(index.contains_group(DEFAULT_GROUP));
        assert!(!index.contains_group("projects"));
    }

    #[test]
    fn test_group_items_uses_additional_categories() {
        let items = sample_items();
        let index = GroupIndex::new(&sample_groups());
        let grouped = group_items(&items, &index.group_names(), &index);

        let projects: Vec<_> = grouped["projects"].iter().map(|i| i.name.as_str()).collect();
        let members: Vec<_> = grouped["members"].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(projects, vec!["containerd", "Acme"]);
        assert_eq!(members, vec!["Acme"]);
    }

    #[test]
    fn test_closure_classifier() {
        let items = sample_items();
        let classifier = |category: &str, _group: &str| category.starts_with('O');
        let grouped = group_items(&items, &["all".to_string()], &classifier);

        let members: Vec<_> = grouped["all"].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(members, vec!["Acme"]);
    }

    #[test]
    fn test_default_group_keeps_uncategorized_items() {
        let items: Vec<Item> = serde_json::from_value(json!([
            {"name": "has-cat", "category": "Runtime"},
            {"name": "no-cat", "maturity": "sandbox"}
        ]))
        .unwrap();
        let index = GroupIndex::new(&[]);
        let grouped = group_items(&items, &index.group_names(), &index);

        let members: Vec<_> = grouped[DEFAULT_GROUP].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(members, vec!["has-cat", "no-cat"]);
    }

    #[test]
    fn test_defined_groups_skip_uncategorized_items() {
        let index = GroupIndex::new(&sample_groups());
        let item = Item {
            name: "no-cat".to_string(),
            ..Default::default()
        };

        assert!(!index.contains_item(&item, "projects"));
        assert!(!index.contains_item(&item, DEFAULT_GROUP));
    }
}
