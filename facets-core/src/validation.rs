use crate::models::{Group, Item, LandscapeData};
use std::collections::HashSet;

/// Validate a loaded landscape
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_landscape(data: &LandscapeData) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if data.foundation.trim().is_empty() {
        errors.push("Foundation name cannot be empty".to_string());
    }

    validate_groups(&data.groups, &mut errors);
    validate_items(&data.items, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_groups(groups: &[Group], errors: &mut Vec<String>) {
    let mut seen = HashSet::new();

    for (idx, group) in groups.iter().enumerate() {
        if group.name.trim().is_empty() {
            errors.push(format!("Group #{}: name cannot be empty", idx + 1));
            continue;
        }
        if !seen.insert(group.name.as_str()) {
            errors.push(format!("Group '{}' is defined more than once", group.name));
        }
        if group.categories.is_empty() {
            errors.push(format!("Group '{}' must list at least one category", group.name));
        }
    }
}

pub fn validate_items(items: &[Item], errors: &mut Vec<String>) {
    let mut seen = HashSet::new();

    for (idx, item) in items.iter().enumerate() {
        let item_ref = format!("Item #{} ('{}')", idx + 1, item.name);

        if item.name.trim().is_empty() {
            errors.push(format!("{}: name cannot be empty", item_ref));
            continue;
        }

        if !seen.insert((item.name.as_str(), item.category.as_deref())) {
            errors.push(format!("{}: duplicate item in the same category", item_ref));
        }
    }
}
