use colored::Colorize;
use facets_core::{format_tag_name, ActiveFilters, FilterSection, Item};

/// Format group names with their item counts, marking the selected group
pub fn format_groups(groups: &[(String, usize)], selected: Option<&str>) -> String {
    groups
        .iter()
        .map(|(name, count)| {
            let marker = if Some(name.as_str()) == selected { "*" } else { " " };
            format!("{} {} ({} items)", marker, name.bold(), count)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format derived filter sections, one block per section
pub fn format_filter_sections(sections: &[FilterSection]) -> String {
    if sections.is_empty() {
        return "_No filters available._".italic().to_string();
    }

    sections
        .iter()
        .map(|section| {
            let mut lines = vec![format!(
                "### {} {}",
                section.title.bold(),
                format!("({})", section.category).dimmed()
            )];
            for option in &section.options {
                if option.name == option.value {
                    lines.push(format!("- {}", option.name));
                } else {
                    let value = format!("[{}]", option.value);
                    lines.push(format!("- {} {}", option.name, value.dimmed()));
                }
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format the active filters, values of one category joined with OR
pub fn format_active_filters(active: &ActiveFilters) -> String {
    active
        .iter()
        .map(|(category, values)| {
            let values: Vec<&str> = values.iter().map(String::as_str).collect();
            format!("- {}: {}", category.title().bold(), values.join(" OR "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one item as a short summary line plus its classification details
pub fn format_item(item: &Item) -> String {
    let mut details = Vec::new();

    if let Some(category) = &item.category {
        match &item.subcategory {
            Some(sub) => details.push(format!("{} / {}", category, sub)),
            None => details.push(category.clone()),
        }
    }
    if let Some(maturity) = &item.maturity {
        details.push(maturity.green().to_string());
    }
    if let Some(tag) = &item.tag {
        details.push(format!("TAG {}", format_tag_name(tag)));
    }
    if let Some(org) = item.organization_data.as_ref().and_then(|o| o.name.as_ref()) {
        details.push(org.clone());
    }

    if details.is_empty() {
        format!("* {}", item.name.bold())
    } else {
        format!("* {} {}", item.name.bold(), format!("({})", details.join(", ")).dimmed())
    }
}
