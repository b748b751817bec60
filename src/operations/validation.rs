use anyhow::bail;
use facets_core::{ActiveFilters, FilterSection};

use crate::state::AppState;

/// Select the requested group, or keep the default one when none is requested
pub fn select_requested_group(state: &mut AppState, requested: Option<&str>) -> anyhow::Result<()> {
    let Some(group) = requested else {
        return Ok(());
    };

    if !state.select_group(group) {
        bail!(
            "Unknown group '{}'. Available groups: {}",
            group,
            state.group_names().join(", ")
        );
    }

    Ok(())
}

/// Selected values that no item of the group offers
pub fn unavailable_filter_values(
    sections: &[FilterSection],
    active: &ActiveFilters,
) -> Vec<String> {
    let mut unavailable = Vec::new();

    for (category, values) in active.iter() {
        let section = sections.iter().find(|s| s.category == category);
        for value in values {
            let offered = section.is_some_and(|s| s.options.iter().any(|o| &o.value == value));
            if !offered {
                unavailable.push(format!("{}={}", category, value));
            }
        }
    }

    unavailable
}
