use anyhow::Context;
use facets_core::parse_facet_filters;

use crate::operations::{select_requested_group, unavailable_filter_values};
use crate::state::AppState;
use crate::ui::format_filter_sections;

/// Print the filter sections derived for one group, or for every group
pub fn handle_filters(state: &mut AppState, group: Option<&str>, json: bool) -> anyhow::Result<()> {
    if group.is_none() && json {
        println!("{}", serde_json::to_string_pretty(state.filters_per_group())?);
        return Ok(());
    }

    select_requested_group(state, group)?;

    let groups = match group {
        Some(group) => vec![group.to_string()],
        None => state.group_names(),
    };

    for name in groups {
        let sections = state
            .filters_per_group()
            .get(&name)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        if json {
            println!("{}", serde_json::to_string_pretty(sections)?);
        } else {
            println!("## {}\n", name);
            println!("{}\n", format_filter_sections(sections));
        }
    }

    Ok(())
}

/// Parse `category=value` strings into the session's active filters.
/// Values that the selected group never offers are reported but kept.
pub fn apply_filter_args(state: &mut AppState, filter_args: &[String]) -> anyhow::Result<()> {
    let active = parse_facet_filters(filter_args).context("Invalid --filter argument")?;

    for missing in unavailable_filter_values(state.filter_sections(), &active) {
        log::warn!("filter {} matches no item in group {:?}", missing, state.selected_group());
    }

    state.set_active_filters(active);
    Ok(())
}
