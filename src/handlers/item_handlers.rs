use facets_core::sort_items_by_name;

use crate::operations::select_requested_group;
use crate::state::AppState;
use crate::ui::{format_active_filters, format_item};

use super::filter_handlers::apply_filter_args;

/// Options of the `items` command
#[derive(Debug, Default)]
pub struct ItemQuery {
    pub group: Option<String>,
    pub filters: Vec<String>,
    pub sort_by_name: bool,
    pub json: bool,
}

/// Print the items of a group that pass the requested filters
pub fn handle_items(state: &mut AppState, query: &ItemQuery) -> anyhow::Result<()> {
    select_requested_group(state, query.group.as_deref())?;
    apply_filter_args(state, &query.filters)?;

    let mut items = state.visible_items();
    if query.sort_by_name {
        sort_items_by_name(&mut items);
    }

    if query.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("# {}\n", state.selected_group().unwrap_or("Items"));

    if !state.active_filters().is_empty() {
        println!("## Active Filters\n");
        println!("{}\n", format_active_filters(state.active_filters()));
    }

    println!("**Matching Items:** {}\n", items.len());

    if items.is_empty() {
        println!("_No items match the specified filters._");
    } else {
        for item in &items {
            println!("{}", format_item(item));
        }
    }

    Ok(())
}
