use crate::state::AppState;
use crate::ui::format_groups;

/// Print the landscape's groups with the number of items in each
pub fn handle_groups(state: &AppState, json: bool) -> anyhow::Result<()> {
    let counts: Vec<(String, usize)> = state
        .group_names()
        .into_iter()
        .map(|group| {
            let count = state.items_in_group(&group).len();
            (group, count)
        })
        .collect();

    if json {
        let value: serde_json::Map<String, serde_json::Value> = counts
            .into_iter()
            .map(|(name, count)| (name, count.into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("# Groups\n");
        println!("{}", format_groups(&counts, state.selected_group()));
    }

    Ok(())
}
