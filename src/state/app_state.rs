use std::path::PathBuf;
use facets_core::*;

/// Session state: the loaded landscape, derived filters and the user's selection
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently loaded landscape
    pub data: Option<LandscapeData>,
    /// Path to current data file
    pub current_file: Option<PathBuf>,
    /// Group definitions of the loaded landscape
    groups: GroupIndex,
    /// Filter sections derived on load, per group
    filters_per_group: FiltersPerGroup,
    /// Currently selected group
    selected_group: Option<String>,
    /// Active filters for the selected group
    active_filters: ActiveFilters,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a landscape file
    pub fn load_from_file(&mut self, path: PathBuf) -> facets_core::Result<()> {
        let data = load_landscape(&path)?;
        self.set_data(data);
        self.current_file = Some(path);
        Ok(())
    }

    /// Replace the landscape, recomputing derived filters and resetting the selection
    pub fn set_data(&mut self, data: LandscapeData) {
        self.groups = GroupIndex::new(&data.groups);

        let grouped = group_items(&data.items, &self.groups.group_names(), &self.groups);
        self.filters_per_group = FacetDeriver::new(&self.groups).derive_filters_per_group(&grouped);

        self.selected_group = self.groups.group_names().into_iter().next();
        self.active_filters.clear();
        self.data = Some(data);
    }

    /// Group names in definition order
    pub fn group_names(&self) -> Vec<String> {
        if self.data.is_none() {
            return Vec::new();
        }
        self.groups.group_names()
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.data.is_some() && self.groups.contains_group(group)
    }

    pub fn selected_group(&self) -> Option<&str> {
        self.selected_group.as_deref()
    }

    /// Switch group. Active filters are cleared when the group changes.
    pub fn select_group(&mut self, group: &str) -> bool {
        if !self.has_group(group) {
            return false;
        }
        if self.selected_group.as_deref() != Some(group) {
            self.selected_group = Some(group.to_string());
            self.active_filters.clear();
        }
        true
    }

    /// Filter sections available in the selected group
    pub fn filter_sections(&self) -> &[FilterSection] {
        self.selected_group
            .as_ref()
            .and_then(|group| self.filters_per_group.get(group))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn filters_per_group(&self) -> &FiltersPerGroup {
        &self.filters_per_group
    }

    pub fn active_filters(&self) -> &ActiveFilters {
        &self.active_filters
    }

    pub fn set_active_filters(&mut self, filters: ActiveFilters) {
        self.active_filters = filters;
    }

    /// Toggle a filter value, returning whether it is now selected
    #[allow(dead_code)]
    pub fn toggle_filter(&mut self, category: FilterCategory, value: &str) -> bool {
        self.active_filters.toggle(category, value)
    }

    /// Items shown in `group`
    pub fn items_in_group(&self, group: &str) -> Vec<&Item> {
        let Some(data) = &self.data else {
            return Vec::new();
        };
        group_items(&data.items, &[group.to_string()], &self.groups)
            .remove(group)
            .unwrap_or_default()
    }

    /// Items of the selected group
    pub fn group_items(&self) -> Vec<&Item> {
        match &self.selected_group {
            Some(group) => self.items_in_group(group),
            None => Vec::new(),
        }
    }

    /// Items of the selected group that pass the active filters
    pub fn visible_items(&self) -> Vec<&Item> {
        let Some(data) = &self.data else {
            return Vec::new();
        };
        FacetApplier::new(&data.foundation).filter_refs(&self.group_items(), &self.active_filters)
    }
}
