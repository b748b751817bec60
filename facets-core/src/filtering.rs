use crate::deriving::SPECIFICATION;
use crate::error::{FacetsError, Result};
use crate::labels::non_foundation_value;
use crate::models::{ActiveFilters, FilterCategory, Item};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Parse filter strings in the format "category=value" into active filters
/// Multiple values for the same category are combined
pub fn parse_facet_filters(filter_strings: &[String]) -> Result<ActiveFilters> {
    let mut filters = ActiveFilters::new();

    for filter_str in filter_strings {
        let (key, value) = filter_str
            .split_once('=')
            .ok_or_else(|| FacetsError::MalformedFilter(filter_str.clone()))?;

        let category: FilterCategory = key.trim().parse()?;
        let value = value.trim();
        if value.is_empty() {
            return Err(FacetsError::MalformedFilter(filter_str.clone()));
        }

        filters.insert(category, value);
    }

    Ok(filters)
}

/// Applies active filters to item collections.
/// AND logic between categories, OR logic within the values of one category.
#[derive(Debug, Clone)]
pub struct FacetApplier {
    non_foundation: String,
}

impl FacetApplier {
    /// `foundation` is the landscape's foundation name, e.g. "CNCF"
    pub fn new(foundation: &str) -> Self {
        Self {
            non_foundation: non_foundation_value(foundation),
        }
    }

    /// Maturity value that selects items without a maturity
    pub fn non_foundation_value(&self) -> &str {
        &self.non_foundation
    }

    /// Apply filters to a list of items, returning only those that match.
    /// Without active filters the input is returned as is.
    pub fn apply_filters<'a>(&self, items: &'a [Item], active: &ActiveFilters) -> Cow<'a, [Item]> {
        if !has_filters(active) {
            return Cow::Borrowed(items);
        }

        Cow::Owned(
            items
                .iter()
                .filter(|item| self.matches_filters(item, active))
                .cloned()
                .collect(),
        )
    }

    /// Same as [`FacetApplier::apply_filters`] over borrowed items, e.g. one group's members
    pub fn filter_refs<'a>(&self, items: &[&'a Item], active: &ActiveFilters) -> Vec<&'a Item> {
        items
            .iter()
            .copied()
            .filter(|item| self.matches_filters(item, active))
            .collect()
    }

    /// Check if an item satisfies every active category
    pub fn matches_filters(&self, item: &Item, active: &ActiveFilters) -> bool {
        active
            .iter()
            .all(|(category, selected)| self.matches_category(item, category, selected))
    }

    fn matches_category(
        &self,
        item: &Item,
        category: FilterCategory,
        selected: &BTreeSet<String>,
    ) -> bool {
        let org = item.organization_data.as_ref();

        match category {
            FilterCategory::Extra => {
                !selected.contains(SPECIFICATION) || item.specification == Some(true)
            }
            FilterCategory::Organization => {
                is_selected(selected, org.and_then(|o| o.name.as_deref()))
            }
            FilterCategory::Country => {
                is_selected(selected, org.and_then(|o| o.country.as_deref()))
                    || item.location_countries().any(|c| selected.contains(c))
            }
            FilterCategory::Industry => match org.and_then(|o| o.categories.as_ref()) {
                Some(categories) => categories.iter().any(|c| selected.contains(c)),
                None => false,
            },
            FilterCategory::License => item.licenses().any(|l| selected.contains(l)),
            FilterCategory::OrgType => {
                is_selected(selected, org.and_then(|o| o.company_type.as_deref()))
            }
            FilterCategory::Tags => match item.summary.as_ref().and_then(|s| s.tags.as_ref()) {
                Some(tags) => tags.iter().any(|t| selected.contains(t)),
                None => false,
            },
            FilterCategory::Tag => is_selected(selected, item.tag.as_deref()),
            FilterCategory::Maturity => match &item.maturity {
                Some(maturity) => selected.contains(maturity),
                None => selected.contains(&self.non_foundation),
            },
            FilterCategory::Category => item.all_categories().any(|c| selected.contains(c)),
        }
    }
}

fn is_selected(selected: &BTreeSet<String>, value: Option<&str>) -> bool {
    value.is_some_and(|v| selected.contains(v))
}

/// Check if any filter is active
pub fn has_filters(active: &ActiveFilters) -> bool {
    !active.is_empty()
}
