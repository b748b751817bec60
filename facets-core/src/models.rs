use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::FacetsError;

/// A landscape dataset as loaded from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandscapeData {
    /// Foundation name (e.g. "CNCF"), used to build the non-foundation maturity value
    pub foundation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A top-level partition of the landscape, defined by the categories it shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_categories: Option<Vec<AdditionalCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<Repository>>,
    #[serde(
        default,
        alias = "crunchbase_data",
        skip_serializing_if = "Option::is_none"
    )]
    pub organization_data: Option<OrganizationData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalCategory {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_data: Option<GithubData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// External organization profile attached to an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Item {
    /// License of every repository that declares one
    pub fn licenses(&self) -> impl Iterator<Item = &str> {
        self.repositories
            .iter()
            .flatten()
            .filter_map(|r| r.github_data.as_ref()?.license.as_deref())
    }

    /// Countries listed in the item's own locations
    pub fn location_countries(&self) -> impl Iterator<Item = &str> {
        self.locations
            .iter()
            .flatten()
            .filter_map(|l| l.country.as_deref())
    }

    /// Primary category followed by the additional ones
    pub fn all_categories(&self) -> impl Iterator<Item = &str> {
        self.category.as_deref().into_iter().chain(
            self.additional_categories
                .iter()
                .flatten()
                .map(|ac| ac.category.as_str()),
        )
    }
}

/// Filterable attribute categories.
///
/// The declaration order is the order in which sections are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterCategory {
    Maturity,
    Tag,
    Tags,
    Organization,
    Category,
    License,
    Country,
    Industry,
    OrgType,
    Extra,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 10] = [
        FilterCategory::Maturity,
        FilterCategory::Tag,
        FilterCategory::Tags,
        FilterCategory::Organization,
        FilterCategory::Category,
        FilterCategory::License,
        FilterCategory::Country,
        FilterCategory::Industry,
        FilterCategory::OrgType,
        FilterCategory::Extra,
    ];

    /// Key used on the command line and in serialized filters
    pub fn key(self) -> &'static str {
        match self {
            FilterCategory::Maturity => "maturity",
            FilterCategory::Tag => "tag",
            FilterCategory::Tags => "tags",
            FilterCategory::Organization => "organization",
            FilterCategory::Category => "category",
            FilterCategory::License => "license",
            FilterCategory::Country => "country",
            FilterCategory::Industry => "industry",
            FilterCategory::OrgType => "org-type",
            FilterCategory::Extra => "extra",
        }
    }

    /// Section title shown to users
    pub fn title(self) -> &'static str {
        match self {
            FilterCategory::Maturity => "Project",
            FilterCategory::Tag => "TAG",
            FilterCategory::Tags => "Tags",
            FilterCategory::Organization => "Organization",
            FilterCategory::Category => "Category",
            FilterCategory::License => "License",
            FilterCategory::Country => "Country",
            FilterCategory::Industry => "Industry",
            FilterCategory::OrgType => "Organization type",
            FilterCategory::Extra => "Extra",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FilterCategory {
    type Err = FacetsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterCategory::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| FacetsError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Raw token matched against item data
    pub value: String,
    /// Display label
    pub name: String,
}

/// One facet category and its available options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSection {
    #[serde(rename = "value")]
    pub category: FilterCategory,
    pub title: String,
    pub options: Vec<FilterOption>,
}

impl FilterSection {
    pub fn option_values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

/// Derived filter sections keyed by group name
pub type FiltersPerGroup = BTreeMap<String, Vec<FilterSection>>;

/// The user's current selection: one set of chosen raw values per category.
///
/// A category never maps to an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveFilters {
    selected: BTreeMap<FilterCategory, BTreeSet<String>>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn insert(&mut self, category: FilterCategory, value: impl Into<String>) {
        self.selected.entry(category).or_default().insert(value.into());
    }

    /// Remove a value, dropping the category once nothing is selected in it
    pub fn remove(&mut self, category: FilterCategory, value: &str) -> bool {
        let Some(values) = self.selected.get_mut(&category) else {
            return false;
        };
        let removed = values.remove(value);
        if values.is_empty() {
            self.selected.remove(&category);
        }
        removed
    }

    /// Add the value if absent, remove it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, category: FilterCategory, value: &str) -> bool {
        if self.contains(category, value) {
            self.remove(category, value);
            false
        } else {
            self.insert(category, value);
            true
        }
    }

    pub fn contains(&self, category: FilterCategory, value: &str) -> bool {
        self.selected
            .get(&category)
            .is_some_and(|values| values.contains(value))
    }

    pub fn get(&self, category: FilterCategory) -> Option<&BTreeSet<String>> {
        self.selected.get(&category)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterCategory, &BTreeSet<String>)> {
        self.selected.iter().map(|(c, v)| (*c, v))
    }
}

impl<'de> Deserialize<'de> for ActiveFilters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let selected = BTreeMap::<FilterCategory, BTreeSet<String>>::deserialize(deserializer)?;
        Ok(selected
            .into_iter()
            .flat_map(|(category, values)| values.into_iter().map(move |v| (category, v)))
            .collect())
    }
}

impl<S: Into<String>> FromIterator<(FilterCategory, S)> for ActiveFilters {
    fn from_iter<T: IntoIterator<Item = (FilterCategory, S)>>(iter: T) -> Self {
        let mut filters = ActiveFilters::new();
        for (category, value) in iter {
            filters.insert(category, value);
        }
        filters
    }
}
