// Public modules
pub mod deriving;
pub mod error;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod labels;
pub mod models;
pub mod schema_validation;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use deriving::{FacetDeriver, SPECIFICATION};
pub use error::{FacetsError, Result};
pub use filtering::{has_filters, parse_facet_filters, FacetApplier};
pub use grouping::{group_items, GroupClassifier, GroupIndex, DEFAULT_GROUP};
pub use io::{load_landscape, parse_landscape, save_landscape};
pub use labels::{
    capitalize_first_letter, format_profit_label, format_tag_name, non_foundation_value,
};
pub use models::{
    ActiveFilters, AdditionalCategory, FilterCategory, FilterOption, FilterSection, FiltersPerGroup,
    GithubData, Group, Item, LandscapeData, Location, OrganizationData, Repository, Summary,
};
pub use schema_validation::{landscape_schema, validate_against_schema, validate_landscape_document};
pub use sorting::{normalize_for_sorting, sort_items_by_name, strip_leading_articles};
pub use validation::validate_landscape;
