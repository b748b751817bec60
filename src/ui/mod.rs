pub mod formatting;

pub use formatting::{format_active_filters, format_filter_sections, format_groups, format_item};
