pub mod file_ops;
pub mod validation;

pub use file_ops::load_file;
pub use validation::{select_requested_group, unavailable_filter_values};
