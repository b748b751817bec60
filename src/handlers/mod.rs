pub mod filter_handlers;
pub mod group_handlers;
pub mod item_handlers;

pub use filter_handlers::handle_filters;
pub use group_handlers::handle_groups;
pub use item_handlers::{handle_items, ItemQuery};
