mod details;
mod grid;
mod nav;
mod status;
mod toasts;

pub use details::row_details;
pub use grid::{GridAction, apply_actions, data_grid};
pub use nav::nav_bar;
pub use status::sync_status;
pub use toasts::toasts;
