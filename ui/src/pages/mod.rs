//! One page per grid resource, picked by [`Route`](griddle_business::Route).

mod cars_page;
mod employees_page;

pub use cars_page::cars_page;
pub use employees_page::employees_page;
