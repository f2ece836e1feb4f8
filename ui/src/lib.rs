#![warn(clippy::all, rust_2018_idioms)]

//! egui front-end of griddle: a cars grid and an employees grid, edited inline.

pub mod app;
pub mod pages;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::GriddleApp;
