pub mod config;
pub mod item;
pub mod logging;
pub mod store;
pub mod ui;
