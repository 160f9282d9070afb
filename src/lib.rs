pub mod classifier;
pub mod config;
pub mod email;
pub mod error;
pub mod event;
pub mod input;
pub mod market;
pub mod model;
pub mod notifier;
pub mod store;
pub mod ui;
