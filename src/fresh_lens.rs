pub mod core;
pub mod main;
pub mod render;
pub mod run_effect;
pub mod upload;
pub mod view_model;
