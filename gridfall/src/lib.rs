pub mod app;
pub mod board;
pub mod clock;
pub mod driver;
pub mod input;
pub mod render;
pub mod serde_duration;
pub mod settings;
pub mod view;
