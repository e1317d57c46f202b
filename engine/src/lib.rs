pub mod app;
pub mod font;
pub mod graphics;
pub mod surface;
pub mod ui;
