pub mod csv_loader;
pub mod export;
pub mod logging;
pub mod render;
pub mod settings;
pub mod state;
