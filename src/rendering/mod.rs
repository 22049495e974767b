pub mod animation;
pub mod export;
pub mod painter;
pub mod scene;

// Re-export specific functions to keep the API clean for the rest of the app
pub use animation::ViewCycle;
pub use export::{export_rotation, export_to_path, export_view, DEFAULT_CANVAS};
pub use scene::{calculate_scene, fit_zoom, Frame};
