pub mod form;
pub mod health;
pub mod predict;

pub use predict::AppState;
