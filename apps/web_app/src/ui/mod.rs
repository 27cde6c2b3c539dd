//! UI layer: eframe app shell, logo texture, and the painter for the component's view tree.

pub mod app;
pub mod logo;
pub mod paint;

pub use app::{StartupConfig, WebApp};
