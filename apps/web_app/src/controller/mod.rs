//! Controller layer: backend events, the state reducer, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
