//! UI widgets

mod map;
mod status;

pub use map::MapWidget;
pub use status::{HINT, StatusWidget};
