pub mod axis_filter;
pub mod types;

pub use axis_filter::{DirectionalPanRecognizer, PanAxis};
pub use types::{PanEvent, PanPhase};
