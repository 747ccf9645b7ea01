pub mod constants;
pub mod controller;
pub mod drivers;
pub mod event_loop;
pub mod geometry;
pub mod overlay;
pub mod store;
pub mod tracing_sub;
pub mod ui;

pub use controller::{ConfigError, ControllerConfig, DragMode, DragSession, GeometryController};
pub use geometry::{PaneRect, Point};
pub use overlay::OverlayPane;
pub use store::{GeometryStore, StoreError};
