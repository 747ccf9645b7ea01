//! Shared crate-wide constants.

use std::time::Duration;

/// Width of the resize hotzone band, measured inward from each pane edge,
/// in logical units. Multiplied by the host's density factor once at
/// controller construction to get device units.
pub const HANDLE_SIZE: f32 = 30.0;

/// Smallest width/height the drag controller will accept. A resize that
/// would shrink a dimension to this value or below is rejected for that
/// axis (strict `>` comparison).
pub const MIN_PANE_SIZE: i32 = 50;

/// Geometry used when no persisted state exists for a profile.
pub const DEFAULT_PANE_WIDTH: i32 = 300;
pub const DEFAULT_PANE_HEIGHT: i32 = 300;
pub const DEFAULT_PANE_X: i32 = 0;
pub const DEFAULT_PANE_Y: i32 = 0;

/// Two presses within this window (and within [`DOUBLE_TAP_SLOP`]) count
/// as a double tap and dismiss the overlay.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(500);

/// Maximum distance (device units) between the two presses of a double tap.
pub const DOUBLE_TAP_SLOP: f32 = 3.0;

/// Density factor for the terminal host. Terminal cells are coarse, so the
/// 30-unit logical hotzone resolves to 3 cells.
pub const TERMINAL_DENSITY: f32 = 0.1;

/// Minimum pane dimension for the terminal host, in cells. The default
/// [`MIN_PANE_SIZE`] is sized for pixel displays and would exceed many
/// terminal viewports outright.
pub const TERMINAL_MIN_PANE_SIZE: i32 = 5;
