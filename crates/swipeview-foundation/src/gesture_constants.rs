//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels and milliseconds. Hosts with very dense
//! screens can override them through the widget configuration.

/// Drag threshold in logical pixels.
///
/// If the pointer moves more than this distance from the press position:
/// - the drag begins and the card starts following the pointer
/// - the pending tap is cancelled (no tap fires on release)
///
/// Matches Android's `ViewConfiguration.TOUCH_SLOP` of ~8dp.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Time a released tap waits for a second press before it is confirmed as a
/// single tap.
pub const DOUBLE_TAP_TIMEOUT_MILLIS: u64 = 300;
