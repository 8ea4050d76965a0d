//! Game tunables. `Config::default()` reproduces the reference firmware.

use crate::fixed::Centi;

/// Number of columns of the display surface
pub const COLUMNS: u8 = 128;
/// Number of addressable page rows (each an 8 pixel band)
pub const ROWS: u8 = 8;
/// Lowest page row, the bird rests here at most
pub const BOTTOM_ROW: u8 = ROWS - 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Modulus applied to obstacle track coordinates before drawing
    pub track_width: u16,
    /// Track units every obstacle advances by on a scroll
    pub scroll_step: u16,
    /// Horizontal steps between two scrolls (and two score increments)
    pub scroll_period: u8,
    /// Timer firings per posted tick event
    pub tick_divider: u8,
    /// Speed the ramp starts from
    pub initial_speed: Centi,
    /// First decrement applied to the speed, in hundredths
    pub ramp_step: u8,
    /// Growth of the decrement after every round, in hundredths
    pub ramp_growth: u8,
    /// Cadence floor, the bird never falls more than once a step
    pub min_cadence: u8,
    /// Row of a freshly spawned bird
    pub start_row: u8,
    /// (low band top row, high band bottom row) before the first reset
    pub initial_thresholds: (u8, u8),
    /// (low band top row, high band bottom row) applied on every reset
    pub reset_thresholds: (u8, u8),
    /// Gap width added per obstacle reset
    pub gap_step: u8,
    /// Number of distinct gap widths before the rotation wraps to zero
    pub gap_cycle: u8,
    /// Pause after drawing the bird, in milliseconds
    pub step_delay_ms: u16,
    /// Pause between two animation frames of the idle screens
    pub frame_delay_ms: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            track_width: 127,
            scroll_step: 10,
            scroll_period: 30,
            tick_divider: 4,
            initial_speed: Centi::new(3, 50),
            ramp_step: 10,
            ramp_growth: 10,
            min_cadence: 1,
            start_row: 3,
            initial_thresholds: (6, 2),
            reset_thresholds: (5, 2),
            gap_step: 5,
            gap_cycle: 5,
            step_delay_ms: 2,
            frame_delay_ms: 20,
        }
    }
}
