//! Context for accessing the display surface and pacing of the platform the
//! game runs on.
//!
//! Coordinates are expressed in columns (`0..128`) and page rows (`0..8`),
//! a page row being an 8 pixel tall band. Row 0 is the top of the display.

use core::ops::RangeInclusive;

use crate::sprite::Sprite;

/// Trait aggregating platform functionalities
pub trait Context {
    /// Blank the whole display
    fn clear(&mut self);
    /// Blank every cell of `cols` x `rows`
    ///
    /// An empty range (start past end) draws nothing
    fn clear_box(&mut self, cols: RangeInclusive<u8>, rows: RangeInclusive<u8>);
    /// Fill every cell of `cols` x `rows`
    fn draw_box(&mut self, cols: RangeInclusive<u8>, rows: RangeInclusive<u8>);
    /// Draw a sprite with its top left corner at (`row`, `col`)
    fn draw_sprite(&mut self, sprite: Sprite, row: u8, col: u8);
    /// Blank the area a sprite drawn at (`row`, `col`) occupies
    fn clear_sprite(&mut self, sprite: Sprite, row: u8, col: u8);
    /// Write text starting at (`row`, `col`)
    fn write_str(&mut self, row: u8, col: u8, text: &str);
    /// Write a decimal number starting at (`row`, `col`)
    fn write_number(&mut self, row: u8, col: u8, value: u8);
    /// Pause the main loop
    ///
    /// Called between bird frames and between animation frames. Hosts
    /// driving the engine step by step can make this a no-op.
    fn delay_ms(&mut self, ms: u16);
}
