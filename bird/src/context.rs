use core::fmt::Write;
use core::ops::RangeInclusive;

use flappy::{
    embedded_graphics::{
        fonts::{Font6x8, Text},
        image::Image,
        pixelcolor::BinaryColor,
        prelude::*,
        primitives::Rectangle,
        style::{PrimitiveStyle, TextStyle},
    },
    sprite::PAGE_HEIGHT,
    Context, Sprite,
};

use ssd1306::prelude::*;
use stm32f3xx_hal::{delay::Delay, hal::blocking::delay::DelayMs};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub(crate) struct DiscoveryContext<T: WriteOnlyDataCommand> {
    pub display: GraphicsMode<T>,
    pub delay: Delay,
}

/// Top left and bottom right pixels of a block of page cells
fn corners(cols: RangeInclusive<u8>, rows: RangeInclusive<u8>) -> (Point, Point) {
    let page = PAGE_HEIGHT as i32;
    (
        Point::new(*cols.start() as i32, *rows.start() as i32 * page),
        Point::new(*cols.end() as i32, *rows.end() as i32 * page + page - 1),
    )
}

fn sprite_cells(sprite: Sprite, row: u8, col: u8) -> (RangeInclusive<u8>, RangeInclusive<u8>) {
    (
        col..=col.saturating_add(sprite.width() - 1),
        row..=row.saturating_add(sprite.rows() - 1),
    )
}

impl<T: WriteOnlyDataCommand> DiscoveryContext<T> {
    fn fill(&mut self, cols: RangeInclusive<u8>, rows: RangeInclusive<u8>, color: BinaryColor) {
        if cols.is_empty() || rows.is_empty() {
            return;
        }
        let (top_left, bottom_right) = corners(cols, rows);
        let _ = Rectangle::new(top_left, bottom_right)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.display);
    }

    fn text(&mut self, row: u8, col: u8, text: &str) {
        let position = Point::new(col as i32, (row * PAGE_HEIGHT) as i32);
        let _ = Text::new(text, position)
            .into_styled(TextStyle::new(Font6x8, BinaryColor::On))
            .draw(&mut self.display);
    }
}

impl<T: WriteOnlyDataCommand> Context for DiscoveryContext<T> {
    fn clear(&mut self) {
        self.display.clear();
    }

    fn clear_box(&mut self, cols: RangeInclusive<u8>, rows: RangeInclusive<u8>) {
        self.fill(cols, rows, BinaryColor::Off);
    }

    fn draw_box(&mut self, cols: RangeInclusive<u8>, rows: RangeInclusive<u8>) {
        self.fill(cols, rows, BinaryColor::On);
    }

    fn draw_sprite(&mut self, sprite: Sprite, row: u8, col: u8) {
        let raw = sprite.as_raw_image();
        let position = Point::new(col as i32, (row * PAGE_HEIGHT) as i32);
        let _ = Image::new(&raw, position).draw(&mut self.display);
    }

    fn clear_sprite(&mut self, sprite: Sprite, row: u8, col: u8) {
        let (cols, rows) = sprite_cells(sprite, row, col);
        self.fill(cols, rows, BinaryColor::Off);
    }

    fn write_str(&mut self, row: u8, col: u8, text: &str) {
        self.text(row, col, text);
    }

    fn write_number(&mut self, row: u8, col: u8, value: u8) {
        let mut digits: heapless::String<3> = heapless::String::new();
        // three digits always fit a u8
        let _ = write!(digits, "{}", value);
        self.text(row, col, &digits);
    }

    /// Push the frame buffer to the panel, then wait
    fn delay_ms(&mut self, ms: u16) {
        if self.display.flush().is_err() {
            warn!("display flush failed");
        }
        self.delay.delay_ms(ms);
    }
}
