//! Monochrome bitmaps drawn by the engine.
//!
//! Every bitmap is stored row-major, most significant bit first, each row
//! padded to a whole byte. Heights are multiples of eight so a sprite
//! always covers whole page rows.

#[cfg(feature = "embedded-graphics")]
use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor};

/// Height of a page row in pixels
pub const PAGE_HEIGHT: u8 = 8;

#[rustfmt::skip]
const BIRD: [u8; 8] = [
    0x38, 0x44, 0x96, 0x87,
    0xFC, 0x78, 0x30, 0x00,
];

#[rustfmt::skip]
const BIG_BIRD_UP: [u8; 32] = [
    0x00, 0x00, 0x07, 0xE0, 0x08, 0x10, 0xE8, 0x48,
    0x98, 0x08, 0x48, 0x1E, 0x28, 0x21, 0x18, 0x1E,
    0x08, 0x08, 0x08, 0x10, 0x07, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const BIG_BIRD_DOWN: [u8; 32] = [
    0x00, 0x00, 0x07, 0xE0, 0x08, 0x10, 0x08, 0x48,
    0x08, 0x08, 0x08, 0x1E, 0x08, 0x21, 0x18, 0x1E,
    0x28, 0x08, 0x48, 0x10, 0xE7, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const SAD_FACE: [u8; 32] = [
    0x00, 0x00, 0x07, 0xE0, 0x18, 0x18, 0x20, 0x04,
    0x44, 0x22, 0x40, 0x02, 0x80, 0x01, 0x81, 0x81,
    0x82, 0x41, 0x84, 0x21, 0x40, 0x02, 0x40, 0x02,
    0x20, 0x04, 0x18, 0x18, 0x07, 0xE0, 0x00, 0x00,
];

#[rustfmt::skip]
const TEARS_HIGH: [u8; 16] = [
    0x04, 0x20, 0x04, 0x20, 0x00, 0x00, 0x00, 0x00,
    0x04, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const TEARS_LOW: [u8; 16] = [
    0x00, 0x00, 0x04, 0x20, 0x04, 0x20, 0x00, 0x00,
    0x00, 0x00, 0x04, 0x20, 0x00, 0x00, 0x00, 0x00,
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sprite {
    /// The player character, one page row tall
    Bird,
    /// Flapping bird of the waiting prompt
    BigBird { wings_up: bool },
    /// Face shown on the game-over screen
    SadFace,
    /// Animated tears below the sad face
    Tears { falling: bool },
}

impl Sprite {
    /// Width in pixels (columns)
    pub fn width(&self) -> u8 {
        match self {
            Sprite::Bird => 8,
            _ => 16,
        }
    }

    /// Height in page rows
    pub fn rows(&self) -> u8 {
        match self {
            Sprite::Bird | Sprite::Tears { .. } => 1,
            Sprite::BigBird { .. } | Sprite::SadFace => 2,
        }
    }

    /// Raw bitmap
    pub fn data(&self) -> &'static [u8] {
        match *self {
            Sprite::Bird => &BIRD,
            Sprite::BigBird { wings_up: true } => &BIG_BIRD_UP,
            Sprite::BigBird { wings_up: false } => &BIG_BIRD_DOWN,
            Sprite::SadFace => &SAD_FACE,
            Sprite::Tears { falling: false } => &TEARS_HIGH,
            Sprite::Tears { falling: true } => &TEARS_LOW,
        }
    }

    /// Whether the pixel at (x, y), relative to the top left corner, is set
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if x >= self.width() || y >= self.rows() * PAGE_HEIGHT {
            return false;
        }
        let stride = (self.width() as usize + 7) / 8;
        let byte = self.data()[y as usize * stride + x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }

    #[cfg(feature = "embedded-graphics")]
    pub fn as_raw_image(&self) -> ImageRaw<'static, BinaryColor> {
        ImageRaw::new(
            self.data(),
            self.width() as u32,
            (self.rows() * PAGE_HEIGHT) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmaps_cover_declared_size() {
        let sprites = [
            Sprite::Bird,
            Sprite::BigBird { wings_up: true },
            Sprite::BigBird { wings_up: false },
            Sprite::SadFace,
            Sprite::Tears { falling: true },
            Sprite::Tears { falling: false },
        ];
        for sprite in sprites.iter() {
            let stride = (sprite.width() as usize + 7) / 8;
            let height = (sprite.rows() * PAGE_HEIGHT) as usize;
            assert_eq!(sprite.data().len(), stride * height, "{:?}", sprite);
        }
    }

    #[test]
    fn pixel_lookup() {
        // 0x38 = ..###...
        assert!(!Sprite::Bird.pixel(1, 0));
        assert!(Sprite::Bird.pixel(2, 0));
        assert!(Sprite::Bird.pixel(4, 0));
        assert!(!Sprite::Bird.pixel(5, 0));
        assert!(!Sprite::Bird.pixel(8, 0));
        assert!(!Sprite::Bird.pixel(0, 8));
    }

    #[test]
    fn animation_frames_differ() {
        assert_ne!(
            Sprite::BigBird { wings_up: true }.data(),
            Sprite::BigBird { wings_up: false }.data()
        );
        assert_ne!(
            Sprite::Tears { falling: true }.data(),
            Sprite::Tears { falling: false }.data()
        );
    }
}
