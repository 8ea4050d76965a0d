//! Four pillars scrolling on a wrapping track.
//!
//! Obstacles 0 and 1 stand in the `Low` band, obstacles 2 and 3 hang in the
//! `High` band. Positions are kept as unbounded track coordinates and only
//! reduced modulo the track width when drawn or tested.

use core::ops::RangeInclusive;

use log::debug;

use crate::collision;
use crate::config::{Config, BOTTOM_ROW, COLUMNS};
use crate::context::Context;

pub const OBSTACLES: usize = 4;

const BANDS: [Band; OBSTACLES] = [Band::Low, Band::Low, Band::High, Band::High];

/// (start, end) of every obstacle at power up
const INITIAL_LAYOUT: [(u16, u16); OBSTACLES] = [(50, 70), (90, 100), (80, 90), (100, 110)];

/// (start, end) of every obstacle after a reset, before the gap is added
const RESET_LAYOUT: [(u16, u16); OBSTACLES] = [(0, 10), (50, 60), (70, 80), (10, 20)];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Band {
    /// Bottom rows, from `Thresholds::top` to the last row
    Low,
    /// Top rows, from the first row to `Thresholds::bottom`
    High,
}

/// Rows delimiting the two bands
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Thresholds {
    /// First row covered by `Low` obstacles
    pub top: u8,
    /// Last row covered by `High` obstacles
    pub bottom: u8,
}

impl Thresholds {
    pub fn rows(&self, band: Band) -> RangeInclusive<u8> {
        match band {
            Band::Low => self.top..=BOTTOM_ROW,
            Band::High => 0..=self.bottom,
        }
    }
}

impl From<(u8, u8)> for Thresholds {
    fn from((top, bottom): (u8, u8)) -> Self {
        Self { top, bottom }
    }
}

/// Obstacle in track coordinates
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Obstacle {
    pub start: u16,
    pub end: u16,
    pub band: Band,
}

/// Obstacle reduced to display columns
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Extent {
    pub start: u8,
    pub end: u8,
    pub band: Band,
}

impl Extent {
    pub fn cols(&self) -> RangeInclusive<u8> {
        self.start..=self.end
    }
}

/// Track width reduced to what display columns can address
pub fn clamp_track_width(track_width: u16) -> u16 {
    track_width.clamp(1, COLUMNS as u16)
}

impl Obstacle {
    /// Display columns for `track_width`, clamped to `1..=COLUMNS`
    pub fn extent(&self, track_width: u16) -> Extent {
        let track_width = clamp_track_width(track_width);
        Extent {
            start: (self.start % track_width) as u8,
            end: (self.end % track_width) as u8,
            band: self.band,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObstacleModel {
    obstacles: [Obstacle; OBSTACLES],
    thresholds: Thresholds,
    gap: u8,
    track_width: u16,
    scroll_step: u16,
    gap_step: u8,
    gap_cycle: u8,
    reset_thresholds: Thresholds,
}

fn layout(spans: &[(u16, u16); OBSTACLES], gap: u16) -> [Obstacle; OBSTACLES] {
    let mut obstacles = [Obstacle {
        start: 0,
        end: 0,
        band: Band::Low,
    }; OBSTACLES];
    for ((obstacle, &(start, end)), &band) in obstacles.iter_mut().zip(spans).zip(BANDS.iter()) {
        *obstacle = Obstacle {
            start,
            end: end + gap,
            band,
        };
    }
    obstacles
}

impl ObstacleModel {
    pub fn new(cfg: &Config) -> Self {
        Self {
            obstacles: layout(&INITIAL_LAYOUT, 0),
            thresholds: cfg.initial_thresholds.into(),
            gap: 0,
            track_width: clamp_track_width(cfg.track_width),
            scroll_step: cfg.scroll_step,
            gap_step: cfg.gap_step,
            gap_cycle: cfg.gap_cycle.max(1),
            reset_thresholds: cfg.reset_thresholds.into(),
        }
    }

    pub fn obstacles(&self) -> &[Obstacle; OBSTACLES] {
        &self.obstacles
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Gap width the next reset widens the obstacles by
    pub fn gap(&self) -> u8 {
        self.gap
    }

    pub fn extents(&self) -> impl Iterator<Item = Extent> + '_ {
        let width = self.track_width;
        self.obstacles.iter().map(move |o| o.extent(width))
    }

    /// Advance every obstacle by one scroll step
    pub fn scroll(&mut self) {
        let step = self.scroll_step;
        self.obstacles.iter_mut().for_each(|o| {
            o.start = o.start.wrapping_add(step);
            o.end = o.end.wrapping_add(step);
        });
    }

    /// Restore the reset layout widened by the current gap, then rotate the gap
    pub fn reset(&mut self) {
        debug!("resetting obstacles, gap width {}", self.gap);
        self.obstacles = layout(&RESET_LAYOUT, self.gap as u16);
        self.thresholds = self.reset_thresholds;
        self.gap = self.gap.wrapping_add(self.gap_step);
        if self.gap >= self.gap_step.wrapping_mul(self.gap_cycle) {
            self.gap = 0;
        }
    }

    /// Index of the first obstacle a bird at (`row`, `x`) touches
    pub fn collision(&self, row: u8, x: u8) -> Option<usize> {
        collision::first_collision(row, x, self.extents(), self.thresholds)
    }

    pub fn draw<C: Context>(&self, ctx: &mut C) {
        for extent in self.extents() {
            ctx.draw_box(extent.cols(), self.thresholds.rows(extent.band));
        }
    }

    pub fn clear<C: Context>(&self, ctx: &mut C) {
        for extent in self.extents() {
            ctx.clear_box(extent.cols(), self.thresholds.rows(extent.band));
        }
    }

    /// Scroll, erasing every obstacle at its previous place
    pub fn scroll_and_redraw<C: Context>(&mut self, ctx: &mut C) {
        self.clear(ctx);
        self.scroll();
        self.draw(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::TestingContext;

    fn model() -> ObstacleModel {
        ObstacleModel::new(&Config::default())
    }

    #[test]
    fn initial_layout() {
        let model = model();
        let spans: heapless::Vec<(u16, u16, Band), 4> = model
            .obstacles()
            .iter()
            .map(|o| (o.start, o.end, o.band))
            .collect();
        assert_eq!(
            spans.as_slice(),
            &[
                (50, 70, Band::Low),
                (90, 100, Band::Low),
                (80, 90, Band::High),
                (100, 110, Band::High),
            ]
        );
        assert_eq!(model.thresholds(), Thresholds { top: 6, bottom: 2 });
    }

    #[test]
    fn gap_rotates_through_five_widths() {
        let mut model = model();
        let mut widths = [0u16; 11];
        for width in widths.iter_mut() {
            model.reset();
            let first = model.obstacles()[0];
            *width = first.end - first.start - 10;
        }
        assert_eq!(widths, [0, 5, 10, 15, 20, 0, 5, 10, 15, 20, 0]);
    }

    #[test]
    fn reset_restores_layout_and_thresholds() {
        let mut model = model();
        model.scroll();
        model.reset();
        let starts: heapless::Vec<u16, 4> = model.obstacles().iter().map(|o| o.start).collect();
        assert_eq!(starts.as_slice(), &[0, 50, 70, 10]);
        assert_eq!(model.thresholds(), Thresholds { top: 5, bottom: 2 });
        assert_eq!(model.gap(), 5);
    }

    #[test]
    fn displayed_positions_stay_below_track_width() {
        let mut model = model();
        for step in 0..20_000u32 {
            if step % 13 == 0 {
                model.reset();
            }
            model.scroll();
            for extent in model.extents() {
                assert!(extent.start < 127 && extent.end < 127, "{:?}", extent);
            }
        }
    }

    #[test]
    fn oversized_track_stays_on_display() {
        let obstacle = Obstacle {
            start: 290,
            end: 295,
            band: Band::Low,
        };
        let extent = obstacle.extent(300);
        // reduced modulo the 128 display columns
        assert_eq!((extent.start, extent.end), (34, 39));
        assert_eq!(obstacle.extent(0).cols(), 0..=0);

        let mut model = ObstacleModel::new(&Config {
            track_width: 1000,
            ..Config::default()
        });
        for _ in 0..100 {
            model.scroll();
            for extent in model.extents() {
                assert!(extent.start < COLUMNS && extent.end < COLUMNS, "{:?}", extent);
            }
        }
    }

    #[test]
    fn scroll_wraps_around_track() {
        let mut model = model();
        // obstacle 3 spans 100..=110, three scrolls bring it to 130..=140
        for _ in 0..3 {
            model.scroll();
        }
        let extent = model.extents().nth(3).unwrap();
        assert_eq!((extent.start, extent.end), (3, 13));
    }

    #[test]
    fn redraw_moves_boxes() {
        let mut ctx = TestingContext::new();
        let mut model = model();
        model.draw(&mut ctx);
        assert!(ctx.cell(7, 50));
        assert!(ctx.cell(6, 70));
        assert!(!ctx.cell(5, 50));
        assert!(ctx.cell(0, 80) && ctx.cell(2, 90));

        model.scroll_and_redraw(&mut ctx);
        assert!(!ctx.cell(7, 50));
        assert!(ctx.cell(7, 60) && ctx.cell(7, 80));
        assert!(!ctx.cell(0, 80));
        assert!(ctx.cell(0, 90));

        model.clear(&mut ctx);
        assert_eq!(ctx.lit_cells(), 0);
    }

    #[test]
    fn collision_uses_current_thresholds() {
        let model = model();
        // Low obstacle 0 over columns 50..=70, top row 6
        assert_eq!(model.collision(6, 50), Some(0));
        assert_eq!(model.collision(5, 50), None);
        // High obstacle 2 over columns 80..=90, bottom row 2
        assert_eq!(model.collision(2, 85), Some(2));
        assert_eq!(model.collision(3, 85), None);
    }
}
