//! Vertical motion of the bird.
//!
//! The bird falls one row every `cadence` horizontal steps. The cadence is
//! derived once per round from a fixed-point speed that decays faster and
//! faster, so every round the bird drops a little sooner.

use log::debug;

use crate::config::{Config, BOTTOM_ROW};
use crate::fixed::Centi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedRamp {
    speed: Centi,
    step: u8,
    growth: u8,
    min_cadence: u8,
}

impl SpeedRamp {
    pub fn new(cfg: &Config) -> Self {
        Self {
            speed: cfg.initial_speed,
            step: cfg.ramp_step,
            growth: cfg.ramp_growth,
            min_cadence: cfg.min_cadence.max(1),
        }
    }

    pub fn speed(&self) -> Centi {
        self.speed
    }

    /// Current decrement, in hundredths
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Decay the speed once and return the cadence of the new round
    pub fn next_cadence(&mut self) -> u8 {
        self.speed = self
            .speed
            .saturating_sub(Centi::from_hundredths(self.step as u16));
        self.step = self.step.saturating_add(self.growth);
        let tenths = self.speed.to_tenths().min(u8::MAX as u16) as u8;
        tenths.max(self.min_cadence)
    }
}

/// What a horizontal step did to the bird
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Motion {
    /// The bird dropped a row during this step
    pub fell: bool,
    /// A jump was pending and its trail must be erased
    pub jumped: bool,
}

#[derive(Debug, Clone)]
pub struct BirdKinematics {
    row: u8,
    jumping: bool,
    cadence: u8,
    ramp: SpeedRamp,
    start_row: u8,
}

impl BirdKinematics {
    pub fn new(cfg: &Config) -> Self {
        let ramp = SpeedRamp::new(cfg);
        let start_row = cfg.start_row.min(BOTTOM_ROW);
        Self {
            row: start_row,
            jumping: false,
            cadence: ramp.min_cadence,
            ramp,
            start_row,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    /// Cadence of the running round
    pub fn cadence(&self) -> u8 {
        self.cadence
    }

    pub fn ramp(&self) -> &SpeedRamp {
        &self.ramp
    }

    /// Move one row up, clamped at the top row
    pub fn jump(&mut self) {
        self.row = self.row.saturating_sub(1);
        self.jumping = true;
    }

    /// Move one row down, clamped at the bottom row
    pub fn fall(&mut self) {
        self.row = (self.row + 1).min(BOTTOM_ROW);
    }

    /// Put the bird back on its start row
    pub fn respawn(&mut self) {
        self.row = self.start_row;
        self.jumping = false;
    }

    /// Fresh bird with a fresh speed ramp
    pub fn reset(&mut self, cfg: &Config) {
        *self = Self::new(cfg);
    }

    /// Derive the cadence of a new round
    pub fn start_round(&mut self) -> u8 {
        self.cadence = self.ramp.next_cadence();
        debug!(
            "round speed {}, bird falls every {} steps",
            self.ramp.speed(),
            self.cadence
        );
        self.cadence
    }

    /// Apply gravity and consume the jump flag for horizontal step `x`
    pub fn advance(&mut self, x: u8) -> Motion {
        let mut motion = Motion::default();
        if x % self.cadence == 0 {
            self.fall();
            motion.fell = true;
        }
        if self.jumping {
            self.jumping = false;
            motion.jumped = true;
        }
        motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nanorand::{rand::pcg64::Pcg64 as Rng, RNG};

    #[test]
    fn ramp_decays_faster_every_round() {
        let mut ramp = SpeedRamp::new(&Config::default());
        let mut cadences = [0u8; 10];
        cadences.iter_mut().for_each(|c| *c = ramp.next_cadence());
        // 3.40, 3.20, 2.90, 2.50, 2.00, 1.40, 0.70 then clamped
        assert_eq!(cadences, [34, 32, 29, 25, 20, 14, 7, 1, 1, 1]);
        assert_eq!(ramp.speed(), Centi::ZERO);
        assert_eq!(ramp.step(), 110);
    }

    #[test]
    fn ramp_step_saturates() {
        let mut ramp = SpeedRamp::new(&Config::default());
        for _ in 0..100 {
            assert!(ramp.next_cadence() >= 1);
        }
        assert_eq!(ramp.step(), u8::MAX);
    }

    #[test]
    fn jump_and_fall_clamp() {
        let mut bird = BirdKinematics::new(&Config::default());
        assert_eq!(bird.row(), 3);
        for _ in 0..5 {
            bird.jump();
        }
        assert_eq!(bird.row(), 0);
        assert!(bird.is_jumping());
        for _ in 0..10 {
            bird.fall();
        }
        assert_eq!(bird.row(), BOTTOM_ROW);
    }

    #[test]
    fn random_moves_stay_on_display() {
        let mut rng = Rng::new_seed(0x5eed);
        let mut bird = BirdKinematics::new(&Config::default());
        bird.start_round();
        for x in 0..10_000u32 {
            match rng.generate::<u8>() % 3 {
                0 => bird.jump(),
                1 => bird.fall(),
                _ => {
                    bird.advance((x % 128) as u8);
                }
            }
            assert!(bird.row() <= BOTTOM_ROW);
        }
    }

    #[test]
    fn advance_falls_on_cadence() {
        let mut bird = BirdKinematics::new(&Config::default());
        assert_eq!(bird.start_round(), 34);
        let mut falls = 0;
        for x in 1..128u8 {
            if bird.advance(x).fell {
                falls += 1;
            }
        }
        // steps 34, 68 and 102
        assert_eq!(falls, 3);
        assert_eq!(bird.row(), 6);
    }

    #[test]
    fn advance_consumes_jump_once() {
        let mut bird = BirdKinematics::new(&Config::default());
        bird.start_round();
        bird.jump();
        assert_eq!(bird.advance(1), Motion { fell: false, jumped: true });
        assert_eq!(bird.advance(2), Motion::default());
        assert_eq!(bird.row(), 2);
    }

    #[test]
    fn reset_restores_ramp() {
        let cfg = Config::default();
        let mut bird = BirdKinematics::new(&cfg);
        bird.start_round();
        bird.start_round();
        bird.jump();
        bird.reset(&cfg);
        assert_eq!(bird.row(), 3);
        assert!(!bird.is_jumping());
        assert_eq!(bird.start_round(), 34);
    }
}
