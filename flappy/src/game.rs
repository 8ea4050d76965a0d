//! The cooperative game loop.
//!
//! `Flappy::poll` performs one unit of work and returns: a horizontal step
//! of the running round, or one animation frame of an idle screen. Idle
//! screens report `WouldBlock`, they only make progress once a button
//! interrupt latched something. `Flappy::run` polls forever.

use core::convert::Infallible;

use log::{debug, info, trace, warn};

use crate::bird::BirdKinematics;
use crate::config::{Config, BOTTOM_ROW, COLUMNS};
use crate::context::Context;
use crate::event::TickConsumer;
use crate::input::LatchReader;
use crate::obstacle::{clamp_track_width, ObstacleModel};
use crate::sprite::Sprite;
use crate::stack::{GameState, StateStack};

/// Everything a game owns besides the platform
#[derive(Debug, Clone)]
pub struct GameSession {
    pub score: u8,
    pub running: bool,
    pub obstacles: ObstacleModel,
    pub bird: BirdKinematics,
}

impl GameSession {
    pub fn new(cfg: &Config) -> Self {
        Self {
            score: 0,
            running: false,
            obstacles: ObstacleModel::new(cfg),
            bird: BirdKinematics::new(cfg),
        }
    }
}

/// Progress of the round being played
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Round {
    x: u8,
}

pub struct Flappy<'a, C: Context> {
    pub ctx: C,
    cfg: Config,
    events: TickConsumer<'a>,
    inputs: LatchReader<'a>,
    stack: StateStack,
    session: GameSession,
    round: Option<Round>,
    // screen must be wiped before the next round
    fresh: bool,
    // game over screen is already on display
    summary_shown: bool,
    frame: u8,
}

impl<'a, C: Context> Flappy<'a, C> {
    pub fn new(ctx: C, mut cfg: Config, events: TickConsumer<'a>, inputs: LatchReader<'a>) -> Self {
        cfg.scroll_period = cfg.scroll_period.max(1);
        cfg.track_width = clamp_track_width(cfg.track_width);
        let mut stack = StateStack::new();
        stack.arm();
        let session = GameSession::new(&cfg);
        Self {
            ctx,
            cfg,
            events,
            inputs,
            stack,
            session,
            round: None,
            fresh: true,
            summary_shown: false,
            frame: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn score(&self) -> u8 {
        self.session.score
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    /// Screen the next poll dispatches, `None` when the stack ran dry
    pub fn state(&self) -> Option<GameState> {
        if self.session.running {
            self.stack.top()
        } else {
            Some(GameState::WaitingForStart)
        }
    }

    /// Horizontal position of the running round, if any
    pub fn column(&self) -> Option<u8> {
        self.round.map(|round| round.x)
    }

    /// Poll forever
    pub fn run(&mut self) -> ! {
        loop {
            let _ = self.poll();
        }
    }

    /// Run a single iteration of the main loop
    pub fn poll(&mut self) -> nb::Result<(), Infallible> {
        self.service_inputs();

        match self.state() {
            Some(GameState::Playing) => {
                self.play_step();
                Ok(())
            }
            Some(GameState::GameOver) => {
                self.game_over_frame();
                Err(nb::Error::WouldBlock)
            }
            Some(GameState::WaitingForStart) => {
                self.waiting_frame();
                Err(nb::Error::WouldBlock)
            }
            None => Err(nb::Error::WouldBlock),
        }
    }

    fn service_inputs(&mut self) {
        if self.inputs.take_restart() {
            self.restart();
        }

        let jumps = self.inputs.take_jumps();
        if jumps > 0 {
            if !self.session.running {
                info!("game started");
                self.session.running = true;
            }
            for _ in 0..jumps {
                self.session.bird.jump();
            }
            trace!("{} jump(s), bird on row {}", jumps, self.session.bird.row());
        }
    }

    /// Hard reset: drops whatever round was in flight
    fn restart(&mut self) {
        info!("restart requested");
        self.session.score = 0;
        self.session.running = true;

        if let Err(e) = self.stack.pop() {
            warn!("{}, staying idle", e);
            return;
        }
        if self.stack.top() != Some(GameState::Playing) {
            self.stack.arm();
        }

        self.session.bird.reset(&self.cfg);
        self.round = None;
        self.fresh = true;
        self.summary_shown = false;
    }

    fn begin_round(&mut self) -> Round {
        if self.fresh {
            self.ctx.clear();
            self.fresh = false;
        }

        self.session.bird.start_round();

        let dropped = self.events.take_dropped();
        if dropped > 0 {
            warn!("{} tick event(s) dropped, event queue full", dropped);
        }

        if let Some(event) = self.events.dequeue() {
            debug!("tick {} consumed, resetting obstacles", event.seq());
            let obstacles = &mut self.session.obstacles;
            obstacles.clear(&mut self.ctx);
            obstacles.reset();
            obstacles.scroll_and_redraw(&mut self.ctx);
        }

        Round { x: 1 }
    }

    fn play_step(&mut self) {
        let round = match self.round {
            Some(round) => round,
            None => self.begin_round(),
        };
        let x = round.x;

        if x % self.cfg.scroll_period == 0 {
            self.session.obstacles.scroll_and_redraw(&mut self.ctx);
            self.session.score = self.session.score.saturating_add(1);
            debug!("column {}, score {}", x, self.session.score);
        }

        let row = self.session.bird.row();
        if let Some(hit) = self.session.obstacles.collision(row, x) {
            self.ctx.clear_box(x..=x, row..=row);
            self.collide(hit, x);
            return;
        }

        self.move_bird(x);
        trace!("step {} bird row {}", x, self.session.bird.row());

        if x + 1 >= COLUMNS {
            let row = self.session.bird.row();
            self.ctx.clear_sprite(Sprite::Bird, row, x);
            self.round = None;
        } else {
            self.round = Some(Round { x: x + 1 });
        }
    }

    fn move_bird(&mut self, x: u8) {
        let row = self.session.bird.row();
        self.ctx.draw_sprite(Sprite::Bird, row, x);
        self.ctx.delay_ms(self.cfg.step_delay_ms);
        let behind = x.saturating_sub(1);
        self.ctx.clear_box(behind..=behind, row..=row);

        let motion = self.session.bird.advance(x);
        if motion.fell {
            self.ctx.clear_sprite(Sprite::Bird, row, x);
        }
        let below = self.session.bird.row() + 1;
        if motion.jumped && below <= BOTTOM_ROW {
            // trail left one row below and behind
            self.ctx.clear_sprite(Sprite::Bird, below, behind);
        }
    }

    fn collide(&mut self, obstacle: usize, x: u8) {
        info!(
            "bird hit obstacle {} at column {}, score {}",
            obstacle, x, self.session.score
        );
        self.round = None;
        if let Err(e) = self.stack.pop() {
            warn!("{}, staying idle", e);
        }
    }

    fn game_over_frame(&mut self) {
        if !self.summary_shown {
            let ctx = &mut self.ctx;
            ctx.clear();
            ctx.draw_sprite(Sprite::SadFace, 1, 20);
            ctx.write_str(1, 70, "Game Over");
            ctx.write_str(3, 60, "Total Score");
            ctx.write_str(4, 60, "=");
            ctx.write_number(4, 70, self.session.score);
            self.summary_shown = true;
        }

        self.frame = self.frame.wrapping_add(1);
        let falling = self.frame % 2 == 0;
        self.ctx.draw_sprite(Sprite::Tears { falling }, 3, 20);
        self.session.bird.respawn();
        self.ctx.delay_ms(self.cfg.frame_delay_ms);
    }

    fn waiting_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        let wings_up = self.frame % 2 == 0;
        self.ctx.write_str(1, 40, "Press to start");
        self.ctx.draw_sprite(Sprite::BigBird { wings_up }, 3, 20);
        self.ctx.delay_ms(self.cfg.frame_delay_ms);
    }
}
