use crate::config::{Config, COLUMNS};
use crate::context::Context;
use crate::event::TickConsumer;
use crate::game::Flappy;
use crate::input::{InputLatch, LatchReader};

pub struct Builder<'a, C: Context> {
    context: Option<C>,
    events: Option<TickConsumer<'a>>,
    inputs: Option<LatchReader<'a>>,
    config: Config,
}

impl<'a, C: Context> Builder<'a, C> {
    pub fn new() -> Self {
        Self {
            context: None,
            events: None,
            inputs: None,
            config: Config::default(),
        }
    }

    pub fn with_context(mut self, ctx: C) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Main-loop half of the tick event queue
    pub fn with_consumer(mut self, events: TickConsumer<'a>) -> Self {
        self.events = Some(events);
        self
    }

    /// Latch the button interrupts write to
    pub fn with_latch(mut self, latch: &'a InputLatch) -> Self {
        self.inputs = Some(latch.reader());
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Flappy<'a, C>, &'static str> {
        let context = self.context.ok_or("Context not provided")?;
        let events = self.events.ok_or("Event consumer not provided")?;
        let inputs = self.inputs.ok_or("Input latch not provided")?;
        if !(1..=COLUMNS as u16).contains(&self.config.track_width) {
            return Err("Track width must fit the display");
        }
        Ok(Flappy::new(context, self.config, events, inputs))
    }
}
