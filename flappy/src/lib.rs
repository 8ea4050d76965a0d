#![no_std]

#[cfg(test)]
extern crate std;

pub mod bird;
pub mod builder;
pub mod collision;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod fixed;
pub mod game;
pub mod input;
pub mod obstacle;
pub mod sprite;
pub mod stack;

pub use builder::Builder;
pub use config::Config;
pub use context::Context;
pub use error::Error;
pub use event::{EventQueue, TickConsumer, TickEvent, TickProducer, TickSource};
pub use game::{Flappy, GameSession};
pub use input::InputLatch;
pub use sprite::Sprite;
pub use stack::{GameState, StateStack};

#[cfg(feature = "embedded-graphics")]
pub use embedded_graphics;
pub use nb;
