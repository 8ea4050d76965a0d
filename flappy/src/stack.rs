//! Push-down navigation between game screens.
//!
//! The engine arms the stack with `GameOver` below `Playing`: a collision
//! pops `Playing` and reveals `GameOver`, a restart unwinds and re-arms.

use heapless::Vec;

use crate::error::Error;

/// Headroom above the two entries the engine keeps armed
pub const STACK_DEPTH: usize = 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Prompt screen shown until the first button press
    WaitingForStart,
    /// Scrolling obstacles, the bird and the collision checks
    Playing,
    /// Final score, waits for the restart button
    GameOver,
}

#[derive(Debug, Default)]
pub struct StateStack {
    states: Vec<GameState, STACK_DEPTH>,
}

impl StateStack {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn push(&mut self, state: GameState) -> Result<(), Error> {
        self.states.push(state).or(Err(Error::StackOverflow))
    }

    pub fn pop(&mut self) -> Result<GameState, Error> {
        self.states.pop().ok_or(Error::StackUnderflow)
    }

    /// State the game loop dispatches
    pub fn top(&self) -> Option<GameState> {
        self.states.last().copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Reset to `[GameOver, Playing]`
    pub fn arm(&mut self) {
        self.states.clear();
        // two entries always fit
        let _ = self.push(GameState::GameOver);
        let _ = self.push(GameState::Playing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut stack = StateStack::new();
        stack.push(GameState::GameOver).unwrap();
        stack.push(GameState::Playing).unwrap();
        assert_eq!(stack.top(), Some(GameState::Playing));
        assert_eq!(stack.pop(), Ok(GameState::Playing));
        assert_eq!(stack.top(), Some(GameState::GameOver));
        assert_eq!(stack.pop(), Ok(GameState::GameOver));
        assert!(stack.is_empty());
    }

    #[test]
    fn underflow_is_reported() {
        let mut stack = StateStack::new();
        assert_eq!(stack.pop(), Err(Error::StackUnderflow));
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn overflow_is_reported() {
        let mut stack = StateStack::new();
        for _ in 0..STACK_DEPTH {
            stack.push(GameState::Playing).unwrap();
        }
        assert_eq!(stack.push(GameState::GameOver), Err(Error::StackOverflow));
        assert_eq!(stack.len(), STACK_DEPTH);
        assert_eq!(stack.top(), Some(GameState::Playing));
    }

    #[test]
    fn arm_replaces_content() {
        let mut stack = StateStack::new();
        stack.push(GameState::WaitingForStart).unwrap();
        stack.arm();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Ok(GameState::Playing));
        assert_eq!(stack.pop(), Ok(GameState::GameOver));
    }
}
