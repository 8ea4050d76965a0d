use core::fmt;

/// Conditions raised by the bounded containers shared with interrupt context.
///
/// None of them is fatal, the engine absorbs every one of them and keeps
/// iterating.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// Tick dropped, the event queue was already full
    QueueFull,
    /// Nothing to dequeue
    QueueEmpty,
    /// State push rejected, the stack is at capacity
    StackOverflow,
    /// State pop on an empty stack
    StackUnderflow,
}

impl Error {
    #[rustfmt::skip]
    pub fn as_str(&self) -> &'static str {
        match *self {
            Error::QueueFull      => "event queue is full",
            Error::QueueEmpty     => "event queue is empty",
            Error::StackOverflow  => "state stack overflow",
            Error::StackUnderflow => "state stack underflow",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
