//! Tick events handed from the timer interrupt to the main loop.
//!
//! The queue is a single-producer single-consumer ring: the producer half
//! lives in the timer interrupt, the consumer half in the engine. When the
//! ring is full the newest tick is dropped and counted; queued ticks are
//! never overwritten.

use core::sync::atomic::{AtomicU8, Ordering};

use heapless::spsc::{Consumer, Producer, Queue};

use crate::error::Error;

/// Number of ticks the queue buffers
pub const QUEUE_CAPACITY: usize = 4;

// heapless keeps one slot free to tell full from empty
const SLOTS: usize = QUEUE_CAPACITY + 1;

/// Unit signal requesting an obstacle reset
///
/// Carries the wrapping sequence number the producer assigned to it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TickEvent {
    seq: u8,
}

impl TickEvent {
    pub fn new(seq: u8) -> Self {
        Self { seq }
    }

    pub fn seq(&self) -> u8 {
        self.seq
    }
}

pub struct EventQueue {
    queue: Queue<TickEvent, SLOTS>,
    dropped: AtomicU8,
}

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            queue: Queue::new(),
            dropped: AtomicU8::new(0),
        }
    }

    /// Split into the interrupt-side and the main-loop-side halves
    pub fn split(&mut self) -> (TickProducer<'_>, TickConsumer<'_>) {
        let dropped = &self.dropped;
        let (producer, consumer) = self.queue.split();
        (
            TickProducer {
                inner: producer,
                dropped,
            },
            TickConsumer {
                inner: consumer,
                dropped,
                reported: 0,
            },
        )
    }
}

/// Writing half, only ever used from interrupt context
pub struct TickProducer<'a> {
    inner: Producer<'a, TickEvent, SLOTS>,
    dropped: &'a AtomicU8,
}

impl<'a> TickProducer<'a> {
    /// Append an event, dropping it when the queue is full
    pub fn enqueue(&mut self, event: TickEvent) -> Result<(), Error> {
        self.inner.enqueue(event).map_err(|_| {
            // only this half writes the counter
            let dropped = self.dropped.load(Ordering::Relaxed);
            self.dropped.store(dropped.wrapping_add(1), Ordering::Release);
            Error::QueueFull
        })
    }

    pub fn is_full(&self) -> bool {
        !self.inner.ready()
    }
}

/// Reading half, only ever used from the main loop
pub struct TickConsumer<'a> {
    inner: Consumer<'a, TickEvent, SLOTS>,
    dropped: &'a AtomicU8,
    reported: u8,
}

impl<'a> TickConsumer<'a> {
    pub fn is_empty(&self) -> bool {
        !self.inner.ready()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Take the oldest event, never blocks
    pub fn dequeue(&mut self) -> Option<TickEvent> {
        self.inner.dequeue()
    }

    /// Like `dequeue`, reporting an empty queue as an error
    pub fn try_dequeue(&mut self) -> Result<TickEvent, Error> {
        self.dequeue().ok_or(Error::QueueEmpty)
    }

    /// Total number of ticks the producer had to drop
    pub fn dropped(&self) -> u8 {
        self.dropped.load(Ordering::Acquire)
    }

    /// Ticks dropped since the previous call
    pub fn take_dropped(&mut self) -> u8 {
        let dropped = self.dropped();
        let fresh = dropped.wrapping_sub(self.reported);
        self.reported = dropped;
        fresh
    }
}

/// Timer interrupt callback state: divides timer firings into tick events
pub struct TickSource<'a> {
    producer: TickProducer<'a>,
    divider: u8,
    firings: u8,
    seq: u8,
}

impl<'a> TickSource<'a> {
    /// Post one event every `divider` firings (a zero divider acts as one)
    pub fn new(producer: TickProducer<'a>, divider: u8) -> Self {
        Self {
            producer,
            divider: divider.max(1),
            firings: 0,
            seq: 0,
        }
    }

    /// Account one timer firing
    ///
    /// Returns `Ok(true)` when this firing posted an event, `Ok(false)` when
    /// none was due and `Err(QueueFull)` when a due event got dropped.
    pub fn fire(&mut self) -> Result<bool, Error> {
        self.firings += 1;
        if self.firings < self.divider {
            return Ok(false);
        }
        self.firings = 0;
        let event = TickEvent::new(self.seq);
        self.seq = self.seq.wrapping_add(1);
        self.producer.enqueue(event).map(|_| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_round_trip() {
        let mut queue = EventQueue::new();
        let (mut tx, mut rx) = queue.split();
        assert!(rx.is_empty());

        for k in 0..=QUEUE_CAPACITY as u8 {
            for seq in 0..k {
                tx.enqueue(TickEvent::new(seq)).unwrap();
            }
            assert_eq!(rx.len(), k as usize);
            for seq in 0..k {
                assert_eq!(rx.dequeue(), Some(TickEvent::new(seq)));
            }
            assert!(rx.is_empty());
        }
    }

    #[test]
    fn dequeue_on_empty_returns_nothing() {
        let mut queue = EventQueue::new();
        let (_, mut rx) = queue.split();
        assert_eq!(rx.dequeue(), None);
        assert_eq!(rx.try_dequeue(), Err(Error::QueueEmpty));
    }

    #[test]
    fn overflow_drops_newest() {
        let mut queue = EventQueue::new();
        let (mut tx, mut rx) = queue.split();

        for seq in 0..QUEUE_CAPACITY as u8 {
            tx.enqueue(TickEvent::new(seq)).unwrap();
        }
        assert!(tx.is_full());
        assert_eq!(tx.enqueue(TickEvent::new(100)), Err(Error::QueueFull));
        assert_eq!(tx.enqueue(TickEvent::new(101)), Err(Error::QueueFull));
        assert_eq!(rx.dropped(), 2);
        assert_eq!(rx.take_dropped(), 2);
        assert_eq!(rx.take_dropped(), 0);

        // oldest entries survive untouched
        for seq in 0..QUEUE_CAPACITY as u8 {
            assert_eq!(rx.dequeue().map(|e| e.seq()), Some(seq));
        }
        assert_eq!(rx.dequeue(), None);

        tx.enqueue(TickEvent::new(7)).unwrap();
        assert_eq!(rx.dequeue().map(|e| e.seq()), Some(7));
    }

    #[test]
    fn source_posts_every_fourth_firing() {
        let mut queue = EventQueue::new();
        let (tx, mut rx) = queue.split();
        let mut source = TickSource::new(tx, 4);

        let posted: heapless::Vec<bool, 12> = (0..12).map(|_| source.fire().unwrap()).collect();
        assert_eq!(
            posted.as_slice(),
            &[false, false, false, true, false, false, false, true, false, false, false, true]
        );
        assert_eq!(rx.dequeue().map(|e| e.seq()), Some(0));
        assert_eq!(rx.dequeue().map(|e| e.seq()), Some(1));
        assert_eq!(rx.dequeue().map(|e| e.seq()), Some(2));
        assert!(rx.is_empty());
    }

    #[test]
    fn source_reports_dropped_tick() {
        let mut queue = EventQueue::new();
        let (tx, rx) = queue.split();
        let mut source = TickSource::new(tx, 1);

        for _ in 0..QUEUE_CAPACITY {
            assert_eq!(source.fire(), Ok(true));
        }
        assert_eq!(source.fire(), Err(Error::QueueFull));
        assert_eq!(rx.dropped(), 1);
    }
}
