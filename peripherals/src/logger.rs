//! ITM backend for the `log` facade, built on cortex_m_log.
//!
//! Interrupt handlers never log, so `InterruptFree` is the only mode worth
//! using: a log line is never torn by a button press.
//!
//! # Examples
//!
//! ```no_run
//! # use peripherals::logger::*;
//! # use log::info;
//! let p = cortex_m::Peripherals::take().unwrap();
//!
//! let logger = create_itm_logger(LevelFilter::Debug, p.ITM);
//! unsafe { init(&logger) };
//!
//! info!("game started");
//! ```

use core::marker::{Send, Sync};
use cortex_m::peripheral::ITM;
use cortex_m_log::{
    destination,
    log::{trick_init, Logger},
    printer::{itm::ItmSync, Printer},
};

pub use log::LevelFilter;

pub use cortex_m_log::modes::InterruptFree;

/// Logger writing to ITM stimulus port 0
///
/// Requires enabling ITM in openocd:
///
/// ```gdb
/// monitor tpiu config internal itm.out uart off 8000000
/// monitor itm port 0 on
/// ```
pub fn create_itm_logger(level: LevelFilter, itm_reg: ITM) -> Logger<ItmSync<InterruptFree>> {
    Logger {
        level,
        inner: ItmSync::<InterruptFree>::new(destination::Itm::new(itm_reg)),
    }
}

/// Register a logger with the log facade.
///
/// # Safety
///
/// Must be called once, and the logger must outlive every logging call: its
/// lifetime is extended to `'static` behind the compiler's back.
pub unsafe fn init<P>(logger: &Logger<P>)
where
    P: Printer + Send + Sync + 'static,
{
    // fails only when a logger is already registered, which then stays
    let _ = trick_init(logger);
}
