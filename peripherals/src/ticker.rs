//! Periodic tick on TIM2.
//!
//! The game posts its obstacle-reset events from this timer's update
//! interrupt, once per second on the reference board.

use stm32f3xx_hal as stm32f303;

use stm32f303::{
    hal::timer::CountDown,
    pac::TIM2,
    rcc,
    time::Hertz,
    timer::{Event, Timer},
};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Start TIM2 at `freq` with its update interrupt enabled
///
/// The interrupt line still has to be unmasked in the NVIC.
pub fn init_tim2_tick<H>(freq: H, tim2: TIM2, apb1: &mut rcc::APB1, clocks: rcc::Clocks) -> Timer<TIM2>
where
    H: Into<Hertz> + Copy,
{
    info!("configuring timer2 as periodic tick");
    let mut timer = Timer::tim2(tim2, freq, clocks, apb1);
    timer.start(freq);
    timer.listen(Event::Update);
    debug!("tick frequency: {}hz", freq.into().0);
    timer
}

/// Acknowledge the update interrupt, to be called from the TIM2 handler
#[inline]
pub fn acknowledge(timer: &mut Timer<TIM2>) {
    // wait() clears the update flag when it is set
    let _ = timer.wait();
}
