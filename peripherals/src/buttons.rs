//! Edge-triggered push buttons on EXTI lines 0 and 1.
//!
//! Both buttons sit on port A, which is the reset routing of the EXTI
//! multiplexer, so only the line masks and edge selectors are touched.

use stm32f3xx_hal as stm32f303;

use stm32f303::pac::{self, Interrupt, EXTI, RCC};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Button {
    /// PA0, the blue user button
    Jump,
    /// PA1, an external button to ground
    Restart,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

impl Button {
    pub fn line(self) -> u8 {
        match self {
            Button::Jump => 0,
            Button::Restart => 1,
        }
    }

    pub fn interrupt(self) -> Interrupt {
        match self {
            Button::Jump => Interrupt::EXTI0,
            Button::Restart => Interrupt::EXTI1,
        }
    }

    fn mask(self) -> u32 {
        1 << self.line()
    }
}

/// Clock the system configuration controller, must precede `listen`
///
/// Has to run before the RCC block gets constrained by the HAL.
pub fn enable_syscfg(rcc: &RCC) {
    rcc.apb2enr.modify(|_, w| w.syscfgen().set_bit());
}

/// Unmask the button's EXTI line and trigger it on `edge`
pub fn listen(exti: &EXTI, button: Button, edge: Edge) {
    let mask = button.mask();
    info!("button {:?} on exti{} triggers on {:?} edge", button, button.line(), edge);
    match edge {
        Edge::Rising => {
            exti.rtsr1.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
            exti.ftsr1.modify(|r, w| unsafe { w.bits(r.bits() & !mask) });
        }
        Edge::Falling => {
            exti.ftsr1.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
            exti.rtsr1.modify(|r, w| unsafe { w.bits(r.bits() & !mask) });
        }
    }
    exti.imr1.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
}

/// Clear the pending bit, to be called from the button's interrupt handler
#[inline]
pub fn acknowledge(button: Button) {
    // pending bits are cleared by writing ones, other lines are untouched
    unsafe { (*pac::EXTI::ptr()).pr1.write(|w| w.bits(button.mask())) }
}
