#![no_main]
#![no_std]

// sets default panic handler
#[allow(unused_imports)]
use panic_itm;

use core::cell::RefCell;

use cortex_m::{interrupt::Mutex, peripheral::NVIC};
// provides _start symbol
use cortex_m_rt::entry;

use stm32f3xx_hal as stm32f303;

use stm32f303::{
    delay::Delay,
    pac::{self, interrupt, Interrupt},
    prelude::*,
    timer::Timer,
};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use peripherals::{buttons, freeze_clocks, logger::*, ppu, ticker, Button, Edge};

use flappy::{Builder, Config, EventQueue, InputLatch, TickSource};

mod context;
use context::DiscoveryContext;

static LATCH: InputLatch = InputLatch::new();

static TICK: Mutex<RefCell<Option<TickSource<'static>>>> = Mutex::new(RefCell::new(None));
static TIMER: Mutex<RefCell<Option<Timer<pac::TIM2>>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().expect("Failed requesting peripherals");
    let dp = pac::Peripherals::take().expect("Failed requesting peripherals");

    let logger = create_itm_logger(LevelFilter::Info, cp.ITM);
    unsafe { init(&logger) }
    info!("init process started");

    buttons::enable_syscfg(&dp.RCC);

    info!("configuring clocks");
    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();

    let sysclk_freq = 36.mhz();
    let clocks = freeze_clocks(sysclk_freq, rcc.cfgr, &mut flash);
    let mut delay = Delay::new(cp.SYST, clocks);

    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);
    let mut gpiob = dp.GPIOB.split(&mut rcc.ahb);

    info!("configuring buttons");
    let _jump = gpioa.pa0.into_floating_input(&mut gpioa.moder, &mut gpioa.pupdr);
    let _restart = gpioa.pa1.into_pull_up_input(&mut gpioa.moder, &mut gpioa.pupdr);
    buttons::listen(&dp.EXTI, Button::Jump, Edge::Rising);
    buttons::listen(&dp.EXTI, Button::Restart, Edge::Falling);

    let rst = gpiob
        .pb0
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let dc = gpiob
        .pb1
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let cs = gpiob
        .pb11
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);

    let sck = gpiob.pb13.into_af5(&mut gpiob.moder, &mut gpiob.afrh);
    let miso = gpiob.pb14.into_af5(&mut gpiob.moder, &mut gpiob.afrh);
    let mosi = gpiob.pb15.into_af5(&mut gpiob.moder, &mut gpiob.afrh);

    let display = ppu::init_ssd1306_on_spi2(
        8.mhz(),
        dp.SPI2,
        (sck, miso, mosi),
        (cs, dc, rst),
        &mut rcc.apb1,
        &mut delay,
        clocks,
    );

    let config = Config::default();

    let queue: &'static mut EventQueue =
        cortex_m::singleton!(: EventQueue = EventQueue::new()).expect("event queue taken twice");
    let (producer, consumer) = queue.split();

    let timer = ticker::init_tim2_tick(1.hz(), dp.TIM2, &mut rcc.apb1, clocks);
    cortex_m::interrupt::free(|cs| {
        TICK.borrow(cs)
            .replace(Some(TickSource::new(producer, config.tick_divider)));
        TIMER.borrow(cs).replace(Some(timer));
    });

    let ctx = DiscoveryContext { display, delay };
    let mut game = Builder::new()
        .with_context(ctx)
        .with_consumer(consumer)
        .with_latch(&LATCH)
        .with_config(config)
        .build()
        .expect("Failed building game");

    info!("unmasking interrupts");
    unsafe {
        NVIC::unmask(Button::Jump.interrupt());
        NVIC::unmask(Button::Restart.interrupt());
        NVIC::unmask(Interrupt::TIM2);
    }

    info!("init done, waiting for a press");
    game.run()
}

#[interrupt]
fn EXTI0() {
    buttons::acknowledge(Button::Jump);
    LATCH.press_jump();
}

#[interrupt]
fn EXTI1() {
    buttons::acknowledge(Button::Restart);
    LATCH.press_restart();
}

#[interrupt]
fn TIM2() {
    cortex_m::interrupt::free(|cs| {
        if let Some(timer) = TIMER.borrow(cs).borrow_mut().as_mut() {
            ticker::acknowledge(timer);
        }
        if let Some(tick) = TICK.borrow(cs).borrow_mut().as_mut() {
            // overflow is counted by the queue and reported by the main loop
            let _ = tick.fire();
        }
    });
}
