//! SSD1306 128x64 panel on SPI2.
//!
//! The panel's eight 8-pixel pages are the page rows the game addresses.

use stm32f3xx_hal as stm32f303;

use ssd1306::{prelude::*, Builder};
use stm32f303::{
    delay::Delay,
    hal::digital::v2::OutputPin,
    rcc,
    spi::{MisoPin, Mode, MosiPin, Phase, Polarity, SckPin, Spi},
    stm32::SPI2,
    time::Hertz,
};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub fn init_ssd1306_on_spi2<H, SCK, MISO, MOSI, CS, DC, RST>(
    freq: H,
    spi2: SPI2,
    (sck, miso, mosi): (SCK, MISO, MOSI),
    (cs, dc, mut rst): (CS, DC, RST),
    apb1: &mut rcc::APB1,
    delay: &mut Delay,
    clocks: rcc::Clocks,
) -> GraphicsMode<impl WriteOnlyDataCommand>
where
    H: Into<Hertz>,
    SCK: SckPin<SPI2>,
    MISO: MisoPin<SPI2>,
    MOSI: MosiPin<SPI2>,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    info!("configuring ssd1306 display via spi2");
    let spi_mode = Mode {
        polarity: Polarity::IdleLow,
        phase: Phase::CaptureOnFirstTransition,
    };

    let spi = Spi::spi2(spi2, (sck, miso, mosi), spi_mode, freq.into(), clocks, apb1);

    let interface = SPIInterface::new(spi, dc, cs);
    let mut disp: GraphicsMode<_> = Builder::new()
        .size(DisplaySize128x64)
        .connect(interface)
        .into();

    if disp.reset(&mut rst, delay).is_err() {
        warn!("display reset line failed");
    }
    if disp.init().is_err() {
        error!("display did not acknowledge init sequence");
    }
    disp.clear();
    debug!("display size: {:?}", disp.get_dimensions());
    disp
}
