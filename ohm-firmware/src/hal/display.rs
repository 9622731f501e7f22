// MeterDisplay Implementierung: SSD1306 OLED (128x64) über I2C
//
// Buffered Graphics Mode: alles wird im RAM gezeichnet und
// anschließend mit einem flush() übertragen (kein Flackern).

use embedded_graphics::{
    mono_font::{MonoTextStyle, iso_8859_1::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::{Baseline, Text},
};
use esp_hal::Blocking;
use esp_hal::i2c::master::I2c;
use ohm_core::presentation::SCREEN_TITLE;
use ohm_core::{DisplayError, MeterDisplay, Screen};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::size::DisplaySize128x64;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::{OLED_LINE_HEIGHT, OLED_MARGIN_X};

type OledDriver<'d> = Ssd1306<
    I2CInterface<I2c<'d, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// Y-Position der Trennlinie unter der Überschrift
const SEPARATOR_Y: i32 = 10;

/// Y-Position der ersten Textzeile unter der Trennlinie
const FIRST_LINE_Y: i32 = 13;

pub struct OledDisplay<'d> {
    driver: OledDriver<'d>,
}

impl<'d> OledDisplay<'d> {
    /// Initialisiert das Display und löscht den Inhalt
    ///
    /// # Parameter
    /// - `i2c`: Konfigurierter I2C-Bus (SDA/SCL bereits zugewiesen)
    /// - `address`: I2C-Adresse (meist 0x3C)
    pub fn new(i2c: I2c<'d, Blocking>, address: u8) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        driver.init().map_err(|_| DisplayError::FlushFailed)?;
        driver
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::DrawFailed)?;
        driver.flush().map_err(|_| DisplayError::FlushFailed)?;

        Ok(Self { driver })
    }

    fn draw(&mut self, screen: &Screen) -> Result<(), <OledDriver<'d> as DrawTarget>::Error> {
        let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

        self.driver.clear(BinaryColor::Off)?;

        // Überschrift + Trennlinie
        Text::with_baseline(SCREEN_TITLE, Point::new(15, 0), text_style, Baseline::Top)
            .draw(&mut self.driver)?;
        Line::new(Point::new(0, SEPARATOR_Y), Point::new(127, SEPARATOR_Y))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.driver)?;

        let mut y = FIRST_LINE_Y;
        for line in screen.lines() {
            Text::with_baseline(line, Point::new(OLED_MARGIN_X, y), text_style, Baseline::Top)
                .draw(&mut self.driver)?;
            y += OLED_LINE_HEIGHT;
        }

        Ok(())
    }
}

impl MeterDisplay for OledDisplay<'_> {
    fn show(&mut self, screen: &Screen) -> Result<(), DisplayError> {
        self.draw(screen).map_err(|_| DisplayError::DrawFailed)?;
        self.driver.flush().map_err(|_| DisplayError::FlushFailed)
    }
}
