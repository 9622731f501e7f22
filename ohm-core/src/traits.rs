//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::presentation::Screen;

/// Anzahl der LEDs für die Farbringe (eine LED pro Ring)
pub const BAND_LED_COUNT: usize = 3;

/// Fehler-Typ für ADC-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    ReadFailed,
}

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für Display-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    DrawFailed,
    FlushFailed,
}

/// Trait für den ADC-Kanal am Spannungsteiler
///
/// Der Kanal ist bereits konfiguriert und ausgewählt; `read()` liefert
/// einen Rohwert im Bereich `0..=adc_max_code`.
///
/// # Implementierungen
/// - **Production:** EspAdcSource (ESP32-C6 ADC1, One-Shot)
/// - **Testing:** MockAdc (vorgegebene Rohwerte)
pub trait AdcSource {
    /// Liest einen Rohwert
    ///
    /// # Fehlerbehandlung
    /// Gibt `AdcError::ReadFailed` zurück wenn die Wandlung fehlschlägt
    fn read(&mut self) -> Result<u16, AdcError>;
}

/// Trait für die drei SmartLEDs (WS2812/Neopixel) der Farbringe
///
/// # Implementierungen
/// - **Production:** RmtBandLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockBandLeds (in-memory Mock)
pub trait BandLedWriter {
    /// Schreibt die Farben der drei Ringe (1. Ziffer, 2. Ziffer, Multiplikator)
    fn write(&mut self, colors: [RGB8; BAND_LED_COUNT]) -> Result<(), LedError>;
}

/// Optionale LED-Kette: `None` verwirft jeden Frame ohne Fehler
///
/// Damit läuft die Messung auch weiter, wenn die LEDs beim Start nicht
/// initialisiert werden konnten; das Display bleibt die Hauptausgabe.
impl<L: BandLedWriter> BandLedWriter for Option<L> {
    fn write(&mut self, colors: [RGB8; BAND_LED_COUNT]) -> Result<(), LedError> {
        match self {
            Some(leds) => leds.write(colors),
            None => Ok(()),
        }
    }
}

/// Trait für die Textanzeige (OLED)
///
/// # Implementierungen
/// - **Production:** OledDisplay (SSD1306 über I2C)
/// - **Testing:** MockDisplay
pub trait MeterDisplay {
    /// Zeichnet einen kompletten Bildschirm und überträgt ihn
    fn show(&mut self, screen: &Screen) -> Result<(), DisplayError>;
}
