//! Presentation Model - was auf Display und LEDs landet
//!
//! Reine Logik: baut Textzeilen und LED-Farben aus dem Messergebnis.
//! Das eigentliche Zeichnen erledigen die Implementierungen von
//! [`MeterDisplay`](crate::traits::MeterDisplay) und
//! [`BandLedWriter`](crate::traits::BandLedWriter).

use core::fmt::Write;

use heapless::String;
use rgb::RGB8;

use crate::colors::{BandColor, dim};
use crate::traits::{BAND_LED_COUNT, BandLedWriter, DisplayError, LedError, MeterDisplay};
use crate::types::{Classification, MeasurementError};

/// Puffergröße einer Displayzeile in Bytes
///
/// Sichtbar sind 20 Zeichen (123 px neben dem Rand / 6 px Font). Die Reserve
/// fasst Umlaute, die in UTF-8 zwei Bytes belegen ("Weiß", "Grün").
pub const SCREEN_LINE_LEN: usize = 24;

/// Überschrift des Displays
pub const SCREEN_TITLE: &str = "Ohmmeter E24";

pub type ScreenLine = String<SCREEN_LINE_LEN>;

/// Formatiert einen Messwert: `"680"`, `"4.7k"`, `"1.2M"`
///
/// Werte unter 1 kOhm ohne Nachkommastelle, darüber eine Stelle.
pub fn format_resistance(ohms: f32) -> String<16> {
    let mut out = String::new();
    // Überlauf nur bei absurden Werten, dann bleibt der Text abgeschnitten
    let _ = if ohms >= 1_000_000.0 {
        write!(out, "{:.1}M", ohms / 1_000_000.0)
    } else if ohms >= 1_000.0 {
        write!(out, "{:.1}k", ohms / 1_000.0)
    } else {
        write!(out, "{:.0}", ohms)
    };
    out
}

/// Kurztext für einen Messfehler
pub fn fault_label(error: MeasurementError) -> &'static str {
    match error {
        MeasurementError::Adc => "ADC-Fehler",
        MeasurementError::OpenCircuit => "Kein Widerstand",
        MeasurementError::ShortCircuit => "Kurzschluss",
        MeasurementError::BelowRange => "Unter 1 Ohm",
        MeasurementError::OutOfRange => "Zu groß",
    }
}

/// Inhalt eines Display-Frames (unter der Überschrift)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    /// `"Gemessen: 10.0k"`
    pub measured: ScreenLine,
    /// `"E24: 10k"` oder Fehlermeldung
    pub nominal: ScreenLine,
    /// Ring 1, Ring 2, Multiplikator (leer bei Fehler)
    pub bands: [ScreenLine; 3],
}

impl Screen {
    pub fn from_outcome(outcome: &Result<Classification, MeasurementError>) -> Self {
        let mut screen = Screen::default();

        match outcome {
            Ok(classification) => {
                let _ = write!(
                    screen.measured,
                    "Gemessen: {}",
                    format_resistance(classification.ohms)
                );
                let _ = write!(screen.nominal, "E24: {}", classification.nominal);

                if let Some(colors) = classification.bands.colors() {
                    const LABELS: [&str; 3] = ["1. Ring", "2. Ring", "Mult"];
                    for ((line, label), color) in
                        screen.bands.iter_mut().zip(LABELS).zip(colors)
                    {
                        let _ = write!(line, "{}: {}", label, color.name());
                    }
                }
            }
            Err(error) => {
                let _ = screen.measured.push_str("Gemessen: --");
                let _ = screen.nominal.push_str(fault_label(*error));
            }
        }

        screen
    }

    /// Alle Zeilen in Anzeigereihenfolge (ohne Überschrift)
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [&self.measured, &self.nominal]
            .into_iter()
            .chain(self.bands.iter())
            .map(|line| line.as_str())
    }
}

/// LED-Frame für die drei Ring-LEDs
///
/// Bei einem Messfehler bleiben alle LEDs dunkel.
pub fn band_led_colors(
    outcome: &Result<Classification, MeasurementError>,
    brightness_percent: u8,
) -> [RGB8; BAND_LED_COUNT] {
    const DARK: [RGB8; BAND_LED_COUNT] = [RGB8 { r: 0, g: 0, b: 0 }; BAND_LED_COUNT];

    let Ok(classification) = outcome else {
        return DARK;
    };

    match classification.bands.colors() {
        Some(colors) => colors.map(|color: BandColor| dim(color.rgb(), brightness_percent)),
        None => DARK,
    }
}

/// Ergebnis der Ausgabe eines Messzyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentStatus {
    pub display: Result<(), DisplayError>,
    pub leds: Result<(), LedError>,
}

impl PresentStatus {
    pub fn is_ok(&self) -> bool {
        self.display.is_ok() && self.leds.is_ok()
    }
}

/// Gibt ein Messergebnis auf Display und LEDs aus
///
/// Beide Ausgaben werden immer versucht, ein Fehler der einen blockiert
/// die andere nicht. Fehler werden nur gemeldet, nie weitergereicht:
/// der nächste Messzyklus läuft in jedem Fall.
pub fn present<S, L>(
    outcome: &Result<Classification, MeasurementError>,
    display: &mut S,
    leds: &mut L,
    brightness_percent: u8,
) -> PresentStatus
where
    S: MeterDisplay,
    L: BandLedWriter,
{
    let screen = Screen::from_outcome(outcome);
    PresentStatus {
        display: display.show(&screen),
        leds: leds.write(band_led_colors(outcome, brightness_percent)),
    }
}
