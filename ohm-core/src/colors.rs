//! Farbtabelle für Widerstandsringe
//!
//! 10 Ziffernfarben (0-9) plus Gold und Silber. Gold/Silber sind für
//! Toleranz und negative Multiplikatoren reserviert und werden vom
//! E24-Matcher nie erzeugt.

use rgb::RGB8;

/// Anzahl Einträge der Farbtabelle
pub const BAND_COLOR_COUNT: usize = 12;

/// Farbe eines Rings, Index = Ziffer bzw. Zehner-Exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

impl BandColor {
    pub const ALL: [BandColor; BAND_COLOR_COUNT] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Violet,
        BandColor::Grey,
        BandColor::White,
        BandColor::Gold,
        BandColor::Silver,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Anzeigename für das Display
    pub fn name(self) -> &'static str {
        match self {
            BandColor::Black => "Schwarz",
            BandColor::Brown => "Braun",
            BandColor::Red => "Rot",
            BandColor::Orange => "Orange",
            BandColor::Yellow => "Gelb",
            BandColor::Green => "Grün",
            BandColor::Blue => "Blau",
            BandColor::Violet => "Violett",
            BandColor::Grey => "Grau",
            BandColor::White => "Weiß",
            BandColor::Gold => "Gold",
            BandColor::Silver => "Silber",
        }
    }

    /// LED-Farbe bei voller Helligkeit (Kanäle 0-63)
    ///
    /// Werte auf WS2812 abgestimmt, nicht farbmetrisch exakt.
    pub fn rgb(self) -> RGB8 {
        let (r, g, b) = match self {
            BandColor::Black => (0, 0, 0),
            BandColor::Brown => (37, 18, 0),
            BandColor::Red => (63, 0, 0),
            BandColor::Orange => (63, 17, 0),
            BandColor::Yellow => (63, 63, 0),
            BandColor::Green => (0, 63, 0),
            BandColor::Blue => (0, 0, 63),
            BandColor::Violet => (32, 0, 32),
            BandColor::Grey => (32, 32, 32),
            BandColor::White => (63, 63, 63),
            BandColor::Gold => (53, 43, 13),
            BandColor::Silver => (48, 48, 48),
        };
        RGB8 { r, g, b }
    }
}

/// Skaliert eine Farbe auf `percent` Prozent (0-100, größere Werte = 100)
pub fn dim(color: RGB8, percent: u8) -> RGB8 {
    let percent = u16::from(percent.min(100));
    let scale = |channel: u8| (u16::from(channel) * percent / 100) as u8;
    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}
