//! Band Decomposer - Normwert → drei Farbringe
//!
//! Zwei signifikante Ziffern plus Zehner-Exponent, wie beim
//! Farbcode mit vier Ringen (ohne Toleranzring).

use crate::colors::BandColor;
use crate::types::{NominalValue, ResistorBands};

/// Zerlegt einen ganzzahligen Widerstandswert in die drei Ringe
///
/// - `value < 10`: `(0, value, 0)`
/// - `10 <= value < 100`: `(Zehner, Einer, 0)`
/// - `value >= 100`: die zwei führenden Ziffern, Multiplikator = Stellen - 2
///
/// Stellen ab der dritten werden abgeschnitten. Für Werte aus dem
/// E24-Matcher gibt es keine solchen Stellen.
///
/// # Beispiele
///
/// ```
/// # use ohm_core::{decompose, ResistorBands};
/// let bands = decompose(4_700);
/// assert_eq!(bands, ResistorBands { digit1: 4, digit2: 7, multiplier: 2 });
/// ```
pub fn decompose(value: u64) -> ResistorBands {
    match value {
        0..=9 => ResistorBands {
            digit1: 0,
            digit2: value as u8,
            multiplier: 0,
        },
        10..=99 => ResistorBands {
            digit1: (value / 10) as u8,
            digit2: (value % 10) as u8,
            multiplier: 0,
        },
        _ => {
            let magnitude = value.ilog10();
            let leading = value / 10u64.pow(magnitude - 1);
            ResistorBands {
                digit1: (leading / 10) as u8,
                digit2: (leading % 10) as u8,
                multiplier: (magnitude - 1) as u8,
            }
        }
    }
}

impl ResistorBands {
    /// Ringe für einen E24-Normwert
    pub fn from_nominal(nominal: NominalValue) -> Self {
        decompose(nominal.ohms())
    }

    /// Umkehrung: `(digit1 * 10 + digit2) * 10^multiplier`
    pub fn value(&self) -> u64 {
        (u64::from(self.digit1) * 10 + u64::from(self.digit2))
            * 10u64.pow(u32::from(self.multiplier))
    }

    /// Farben der drei Ringe in Lesereihenfolge
    ///
    /// `None` falls ein Index außerhalb der Farbtabelle liegt.
    pub fn colors(&self) -> Option<[BandColor; 3]> {
        Some([
            BandColor::from_index(self.digit1)?,
            BandColor::from_index(self.digit2)?,
            BandColor::from_index(self.multiplier)?,
        ])
    }
}
