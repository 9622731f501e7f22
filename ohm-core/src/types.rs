//! Core Types für die Widerstandsmessung
//!
//! Datenstrukturen ohne Hardware-Dependencies. Alle Werte leben nur für
//! einen Messzyklus und werden danach verworfen.

use core::fmt;

use crate::traits::AdcError;

/// Gemittelter ADC-Wert (Mittelwert über N Rohwerte)
///
/// Erwartet wird `0 <= value <= adc_max_code`. Der [`SampleAccumulator`]
/// klemmt Rohwerte entsprechend, bevor gemittelt wird; `new` selbst prüft
/// nichts, weil es den ADC-Maximalwert nicht kennt. Werte von außerhalb
/// fängt die Messkette ab: `>= adc_max_code` meldet der Schätzer als
/// `OpenCircuit`, negative Werte und NaN der E24-Matcher als `ShortCircuit`.
///
/// [`SampleAccumulator`]: crate::sampler::SampleAccumulator
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AveragedReading(f32);

impl AveragedReading {
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Nächster Normwert der E24-Reihe in Ohm
///
/// Immer zwei signifikante Stellen (z.B. 470, 4700, 10000).
/// Ausnahme: in der Dekade 1..10 Ohm wird auf ganze Ohm gerundet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NominalValue(u64);

impl NominalValue {
    pub const fn new(ohms: u64) -> Self {
        Self(ohms)
    }

    pub const fn ohms(self) -> u64 {
        self.0
    }
}

/// Schreibweise wie auf Bauteil-Listen: `470`, `4.7k`, `10k`, `2.2M`
impl fmt::Display for NominalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNITS: [(u64, &str); 3] = [(1_000_000_000, "G"), (1_000_000, "M"), (1_000, "k")];

        for (divisor, suffix) in UNITS {
            if self.0 >= divisor {
                let whole = self.0 / divisor;
                let tenth = (self.0 % divisor) / (divisor / 10);
                return if tenth == 0 {
                    write!(f, "{}{}", whole, suffix)
                } else {
                    write!(f, "{}.{}{}", whole, tenth, suffix)
                };
            }
        }

        write!(f, "{}", self.0)
    }
}

/// Die drei Farbringe eines Widerstands (ohne Toleranzring)
///
/// `digit1` und `digit2` liegen in `0..=9`, `multiplier` ist der
/// Zehner-Exponent und für alle Werte aus dem E24-Matcher ebenfalls `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistorBands {
    pub digit1: u8,
    pub digit2: u8,
    pub multiplier: u8,
}

/// Ergebnis eines erfolgreichen Messzyklus
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// Gemittelter ADC-Wert
    pub reading: AveragedReading,
    /// Geschätzter Widerstand in Ohm
    pub ohms: f32,
    /// Nächster E24-Normwert
    pub nominal: NominalValue,
    /// Farbringe des Normwerts
    pub bands: ResistorBands,
}

/// Fehler-Typ für einen Messzyklus
///
/// Jeder Fehler betrifft nur den aktuellen Zyklus; die Messschleife läuft
/// danach normal weiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementError {
    /// ADC-Lesevorgang fehlgeschlagen
    Adc,
    /// Mittelwert erreicht den ADC-Maximalwert: kein Widerstand eingesteckt
    OpenCircuit,
    /// Geschätzter Widerstand ist null oder negativ
    ShortCircuit,
    /// Unter 1 Ohm, keine E24-Dekade darstellbar
    BelowRange,
    /// Multiplikator-Ring wäre größer als 9 (Weiß)
    OutOfRange,
}

impl From<AdcError> for MeasurementError {
    fn from(_: AdcError) -> Self {
        MeasurementError::Adc
    }
}

impl fmt::Display for MeasurementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MeasurementError::Adc => "ADC read failed",
            MeasurementError::OpenCircuit => "open circuit (no resistor)",
            MeasurementError::ShortCircuit => "short circuit (non-positive resistance)",
            MeasurementError::BelowRange => "resistance below 1 ohm",
            MeasurementError::OutOfRange => "resistance above the color code range",
        };
        f.write_str(msg)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ResistorBands {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ResistorBands {{ {}, {}, x10^{} }}",
            self.digit1,
            self.digit2,
            self.multiplier
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Classification {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Classification {{ adc: {}, ohms: {}, nominal: {}, bands: {} }}",
            self.reading.value(),
            self.ohms,
            self.nominal.ohms(),
            self.bands
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    fn render(value: u64) -> heapless::String<16> {
        let mut out = heapless::String::new();
        write!(out, "{}", NominalValue::new(value)).unwrap();
        out
    }

    #[test]
    fn test_nominal_display_plain_ohms() {
        assert_eq!(render(470).as_str(), "470");
        assert_eq!(render(47).as_str(), "47");
        assert_eq!(render(5).as_str(), "5");
    }

    #[test]
    fn test_nominal_display_kilo() {
        assert_eq!(render(1_000).as_str(), "1k");
        assert_eq!(render(4_700).as_str(), "4.7k");
        assert_eq!(render(10_000).as_str(), "10k");
        assert_eq!(render(220_000).as_str(), "220k");
    }

    #[test]
    fn test_nominal_display_mega_and_giga() {
        assert_eq!(render(2_200_000).as_str(), "2.2M");
        assert_eq!(render(91_000_000).as_str(), "91M");
        assert_eq!(render(1_500_000_000).as_str(), "1.5G");
        assert_eq!(render(91_000_000_000).as_str(), "91G");
    }

    #[test]
    fn test_adc_error_maps_to_measurement_error() {
        let err: MeasurementError = AdcError::ReadFailed.into();
        assert_eq!(err, MeasurementError::Adc);
    }
}
