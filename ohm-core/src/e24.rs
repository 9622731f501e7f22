//! E24 Matcher - nächster Normwert der E24-Reihe (5 %)
//!
//! Der Messwert wird auf seine Dekade normiert, gegen die 24 Mantissen
//! verglichen und wieder in die Dekade zurückskaliert.

use crate::types::{MeasurementError, NominalValue};

/// Mantissen der E24-Reihe, zwei signifikante Stellen (100 = 1.00)
pub const E24_SERIES: [u16; 24] = [
    100, 110, 120, 130, 150, 160, 180, 200, 220, 240, 270, 300, 330, 360, 390, 430, 470, 510,
    560, 620, 680, 750, 820, 910,
];

/// Größter Dekaden-Exponent: ergibt Multiplikator 9 (Weiß)
pub const MAX_DECADE_EXPONENT: u32 = 10;

/// Zehnerpotenz als f64; bis 10^22 exakt darstellbar
fn pow10(exp: u32) -> f64 {
    let mut value = 1.0;
    for _ in 0..exp {
        value *= 10.0;
    }
    value
}

/// `floor(log10(x))` für `x >= 1`
///
/// log10 kann an exakten Zehnerpotenzen um ein ulp danebenliegen,
/// daher wird das Ergebnis gegen die Potenzen selbst korrigiert.
fn decade_exponent(x: f64) -> u32 {
    let mut exp = libm::floor(libm::log10(x)).max(0.0) as u32;
    if exp > 0 && pow10(exp) > x {
        exp -= 1;
    } else if pow10(exp + 1) <= x {
        exp += 1;
    }
    exp
}

/// Nächste Mantisse zur auf ×100 skalierten Mantisse (`100.0..1000.0`)
///
/// Bei Gleichstand gewinnt der erste Eintrag der Tabelle.
pub fn nearest_entry(scaled_mantissa: f64) -> u16 {
    let mut best = E24_SERIES[0];
    let mut best_diff = libm::fabs(scaled_mantissa - f64::from(best));

    for &entry in &E24_SERIES[1..] {
        let diff = libm::fabs(scaled_mantissa - f64::from(entry));
        if diff < best_diff {
            best = entry;
            best_diff = diff;
        }
    }

    best
}

/// Findet den nächsten E24-Normwert zum Messwert in Ohm
///
/// # Fehlerbehandlung
/// - `measured <= 0` oder NaN → `MeasurementError::ShortCircuit`
/// - `measured < 1` → `MeasurementError::BelowRange`
/// - unendlich oder Dekade über 10^10 → `MeasurementError::OutOfRange`
///
/// In der Dekade 1..10 Ohm wird auf ganze Ohm gerundet (4.7 → 5).
///
/// # Beispiele
///
/// ```
/// # use ohm_core::closest;
/// assert_eq!(closest(10_004.9).unwrap().ohms(), 10_000);
/// assert_eq!(closest(999.9).unwrap().ohms(), 910);
/// assert_eq!(closest(1_000.0).unwrap().ohms(), 1_000);
/// ```
pub fn closest(measured: f32) -> Result<NominalValue, MeasurementError> {
    // `!(x > 0)` fängt auch NaN ab
    if !(measured > 0.0) {
        return Err(MeasurementError::ShortCircuit);
    }
    if !measured.is_finite() {
        return Err(MeasurementError::OutOfRange);
    }
    if measured < 1.0 {
        return Err(MeasurementError::BelowRange);
    }

    let x = f64::from(measured);
    let exp = decade_exponent(x);
    if exp > MAX_DECADE_EXPONENT {
        return Err(MeasurementError::OutOfRange);
    }

    // Erst mit 100 multiplizieren, dann teilen: ganzzahlige Messwerte
    // bleiben so exakt und Gleichstände werden erkannt.
    let scaled = x * 100.0 / pow10(exp);
    let entry = u64::from(nearest_entry(scaled));

    let ohms = match exp {
        0 | 1 => (entry * 10u64.pow(exp) + 50) / 100,
        _ => entry * 10u64.pow(exp - 2),
    };

    Ok(NominalValue::new(ohms))
}
