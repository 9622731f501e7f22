//! Resistance Estimator - Spannungsteiler invertieren
//!
//! `R_x = R_bekannt * reading / (adc_max - reading)`

use crate::config::DividerConfig;
use crate::types::{AveragedReading, MeasurementError};

/// Schätzt den unbekannten Widerstand aus dem gemittelten ADC-Wert
///
/// # Fehlerbehandlung
/// - `reading >= adc_max_code` → `MeasurementError::OpenCircuit`
///   (Division durch null, kein Widerstand eingesteckt)
/// - Ergebnis nicht endlich (riesiger bekannter Widerstand)
///   → `MeasurementError::OutOfRange`
///
/// `reading == 0` liefert `Ok(0.0)`; die Einordnung als Kurzschluss
/// übernimmt der E24-Matcher.
///
/// # Beispiele
///
/// ```
/// # use ohm_core::{AveragedReading, DividerConfig, estimate};
/// let divider = DividerConfig::default(); // 10 kOhm, 12 Bit
/// let ohms = estimate(AveragedReading::new(2048.0), &divider).unwrap();
/// assert!((ohms - 10_004.885).abs() < 0.01);
/// ```
pub fn estimate(
    reading: AveragedReading,
    divider: &DividerConfig,
) -> Result<f32, MeasurementError> {
    let max = f32::from(divider.adc_max_code());
    let value = reading.value();

    if value >= max {
        return Err(MeasurementError::OpenCircuit);
    }

    let ohms = divider.known_resistor_ohms() * value / (max - value);
    if ohms.is_infinite() {
        return Err(MeasurementError::OutOfRange);
    }

    Ok(ohms)
}
