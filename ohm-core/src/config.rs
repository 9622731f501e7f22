//! Messparameter
//!
//! Ersetzt die globalen Konstanten der Hardware durch explizite
//! Konfiguration, die an Sampler und Schätzer übergeben wird.

use core::fmt;

/// Bekannter Widerstand im Spannungsteiler (Ohm)
pub const DEFAULT_KNOWN_RESISTOR_OHMS: f32 = 10_000.0;

/// Maximaler ADC-Wert (12 Bit)
pub const DEFAULT_ADC_MAX_CODE: u16 = 4095;

/// Anzahl Rohwerte pro Messung
pub const DEFAULT_SAMPLE_COUNT: u16 = 500;

/// Pause zwischen zwei Rohwerten (Mikrosekunden)
pub const DEFAULT_SAMPLE_INTERVAL_US: u32 = 1_000;

/// Fehler-Typ für ungültige Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    ZeroSampleCount,
    InvalidKnownResistor,
    ZeroAdcMaxCode,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::ZeroSampleCount => "sample count must be at least 1",
            ConfigError::InvalidKnownResistor => "known resistor must be a positive finite value",
            ConfigError::ZeroAdcMaxCode => "ADC max code must be greater than 0",
        };
        f.write_str(msg)
    }
}

/// Spannungsteiler: bekannter Widerstand und ADC-Auflösung
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DividerConfig {
    known_resistor_ohms: f32,
    adc_max_code: u16,
}

impl DividerConfig {
    pub fn new(known_resistor_ohms: f32, adc_max_code: u16) -> Result<Self, ConfigError> {
        if !known_resistor_ohms.is_finite() || known_resistor_ohms <= 0.0 {
            return Err(ConfigError::InvalidKnownResistor);
        }
        if adc_max_code == 0 {
            return Err(ConfigError::ZeroAdcMaxCode);
        }
        Ok(Self {
            known_resistor_ohms,
            adc_max_code,
        })
    }

    pub const fn known_resistor_ohms(&self) -> f32 {
        self.known_resistor_ohms
    }

    pub const fn adc_max_code(&self) -> u16 {
        self.adc_max_code
    }
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            known_resistor_ohms: DEFAULT_KNOWN_RESISTOR_OHMS,
            adc_max_code: DEFAULT_ADC_MAX_CODE,
        }
    }
}

/// Mittelwertbildung: Anzahl Rohwerte und Pause dazwischen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerConfig {
    sample_count: u16,
    sample_interval_us: u32,
}

impl SamplerConfig {
    pub fn new(sample_count: u16, sample_interval_us: u32) -> Result<Self, ConfigError> {
        if sample_count == 0 {
            return Err(ConfigError::ZeroSampleCount);
        }
        Ok(Self {
            sample_count,
            sample_interval_us,
        })
    }

    pub const fn sample_count(&self) -> u16 {
        self.sample_count
    }

    pub const fn sample_interval_us(&self) -> u32 {
        self.sample_interval_us
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            sample_interval_us: DEFAULT_SAMPLE_INTERVAL_US,
        }
    }
}

/// Gesamtkonfiguration des Ohmmeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterConfig {
    pub divider: DividerConfig,
    pub sampler: SamplerConfig,
}
