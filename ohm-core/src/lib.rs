//! Ohm Core - Platform-agnostic Messlogik und Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Messkette: ADC-Rohwerte → Mittelwert → Ohm → E24-Normwert → Farbringe.

#![no_std]

pub mod bands;
pub mod colors;
pub mod config;
pub mod e24;
pub mod estimator;
pub mod meter;
pub mod presentation;
pub mod sampler;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use bands::decompose;
pub use colors::{BandColor, dim};
pub use config::{ConfigError, DividerConfig, MeterConfig, SamplerConfig};
pub use e24::{E24_SERIES, closest};
pub use estimator::estimate;
pub use meter::{Ohmmeter, classify};
pub use presentation::{PresentStatus, Screen, band_led_colors, format_resistance, present};
pub use sampler::{SampleAccumulator, Sampler};
pub use traits::{
    AdcError, AdcSource, BAND_LED_COUNT, BandLedWriter, DisplayError, LedError, MeterDisplay,
};
pub use types::{AveragedReading, Classification, MeasurementError, NominalValue, ResistorBands};
