//! Messkette: Sampler → Schätzer → E24-Matcher → Farbringe
//!
//! Ein Aufruf = ein Messzyklus. Es gibt keinen Zustand zwischen den
//! Zyklen; jeder Fehler betrifft nur den laufenden Zyklus.

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;

use crate::config::{DividerConfig, MeterConfig};
use crate::e24::closest;
use crate::estimator::estimate;
use crate::sampler::Sampler;
use crate::traits::AdcSource;
use crate::types::{AveragedReading, Classification, MeasurementError, ResistorBands};

/// Klassifiziert einen gemittelten ADC-Wert
///
/// # Beispiele
///
/// ```
/// # use ohm_core::{AveragedReading, DividerConfig, classify};
/// let result = classify(AveragedReading::new(2048.0), &DividerConfig::default()).unwrap();
/// assert_eq!(result.nominal.ohms(), 10_000);
/// assert_eq!((result.bands.digit1, result.bands.digit2, result.bands.multiplier), (1, 0, 3));
/// ```
pub fn classify(
    reading: AveragedReading,
    divider: &DividerConfig,
) -> Result<Classification, MeasurementError> {
    let ohms = estimate(reading, divider)?;
    let nominal = closest(ohms)?;
    let bands = ResistorBands::from_nominal(nominal);

    Ok(Classification {
        reading,
        ohms,
        nominal,
        bands,
    })
}

/// Ohmmeter mit fester Konfiguration
#[derive(Debug, Clone, Copy, Default)]
pub struct Ohmmeter {
    config: MeterConfig,
}

impl Ohmmeter {
    pub fn new(config: MeterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    fn sampler(&self) -> Sampler {
        Sampler::new(self.config.sampler, self.config.divider.adc_max_code())
    }

    /// Ein kompletter Messzyklus (blockierend)
    pub fn measure<A, D>(&self, adc: &mut A, delay: &mut D) -> Result<Classification, MeasurementError>
    where
        A: AdcSource,
        D: DelayNs,
    {
        let reading = self.sampler().sample(adc, delay)?;
        classify(reading, &self.config.divider)
    }

    /// Ein kompletter Messzyklus (async, Pausen über Timer)
    pub async fn measure_async<A, D>(
        &self,
        adc: &mut A,
        delay: &mut D,
    ) -> Result<Classification, MeasurementError>
    where
        A: AdcSource,
        D: AsyncDelayNs,
    {
        let reading = self.sampler().sample_async(adc, delay).await?;
        classify(reading, &self.config.divider)
    }
}
