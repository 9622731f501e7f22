//! Sampler - Mittelwert über N ADC-Rohwerte
//!
//! Glättet Rauschen und Welligkeit am Spannungsteiler. Die eigentliche
//! Summenbildung steckt im [`SampleAccumulator`] (pure Logic), die
//! Lese-Schleifen gibt es blockierend und async.

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;

use crate::config::SamplerConfig;
use crate::traits::{AdcError, AdcSource};
use crate::types::AveragedReading;

/// Summiert eine feste Anzahl Rohwerte auf
///
/// Rohwerte über `adc_max_code` werden geklemmt, damit der Mittelwert
/// nie außerhalb des ADC-Bereichs liegt. Nach `target` Werten werden
/// weitere `push()`-Aufrufe ignoriert.
#[derive(Debug, Clone)]
pub struct SampleAccumulator {
    target: u16,
    taken: u16,
    sum: u32,
    adc_max_code: u16,
}

impl SampleAccumulator {
    pub fn new(config: &SamplerConfig, adc_max_code: u16) -> Self {
        Self {
            target: config.sample_count(),
            taken: 0,
            sum: 0,
            adc_max_code,
        }
    }

    pub fn push(&mut self, raw: u16) {
        if self.is_complete() {
            return;
        }
        // u16 * u16 passt immer in u32
        self.sum += u32::from(raw.min(self.adc_max_code));
        self.taken += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.taken >= self.target
    }

    pub fn taken(&self) -> u16 {
        self.taken
    }

    /// Mittelwert, sobald alle Werte gesammelt sind
    pub fn average(&self) -> Option<AveragedReading> {
        if !self.is_complete() || self.taken == 0 {
            return None;
        }
        let mean = f64::from(self.sum) / f64::from(self.taken);
        Some(AveragedReading::new(mean as f32))
    }
}

/// Liest `sample_count` Rohwerte mit fester Pause und mittelt sie
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    config: SamplerConfig,
    adc_max_code: u16,
}

impl Sampler {
    pub fn new(config: SamplerConfig, adc_max_code: u16) -> Self {
        Self {
            config,
            adc_max_code,
        }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Blockierende Variante (Busy-Wait über `DelayNs`)
    ///
    /// Dauer ca. `sample_count * sample_interval_us`.
    pub fn sample<A, D>(&self, adc: &mut A, delay: &mut D) -> Result<AveragedReading, AdcError>
    where
        A: AdcSource,
        D: DelayNs,
    {
        let mut acc = SampleAccumulator::new(&self.config, self.adc_max_code);
        while !acc.is_complete() {
            acc.push(adc.read()?);
            delay.delay_us(self.config.sample_interval_us());
        }
        acc.average().ok_or(AdcError::ReadFailed)
    }

    /// Async Variante: gibt die CPU während der Pausen an andere Tasks ab
    ///
    /// Gleiche Reihenfolge und gleiche Anzahl Rohwerte wie [`Sampler::sample`].
    pub async fn sample_async<A, D>(
        &self,
        adc: &mut A,
        delay: &mut D,
    ) -> Result<AveragedReading, AdcError>
    where
        A: AdcSource,
        D: AsyncDelayNs,
    {
        let mut acc = SampleAccumulator::new(&self.config, self.adc_max_code);
        while !acc.is_complete() {
            acc.push(adc.read()?);
            delay.delay_us(self.config.sample_interval_us()).await;
        }
        acc.average().ok_or(AdcError::ReadFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(count: u16) -> SamplerConfig {
        SamplerConfig::new(count, 1_000).unwrap()
    }

    #[test]
    fn test_average_of_constant_samples() {
        let mut acc = SampleAccumulator::new(&config(4), 4095);
        for _ in 0..4 {
            acc.push(2048);
        }
        assert_eq!(acc.average(), Some(AveragedReading::new(2048.0)));
    }

    #[test]
    fn test_average_is_fractional() {
        let mut acc = SampleAccumulator::new(&config(4), 4095);
        for raw in [1, 2, 2, 2] {
            acc.push(raw);
        }
        assert_eq!(acc.average(), Some(AveragedReading::new(1.75)));
    }

    #[test]
    fn test_incomplete_has_no_average() {
        let mut acc = SampleAccumulator::new(&config(3), 4095);
        acc.push(100);
        acc.push(100);
        assert!(!acc.is_complete());
        assert_eq!(acc.average(), None);
    }

    #[test]
    fn test_extra_samples_ignored() {
        let mut acc = SampleAccumulator::new(&config(2), 4095);
        acc.push(10);
        acc.push(20);
        acc.push(4000);
        assert_eq!(acc.taken(), 2);
        assert_eq!(acc.average(), Some(AveragedReading::new(15.0)));
    }

    #[test]
    fn test_out_of_range_samples_clamped() {
        let mut acc = SampleAccumulator::new(&config(2), 4095);
        acc.push(u16::MAX);
        acc.push(4095);
        assert_eq!(acc.average(), Some(AveragedReading::new(4095.0)));
    }

    #[test]
    fn test_full_scale_sum_does_not_overflow() {
        let mut acc = SampleAccumulator::new(&config(u16::MAX), u16::MAX);
        for _ in 0..u16::MAX {
            acc.push(u16::MAX);
        }
        assert_eq!(acc.average(), Some(AveragedReading::new(65535.0)));
    }
}
