// AdcSource Implementierung für ESP32
//
// ADC1 im One-Shot-Modus am Mittelpunkt des Spannungsteilers.

use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO2};
use ohm_core::{AdcError, AdcSource};

/// ADC-Kanal am Spannungsteiler
///
/// 11 dB Dämpfung: voller Messbereich bis ca. 3.3 V, 12 Bit (0..=4095).
pub struct EspAdcSource<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    pin: AdcPin<GPIO2<'d>, ADC1<'d>>,
}

impl<'d> EspAdcSource<'d> {
    pub fn new(adc1: ADC1<'d>, gpio2: GPIO2<'d>) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin(gpio2, Attenuation::_11dB);
        let adc = Adc::new(adc1, config);

        Self { adc, pin }
    }
}

impl AdcSource for EspAdcSource<'_> {
    fn read(&mut self) -> Result<u16, AdcError> {
        nb::block!(self.adc.read_oneshot(&mut self.pin)).map_err(|_| AdcError::ReadFailed)
    }
}
