//! Integration Tests für die Messkette
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockAdc / MockDelay

mod common;

use common::{MockAdc, MockDelay};
use embassy_futures::block_on;
use ohm_core::{
    BandColor, DividerConfig, MeasurementError, MeterConfig, Ohmmeter, SamplerConfig,
};

fn meter(known_ohms: f32, sample_count: u16) -> Ohmmeter {
    Ohmmeter::new(MeterConfig {
        divider: DividerConfig::new(known_ohms, 4095).unwrap(),
        sampler: SamplerConfig::new(sample_count, 1_000).unwrap(),
    })
}

// ============================================================================
// Tests: Blockierender Messzyklus
// ============================================================================

#[test]
fn test_measure_ten_kilo_end_to_end() {
    let meter = Ohmmeter::default();
    let mut adc = MockAdc::constant(2048);
    let mut delay = MockDelay::new();

    let result = meter.measure(&mut adc, &mut delay).unwrap();

    assert!((result.ohms - 10_004.885).abs() < 0.01);
    assert_eq!(result.nominal.ohms(), 10_000);
    assert_eq!(
        result.bands.colors(),
        Some([BandColor::Brown, BandColor::Black, BandColor::Orange])
    );
}

#[test]
fn test_measure_reads_configured_sample_count() {
    let meter = Ohmmeter::default();
    let mut adc = MockAdc::constant(2048);
    let mut delay = MockDelay::new();

    meter.measure(&mut adc, &mut delay).unwrap();

    assert_eq!(adc.read_count, 500);
    assert_eq!(delay.calls, 500);
    assert_eq!(delay.total_us(), 500_000); // 500 x 1 ms
}

#[test]
fn test_measure_averages_noise() {
    let meter = Ohmmeter::default();
    let mut adc = MockAdc::from_samples(vec![2047, 2049]);
    let mut delay = MockDelay::new();

    let result = meter.measure(&mut adc, &mut delay).unwrap();

    assert_eq!(result.reading.value(), 2048.0);
    assert_eq!(result.nominal.ohms(), 10_000);
}

#[test]
fn test_measure_with_custom_divider() {
    let meter = meter(4_700.0, 10);
    let mut adc = MockAdc::constant(2048);
    let mut delay = MockDelay::new();

    let result = meter.measure(&mut adc, &mut delay).unwrap();

    assert_eq!(result.nominal.ohms(), 4_700);
    assert_eq!(
        (result.bands.digit1, result.bands.digit2, result.bands.multiplier),
        (4, 7, 2)
    );
    assert_eq!(adc.read_count, 10);
}

#[test]
fn test_measure_open_circuit() {
    let meter = Ohmmeter::default();
    let mut adc = MockAdc::constant(4095);
    let mut delay = MockDelay::new();

    let result = meter.measure(&mut adc, &mut delay);
    assert_eq!(result, Err(MeasurementError::OpenCircuit));
}

#[test]
fn test_measure_short_circuit() {
    let meter = Ohmmeter::default();
    let mut adc = MockAdc::constant(0);
    let mut delay = MockDelay::new();

    let result = meter.measure(&mut adc, &mut delay);
    assert_eq!(result, Err(MeasurementError::ShortCircuit));
}

#[test]
fn test_measure_below_one_ohm() {
    // Mittelwert 1/3 → ca. 0.8 Ohm
    let meter = meter(10_000.0, 3);
    let mut adc = MockAdc::from_samples(vec![0, 0, 1]);
    let mut delay = MockDelay::new();

    let result = meter.measure(&mut adc, &mut delay);
    assert_eq!(result, Err(MeasurementError::BelowRange));
}

#[test]
fn test_measure_out_of_range() {
    // 10 MOhm Referenz, Mittelwert knapp unter Vollausschlag → ca. 2e13 Ohm
    let meter = meter(10_000_000.0, 500);
    let mut samples = vec![4095; 499];
    samples.push(4094);
    let mut adc = MockAdc::from_samples(samples);
    let mut delay = MockDelay::new();

    let result = meter.measure(&mut adc, &mut delay);
    assert_eq!(result, Err(MeasurementError::OutOfRange));
}

#[test]
fn test_measure_adc_failure_aborts_cycle() {
    let meter = Ohmmeter::default();
    let mut adc = MockAdc::constant(2048);
    adc.fail_at = Some(10);
    let mut delay = MockDelay::new();

    let result = meter.measure(&mut adc, &mut delay);

    assert_eq!(result, Err(MeasurementError::Adc));
    assert_eq!(adc.read_count, 10);
    assert_eq!(delay.calls, 10);
}

#[test]
fn test_cycles_are_independent() {
    // Zyklus 1: offen, Zyklus 2: 10k, Zyklus 3: Kurzschluss, Zyklus 4: 10k
    let meter = meter(10_000.0, 4);
    let mut samples = Vec::new();
    for raw in [4095, 2048, 0, 2048] {
        samples.extend([raw; 4]);
    }
    let mut adc = MockAdc::from_samples(samples);
    let mut delay = MockDelay::new();

    let outcomes: Vec<_> = (0..4)
        .map(|_| meter.measure(&mut adc, &mut delay).map(|c| c.nominal.ohms()))
        .collect();

    assert_eq!(
        outcomes,
        vec![
            Err(MeasurementError::OpenCircuit),
            Ok(10_000),
            Err(MeasurementError::ShortCircuit),
            Ok(10_000),
        ]
    );
    assert_eq!(adc.read_count, 16);
}

#[test]
fn test_measurement_continues_after_adc_failure() {
    let meter = meter(10_000.0, 5);
    let mut adc = MockAdc::constant(2048);
    adc.fail_at = Some(2);
    let mut delay = MockDelay::new();

    assert_eq!(
        meter.measure(&mut adc, &mut delay),
        Err(MeasurementError::Adc)
    );
    let second = meter.measure(&mut adc, &mut delay).unwrap();
    assert_eq!(second.nominal.ohms(), 10_000);
}

// ============================================================================
// Tests: Async Messzyklus
// ============================================================================

#[test]
fn test_measure_async_matches_blocking() {
    let meter = Ohmmeter::default();

    let mut adc_blocking = MockAdc::from_samples(vec![1000, 1001, 999]);
    let mut delay_blocking = MockDelay::new();
    let blocking = meter.measure(&mut adc_blocking, &mut delay_blocking);

    let mut adc_async = MockAdc::from_samples(vec![1000, 1001, 999]);
    let mut delay_async = MockDelay::new();
    let asynchronous = block_on(meter.measure_async(&mut adc_async, &mut delay_async));

    assert_eq!(blocking, asynchronous);
    assert_eq!(adc_async.read_count, 500);
    assert_eq!(delay_async.calls, 500);
    assert_eq!(delay_async.total_us(), 500_000);
}

#[test]
fn test_measure_async_open_circuit() {
    let meter = Ohmmeter::default();
    let mut adc = MockAdc::constant(4095);
    let mut delay = MockDelay::new();

    let result = block_on(meter.measure_async(&mut adc, &mut delay));
    assert_eq!(result, Err(MeasurementError::OpenCircuit));
}

#[test]
fn test_measure_async_adc_failure() {
    let meter = Ohmmeter::default();
    let mut adc = MockAdc::constant(2048);
    adc.fail_at = Some(0);
    let mut delay = MockDelay::new();

    let result = block_on(meter.measure_async(&mut adc, &mut delay));
    assert_eq!(result, Err(MeasurementError::Adc));
    assert_eq!(delay.calls, 0);
}
