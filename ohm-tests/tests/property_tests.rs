//! Property Tests für E24-Matcher und Farbringe

use ohm_core::{
    AveragedReading, DividerConfig, E24_SERIES, MeasurementError, closest, decompose, estimate,
};
use proptest::prelude::*;

/// Dekade per Schleife statt log10
fn reference_decade(measured: f32) -> u64 {
    let mut decade = 1u64;
    while (decade * 10) as f64 <= f64::from(measured) {
        decade *= 10;
    }
    decade
}

/// Abstand zwischen Mantisse `measured / decade` und Tabellenwert `entry / 100`
fn mantissa_distance(measured: f32, decade: u64, entry: u16) -> f64 {
    (f64::from(measured) / decade as f64 - f64::from(entry) / 100.0).abs()
}

/// Brute-Force: kleinster Mantissen-Abstand, bei Gleichstand der erste Eintrag
fn reference_entry(measured: f32, decade: u64) -> u16 {
    let mut best = E24_SERIES[0];
    for &entry in &E24_SERIES[1..] {
        if mantissa_distance(measured, decade, entry) < mantissa_distance(measured, decade, best) {
            best = entry;
        }
    }
    best
}

fn measured_value() -> impl Strategy<Value = f32> {
    (0u32..=10, 1.0f64..10.0).prop_map(|(exp, mantissa)| (mantissa * 10f64.powi(exp as i32)) as f32)
}

proptest! {
    #[test]
    fn closest_matches_brute_force(measured in measured_value()) {
        prop_assume!(measured < 1e11);
        let nominal = closest(measured).unwrap().ohms();
        let decade = reference_decade(measured);
        let best = reference_entry(measured, decade);

        if decade == 1 {
            // Dekade 1..10 Ohm: ganze Ohm
            prop_assert_eq!(nominal, (f64::from(best) / 100.0).round() as u64);
        } else {
            // Gewählter Tabellenwert muss exakt in der Dekade liegen ...
            prop_assert!(nominal >= decade && nominal < decade * 10);
            prop_assert_eq!((nominal * 100) % decade, 0);
            let chosen = u16::try_from(nominal * 100 / decade).unwrap();
            prop_assert!(E24_SERIES.contains(&chosen));
            // ... und darf nicht weiter weg sein als der Brute-Force-Wert
            prop_assert!(
                mantissa_distance(measured, decade, chosen)
                    <= mantissa_distance(measured, decade, best) + 1e-9
            );
        }
    }

    #[test]
    fn bands_reconstruct_nominal(measured in measured_value()) {
        prop_assume!(measured < 1e11);
        let nominal = closest(measured).unwrap();
        let bands = decompose(nominal.ohms());

        prop_assert!(bands.digit1 <= 9);
        prop_assert!(bands.digit2 <= 9);
        prop_assert!(bands.multiplier <= 9);
        prop_assert_eq!(bands.value(), nominal.ohms());
        prop_assert!(bands.colors().is_some());
    }

    #[test]
    fn nominal_stays_in_measured_decade(measured in 100.0f32..1e10) {
        let nominal = closest(measured).unwrap().ohms();
        let mut decade = 1u64;
        while (decade * 10) as f32 <= measured {
            decade *= 10;
        }
        // E24 hat keinen Eintrag für 10.0, daher nie Überlauf in die nächste Dekade
        prop_assert!(nominal >= decade);
        prop_assert!(nominal < decade * 10);
    }

    #[test]
    fn estimate_is_finite_below_full_scale(raw in 0.0f32..4094.99) {
        let ohms = estimate(AveragedReading::new(raw), &DividerConfig::default()).unwrap();
        prop_assert!(ohms.is_finite());
        prop_assert!(ohms >= 0.0);
    }

    #[test]
    fn estimate_rejects_full_scale_and_above(raw in 4095.0f32..70_000.0) {
        let result = estimate(AveragedReading::new(raw), &DividerConfig::default());
        prop_assert_eq!(result, Err(MeasurementError::OpenCircuit));
    }
}

#[test]
fn every_table_entry_in_every_decade() {
    for exp in 0u32..=10 {
        for &entry in &E24_SERIES {
            let measured = (f64::from(entry) * 10f64.powi(exp as i32) / 100.0) as f32;
            // Unter 100 Ohm auf ganze Ohm gerundet (nur 1..10 Ohm betroffen)
            let expected = if exp < 2 {
                (f64::from(entry) * 10f64.powi(exp as i32) / 100.0).round() as u64
            } else {
                u64::from(entry) * 10u64.pow(exp - 2)
            };
            assert_eq!(
                closest(measured).unwrap().ohms(),
                expected,
                "entry {} decade 10^{}",
                entry,
                exp
            );
        }
    }
}

#[test]
fn tie_between_every_adjacent_pair_picks_lower() {
    // Mittelpunkte in der Dekade 1000..10000 sind ganzzahlig, also exakt
    for pair in E24_SERIES.windows(2) {
        let midpoint = (u32::from(pair[0]) + u32::from(pair[1])) * 10 / 2;
        let result = closest(midpoint as f32).unwrap().ohms();
        assert_eq!(result, u64::from(pair[0]) * 10, "midpoint {}", midpoint);
    }
}
