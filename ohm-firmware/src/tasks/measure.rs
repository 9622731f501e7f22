// Mess-Task - Spannungsteiler messen, Ergebnis auf OLED und LEDs ausgeben
use defmt::{Display2Format, error, info, warn};
use embassy_time::{Delay, Timer};
use embedded_hal_async::delay::DelayNs;
use esp_hal_smartled::smart_led_buffer;
use ohm_core::{AdcSource, BandLedWriter, MeasurementError, MeterDisplay, Ohmmeter, present};

use crate::config::{CYCLE_PAUSE_MS, LED_BRIGHTNESS_PERCENT, RMT_CLOCK_MHZ};
use crate::hal::{EspAdcSource, OledDisplay, RmtBandLedWriter};

/// Mess-Logik - Testbare Schleife ohne Hardware-Abhängigkeit
///
/// Pro Durchlauf:
/// - 500 ADC-Werte mitteln und klassifizieren (`Ohmmeter::measure_async`)
/// - Ergebnis auf Display und LEDs ausgeben
/// - 500 ms Pause
///
/// Fehler beim Messen oder bei der Ausgabe werden geloggt, die Schleife
/// läuft in jedem Fall weiter. Zwischen zwei Durchläufen wird kein
/// Zustand übernommen.
pub async fn measure_logic<A, D, S, L>(
    meter: Ohmmeter,
    mut adc: A,
    mut delay: D,
    mut display: S,
    mut leds: L,
) -> !
where
    A: AdcSource,
    D: DelayNs,
    S: MeterDisplay,
    L: BandLedWriter,
{
    loop {
        let outcome = meter.measure_async(&mut adc, &mut delay).await;

        match &outcome {
            Ok(classification) => info!(
                "Gemessen: {} Ohm -> E24 {} Ohm ({})",
                classification.ohms,
                Display2Format(&classification.nominal),
                classification.bands
            ),
            Err(MeasurementError::Adc) => error!("ADC Lesefehler, Messung abgebrochen"),
            Err(e) => warn!("Kein gültiger Messwert: {}", e),
        }

        let status = present(&outcome, &mut display, &mut leds, LED_BRIGHTNESS_PERCENT);
        if let Err(e) = status.display {
            error!("Display Fehler: {}", e);
        }
        if let Err(e) = status.leds {
            error!("LED Fehler: {}", e);
        }

        Timer::after_millis(CYCLE_PAUSE_MS).await;
    }
}

/// Mess-Task - Embassy Task für parallele Ausführung
///
/// ADC und Display kommen fertig initialisiert aus main(), die LEDs werden
/// hier aufgesetzt weil der RMT-Buffer im Task leben muss. Schlägt das
/// fehl, läuft die Messung ohne LEDs weiter.
///
/// # Parameter
/// - `meter`: Pipeline mit Teiler- und Sampling-Konfiguration
/// - `adc`: ADC am Mittelpunkt des Spannungsteilers
/// - `display`: OLED Display
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[embassy_executor::task]
pub async fn measure_task(
    meter: Ohmmeter,
    adc: EspAdcSource<'static>,
    display: OledDisplay<'static>,
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    // Buffer für SmartLED Daten erstellen (3 LEDs)
    let mut rmt_buffer = smart_led_buffer!(3);

    // Ohne LEDs wird trotzdem gemessen, dann nur mit Anzeige auf dem OLED
    let leds = match RmtBandLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
    {
        Ok(leds) => Some(leds),
        Err(e) => {
            error!("LED Initialisierung fehlgeschlagen, messe ohne LEDs: {}", e);
            None
        }
    };

    info!(
        "Messung gestartet (R bekannt = {} Ohm)",
        meter.config().divider.known_resistor_ohms()
    );

    measure_logic(meter, adc, Delay, display, leds).await
}
