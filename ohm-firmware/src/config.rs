// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use ohm_core::config::{DEFAULT_ADC_MAX_CODE, DEFAULT_KNOWN_RESISTOR_OHMS};
use ohm_core::{ConfigError, DividerConfig, MeterConfig, SamplerConfig};

// ============================================================================
// Messung
// ============================================================================

/// Bekannter Widerstand im Spannungsteiler (Ohm)
/// Optional zur Build-Zeit aus OHM_KNOWN_RESISTOR (.env), sonst 10 kOhm
/// Nachgemessener Wert des eingebauten Widerstands verbessert die Genauigkeit
const KNOWN_RESISTOR_ENV: Option<&str> = option_env!("OHM_KNOWN_RESISTOR");

/// ADC-Maximalwert (12 Bit)
pub const ADC_MAX_CODE: u16 = DEFAULT_ADC_MAX_CODE;

/// Anzahl ADC-Werte pro Messung
pub const SAMPLE_COUNT: u16 = 500;

/// Pause zwischen zwei ADC-Werten in Mikrosekunden
/// 500 x 1 ms = 0.5 s pro Messung
pub const SAMPLE_INTERVAL_US: u32 = 1_000;

/// Pause nach jeder Messung in Millisekunden
pub const CYCLE_PAUSE_MS: u64 = 500;

/// Liefert den bekannten Widerstand (Build-Zeit-Override oder Default)
pub fn known_resistor_ohms() -> f32 {
    KNOWN_RESISTOR_ENV
        .and_then(|value| value.trim().parse::<f32>().ok())
        .filter(|ohms| ohms.is_finite() && *ohms > 0.0)
        .unwrap_or(DEFAULT_KNOWN_RESISTOR_OHMS)
}

/// Gesamtkonfiguration für den Messzyklus
pub fn meter_config() -> Result<MeterConfig, ConfigError> {
    Ok(MeterConfig {
        divider: DividerConfig::new(known_resistor_ohms(), ADC_MAX_CODE)?,
        sampler: SamplerConfig::new(SAMPLE_COUNT, SAMPLE_INTERVAL_US)?,
    })
}

// ============================================================================
// LED Konfiguration
// ============================================================================

/// Anzahl der LEDs im Strip (eine pro Farbring)
pub const LED_COUNT: usize = ohm_core::BAND_LED_COUNT;

/// Helligkeit der Ring-LEDs in Prozent der Farbtabelle
/// Tabelle geht nur bis 63, 100 % ist also schon gedimmt
pub const LED_BRIGHTNESS_PERCENT: u8 = 100;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Display Konfiguration
// ============================================================================

/// I2C-Adresse des SSD1306
pub const OLED_I2C_ADDRESS: u8 = 0x3C;

/// I2C Taktfrequenz in kHz
pub const I2C_FREQUENCY_KHZ: u32 = 400;

/// Zeilenhöhe in Pixeln (FONT_6X10)
pub const OLED_LINE_HEIGHT: i32 = 10;

/// Linker Rand in Pixeln
pub const OLED_MARGIN_X: i32 = 5;

// ============================================================================
// Pin-Belegung (ESP32-C6 DevKit)
// ============================================================================
//
// GPIO2  - ADC1 Kanal 2, Mittelpunkt Spannungsteiler
// GPIO6  - I2C SDA (OLED)
// GPIO7  - I2C SCL (OLED)
// GPIO8  - WS2812 Datenleitung (3 LEDs)
// GPIO9  - Taster B (BOOT), Neustart für den Flasher
