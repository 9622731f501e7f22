// Hardware Abstraction Layer (HAL) Module
//
// Implementierungen der Traits aus ohm-core für den ESP32-C6.
// Tests laufen gegen Mocks in ohm-tests.

pub mod adc;
pub mod display;
pub mod led_writer;

pub use adc::EspAdcSource;
pub use display::OledDisplay;
pub use led_writer::{LED_BUFFER_SIZE, RmtBandLedWriter};
