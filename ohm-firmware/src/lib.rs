// Library-Root: Hardware-Anbindung und Tasks des Ohmmeters
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von ohm-core
pub use ohm_core::{
    AdcSource, BandLedWriter, Classification, MeasurementError, MeterDisplay, Ohmmeter, Screen,
};

// ============================================================================
// Testing
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal).
// Die gesamte Mess- und Ausgabelogik liegt deshalb in ohm-core und wird
// dort bzw. in ohm-tests auf dem Host getestet. Hier bleiben nur die
// Trait-Implementierungen für die echte Hardware und die Embassy Tasks,
// deren Schleife (`measure_logic`) generisch über die Traits ist.
