//! Mock-Implementierungen der Hardware-Traits für Host-Tests
#![allow(dead_code)]

use ohm_core::{
    AdcError, AdcSource, BAND_LED_COUNT, BandLedWriter, DisplayError, LedError, MeterDisplay,
    Screen,
};
use rgb::RGB8;

// ============================================================================
// Mock ADC
// ============================================================================

/// Liefert vorgegebene Rohwerte, zyklisch wiederholt
pub struct MockAdc {
    samples: Vec<u16>,
    position: usize,
    pub read_count: usize,
    /// Lesevorgang Nr. `n` (0-basiert) schlägt fehl
    pub fail_at: Option<usize>,
}

impl MockAdc {
    pub fn constant(raw: u16) -> Self {
        Self::from_samples(vec![raw])
    }

    pub fn from_samples(samples: Vec<u16>) -> Self {
        assert!(!samples.is_empty());
        Self {
            samples,
            position: 0,
            read_count: 0,
            fail_at: None,
        }
    }
}

impl AdcSource for MockAdc {
    fn read(&mut self) -> Result<u16, AdcError> {
        if self.fail_at == Some(self.read_count) {
            self.fail_at = None;
            return Err(AdcError::ReadFailed);
        }

        let raw = self.samples[self.position];
        self.position = (self.position + 1) % self.samples.len();
        self.read_count += 1;
        Ok(raw)
    }
}

// ============================================================================
// Mock Delay (blockierend und async)
// ============================================================================

#[derive(Default)]
pub struct MockDelay {
    pub calls: usize,
    pub total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_us(&self) -> u64 {
        self.total_ns / 1_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockBandLeds {
    pub last_frame: Option<[RGB8; BAND_LED_COUNT]>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockBandLeds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BandLedWriter for MockBandLeds {
    fn write(&mut self, colors: [RGB8; BAND_LED_COUNT]) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_frame = Some(colors);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Display
// ============================================================================

#[derive(Default)]
pub struct MockDisplay {
    pub last_lines: Vec<String>,
    pub show_count: usize,
    pub fail_next_show: bool,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MeterDisplay for MockDisplay {
    fn show(&mut self, screen: &Screen) -> Result<(), DisplayError> {
        if self.fail_next_show {
            self.fail_next_show = false;
            return Err(DisplayError::FlushFailed);
        }

        self.last_lines = screen.lines().map(String::from).collect();
        self.show_count += 1;
        Ok(())
    }
}
