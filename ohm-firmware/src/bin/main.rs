// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use ohmmeter::Ohmmeter;
use ohmmeter::config::{I2C_FREQUENCY_KHZ, OLED_I2C_ADDRESS, meter_config};
use ohmmeter::hal::{EspAdcSource, OledDisplay};
use ohmmeter::tasks::{bootloader_button_task, measure_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Messkonfiguration (bekannter Widerstand evtl. aus .env)
    let meter = Ohmmeter::new(meter_config().expect("Invalid meter configuration"));

    // ADC am Mittelpunkt des Spannungsteilers
    let adc = EspAdcSource::new(peripherals.ADC1, peripherals.GPIO2);

    // OLED über I2C0 (SDA = GPIO6, SCL = GPIO7), wird beim Start gelöscht
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    )
    .expect("Failed to initialize I2C")
    .with_sda(peripherals.GPIO6)
    .with_scl(peripherals.GPIO7);
    let display =
        OledDisplay::new(i2c, OLED_I2C_ADDRESS).expect("Failed to initialize OLED display");

    // Spawn Mess-Task (LEDs werden im Task initialisiert)
    spawner
        .spawn(measure_task(
            meter,
            adc,
            display,
            peripherals.GPIO8,
            peripherals.RMT,
        ))
        .unwrap();

    // Spawn Taster-Task (Neustart für den Flasher)
    spawner
        .spawn(bootloader_button_task(peripherals.GPIO9))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
