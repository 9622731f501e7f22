// Bootloader Task - Taster B startet den Chip neu
use defmt::info;
use embassy_time::Timer;
use esp_hal::gpio::{Input, InputConfig, Pull};

/// Entprellzeit nach der fallenden Flanke
const DEBOUNCE_MS: u64 = 20;

/// Bootloader Button Task
///
/// Wartet auf einen Druck auf Taster B (GPIO9, gegen GND, interner Pull-Up)
/// und löst dann einen Software-Reset aus. Der Flasher auf dem Host kann
/// danach die Verbindung übernehmen.
#[embassy_executor::task]
pub async fn bootloader_button_task(gpio9: esp_hal::peripherals::GPIO9<'static>) {
    let mut button = Input::new(gpio9, InputConfig::default().with_pull(Pull::Up));

    loop {
        button.wait_for_falling_edge().await;

        // Prellen ignorieren: nur reagieren wenn der Taster noch gedrückt ist
        Timer::after_millis(DEBOUNCE_MS).await;
        if button.is_low() {
            info!("Taster B gedrückt, Neustart für den Flasher");
            Timer::after_millis(DEBOUNCE_MS).await;
            esp_hal::system::software_reset();
        }
    }
}
