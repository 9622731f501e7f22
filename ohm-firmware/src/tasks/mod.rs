// Task-Modul: Enthält alle Embassy Tasks
//
// Messung und Taster laufen unabhängig voneinander.
// Der Taster-Task greift nie auf den Messzustand zu.

pub mod button;
pub mod measure;

// Re-export Tasks für einfachen Import
pub use button::bootloader_button_task;
pub use measure::{measure_logic, measure_task};
