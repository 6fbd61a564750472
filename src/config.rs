use log::Level;

/// Artificial delays (in milliseconds) for the simulated remote calls.
/// A zero delay resolves the call without touching a browser timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Latency {
    pub login_ms: u32,
    pub booking_ms: u32,
    pub contact_ms: u32,
}

impl Latency {
    #[cfg(test)]
    pub const fn none() -> Self {
        Self {
            login_ms: 0,
            booking_ms: 0,
            contact_ms: 0,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            login_ms: 1_000,
            booking_ms: 1_500,
            contact_ms: 1_500,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn rotation_interval_ms() -> u32 {
    5_000
}

pub fn contact_success_ms() -> u32 {
    3_000
}

pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_STEPS: u32 = 60;

pub const CONTACT_PHONE: &str = "+966 50 123 4567";
pub const CONTACT_EMAIL: &str = "info@lpc-platform.com";
pub const CONTACT_ADDRESS: &str = "الرياض، المملكة العربية السعودية";
pub const WHATSAPP_NUMBER: &str = "966501234567";

pub fn whatsapp_url() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}
