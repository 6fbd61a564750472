//! Stand-ins for the remote calls the landing page would make. Each one waits
//! the configured latency and then resolves locally.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;

use crate::config::Latency;
use crate::forms::ContactForm;
use crate::store::models::{ConsultationBooking, User};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("بيانات الدخول غير صحيحة")]
    MissingCredentials,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("يوجد حجز قيد المعالجة بالفعل")]
    AlreadyPending,
}

async fn simulate_latency(ms: u32) {
    if ms > 0 {
        TimeoutFuture::new(ms).await;
    }
}

pub async fn login(latency: &Latency, email: &str, password: &str) -> Result<User, LoginError> {
    simulate_latency(latency.login_ms).await;

    if email.is_empty() || password.is_empty() {
        log::info!("Login rejected: missing credentials");
        return Err(LoginError::MissingCredentials);
    }

    log::info!("Login accepted for {}", email);
    Ok(User {
        id: "1".to_string(),
        name: "Mohamed Ahmed".to_string(),
        email: email.to_string(),
        avatar: Some("/user-avatar.jpg".to_string()),
        is_authenticated: true,
    })
}

/// Single-slot gate that serializes booking submissions.
#[derive(Clone, Debug, Default)]
pub struct InFlight(Rc<Cell<bool>>);

impl PartialEq for InFlight {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl InFlight {
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        if self.0.replace(true) {
            None
        } else {
            Some(InFlightGuard(self.0.clone()))
        }
    }

    pub fn is_pending(&self) -> bool {
        self.0.get()
    }
}

pub struct InFlightGuard(Rc<Cell<bool>>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub async fn book_consultation(
    latency: &Latency,
    gate: &InFlight,
    booking: &ConsultationBooking,
) -> Result<(), BookingError> {
    let _guard = gate.try_begin().ok_or(BookingError::AlreadyPending)?;
    match serde_json::to_string(booking) {
        Ok(payload) => log::info!("Booking consultation: {}", payload),
        Err(e) => log::warn!("Booking payload not serializable: {}", e),
    }
    simulate_latency(latency.booking_ms).await;
    log::info!("Consultation booked for {}", booking.preferred_date);
    Ok(())
}

pub async fn submit_contact(latency: &Latency, message: &ContactForm) {
    log::info!("Sending contact message from {}: {}", message.email, message.subject);
    simulate_latency(latency.contact_ms).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;

    fn booking() -> ConsultationBooking {
        ConsultationBooking {
            name: "Ali".to_string(),
            email: "ali@x.com".to_string(),
            phone: "0500000000".to_string(),
            preferred_date: NaiveDate::from_ymd_opt(2030, 1, 2).unwrap(),
            preferred_time: "10:00".to_string(),
            topic: "استشارة عامة".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn login_with_empty_field_fails() {
        let latency = Latency::none();
        assert_eq!(
            block_on(login(&latency, "", "x")),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(
            block_on(login(&latency, "a@b.com", "")),
            Err(LoginError::MissingCredentials)
        );
    }

    #[test]
    fn login_returns_stub_user_with_given_email() {
        let user = block_on(login(&Latency::none(), "a@b.com", "pw")).unwrap();
        assert_eq!(user.email, "a@b.com");
        assert!(user.is_authenticated);
        assert_eq!(user.id, "1");
    }

    #[test]
    fn booking_always_succeeds() {
        let gate = InFlight::default();
        assert_eq!(
            block_on(book_consultation(&Latency::none(), &gate, &booking())),
            Ok(())
        );
        assert!(!gate.is_pending());
    }

    #[test]
    fn second_booking_while_pending_is_rejected() {
        let gate = InFlight::default();
        let held = gate.try_begin().unwrap();
        assert_eq!(
            block_on(book_consultation(&Latency::none(), &gate, &booking())),
            Err(BookingError::AlreadyPending)
        );
        assert!(gate.is_pending());
        drop(held);
        assert!(block_on(book_consultation(&Latency::none(), &gate, &booking())).is_ok());
    }

    #[test]
    fn gate_clones_share_the_slot() {
        let gate = InFlight::default();
        let other = gate.clone();
        let _held = gate.try_begin().unwrap();
        assert!(other.try_begin().is_none());
        assert_eq!(gate, other);
        assert_ne!(gate, InFlight::default());
    }

    #[test]
    fn contact_submission_resolves() {
        block_on(submit_contact(&Latency::none(), &ContactForm::default()));
    }
}
