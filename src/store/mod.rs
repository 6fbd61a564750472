pub mod api;
pub mod catalog;
pub mod models;
pub mod state;

use std::ops::Deref;

use yew::prelude::*;

use crate::config::Latency;
use api::{BookingError, InFlight, LoginError};
use models::{ConsultationBooking, User};
use state::{AppState, StoreAction};

/// Handle every region receives through context. Wraps the reducer handle
/// created by `App` together with the simulated-call settings.
#[derive(Clone, PartialEq)]
pub struct AppStore {
    state: UseReducerHandle<AppState>,
    latency: Latency,
    booking: InFlight,
}

impl Deref for AppStore {
    type Target = AppState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl AppStore {
    pub fn new(state: UseReducerHandle<AppState>, latency: Latency, booking: InFlight) -> Self {
        Self {
            state,
            latency,
            booking,
        }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub fn set_login_modal_open(&self, open: bool) {
        self.state.dispatch(StoreAction::SetLoginModalOpen(open));
    }

    pub fn set_consultation_modal_open(&self, open: bool) {
        self.state.dispatch(StoreAction::SetConsultationModalOpen(open));
    }

    pub fn set_service_modal_open(&self, open: bool, service_id: Option<String>) {
        self.state
            .dispatch(StoreAction::SetServiceModalOpen { open, service_id });
    }

    pub fn set_current_testimonial(&self, index: usize) {
        self.state.dispatch(StoreAction::SetCurrentTestimonial(index));
    }

    pub fn next_testimonial(&self) {
        self.state.dispatch(StoreAction::NextTestimonial);
    }

    pub fn prev_testimonial(&self) {
        self.state.dispatch(StoreAction::PrevTestimonial);
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, LoginError> {
        let user = api::login(&self.latency, email, password).await?;
        self.state.dispatch(StoreAction::LoggedIn(user.clone()));
        Ok(user)
    }

    pub fn logout(&self) {
        log::info!("Logging out");
        self.state.dispatch(StoreAction::Logout);
    }

    pub fn booking_pending(&self) -> bool {
        self.booking.is_pending()
    }

    pub async fn book_consultation(&self, booking: &ConsultationBooking) -> Result<(), BookingError> {
        api::book_consultation(&self.latency, &self.booking, booking).await?;
        self.state.dispatch(StoreAction::BookingConfirmed);
        Ok(())
    }

    pub fn add_to_favorites(&self, service_id: &str) {
        log::info!("Added to favorites: {}", service_id);
        self.state
            .dispatch(StoreAction::AddFavorite(service_id.to_string()));
    }

    pub fn remove_from_favorites(&self, service_id: &str) {
        log::info!("Removed from favorites: {}", service_id);
        self.state
            .dispatch(StoreAction::RemoveFavorite(service_id.to_string()));
    }

    pub fn toggle_favorite(&self, service_id: &str) {
        if self.is_favorite(service_id) {
            self.remove_from_favorites(service_id);
        } else {
            self.add_to_favorites(service_id);
        }
    }
}

#[hook]
pub fn use_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore context is provided by App")
}
