use std::collections::BTreeSet;
use std::rc::Rc;

use yew::prelude::*;

use crate::carousel;
use crate::store::catalog::Catalog;
use crate::store::models::{Service, Testimonial, User};

#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    SetLoginModalOpen(bool),
    SetConsultationModalOpen(bool),
    SetServiceModalOpen {
        open: bool,
        service_id: Option<String>,
    },
    SetCurrentTestimonial(usize),
    NextTestimonial,
    PrevTestimonial,
    LoggedIn(User),
    Logout,
    AddFavorite(String),
    RemoveFavorite(String),
    BookingConfirmed,
}

/// Cross-region UI and session state. Only the reducer below mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub login_modal_open: bool,
    pub consultation_modal_open: bool,
    pub service_modal_open: bool,
    pub selected_service_id: Option<String>,
    pub current_testimonial: usize,
    pub user: Option<User>,
    pub favorites: BTreeSet<String>,
    pub catalog: Rc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            login_modal_open: false,
            consultation_modal_open: false,
            service_modal_open: false,
            selected_service_id: None,
            current_testimonial: 0,
            user: None,
            favorites: BTreeSet::new(),
            catalog,
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.catalog.services
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.catalog.testimonials
    }

    pub fn selected_service(&self) -> Option<&Service> {
        self.selected_service_id
            .as_deref()
            .and_then(|id| self.catalog.service(id))
    }

    pub fn current_testimonial(&self) -> Option<&Testimonial> {
        self.testimonials().get(self.current_testimonial)
    }

    pub fn is_favorite(&self, service_id: &str) -> bool {
        self.favorites.contains(service_id)
    }

    pub fn any_modal_open(&self) -> bool {
        self.login_modal_open || self.consultation_modal_open || self.service_modal_open
    }

    fn close_modals(&mut self) {
        self.login_modal_open = false;
        self.consultation_modal_open = false;
        self.service_modal_open = false;
        self.selected_service_id = None;
    }

    fn apply(&mut self, action: StoreAction) {
        let testimonials = self.testimonials().len();
        match action {
            StoreAction::SetLoginModalOpen(open) => {
                if open {
                    self.close_modals();
                }
                self.login_modal_open = open;
            }
            StoreAction::SetConsultationModalOpen(open) => {
                if open {
                    self.close_modals();
                }
                self.consultation_modal_open = open;
            }
            StoreAction::SetServiceModalOpen { open, service_id } => {
                if open {
                    self.close_modals();
                    self.selected_service_id =
                        service_id.filter(|id| self.catalog.service(id).is_some());
                } else {
                    self.selected_service_id = None;
                }
                self.service_modal_open = open;
            }
            StoreAction::SetCurrentTestimonial(index) => {
                self.current_testimonial = carousel::wrap_index(index, testimonials);
            }
            StoreAction::NextTestimonial => {
                self.current_testimonial =
                    carousel::next_index(self.current_testimonial, testimonials);
            }
            StoreAction::PrevTestimonial => {
                self.current_testimonial =
                    carousel::prev_index(self.current_testimonial, testimonials);
            }
            StoreAction::LoggedIn(user) => {
                self.user = Some(user);
                self.login_modal_open = false;
            }
            StoreAction::Logout => {
                self.user = None;
            }
            StoreAction::AddFavorite(id) => {
                if self.catalog.service(&id).is_some() {
                    self.favorites.insert(id);
                }
            }
            StoreAction::RemoveFavorite(id) => {
                self.favorites.remove(&id);
            }
            StoreAction::BookingConfirmed => {
                self.consultation_modal_open = false;
            }
        }
    }
}

impl Reducible for AppState {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("Store action: {:?}", action);
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Rc<AppState> {
        Rc::new(AppState::new(Rc::new(Catalog::seed().unwrap())))
    }

    fn user(email: &str) -> User {
        User {
            id: "1".to_string(),
            name: "Mohamed Ahmed".to_string(),
            email: email.to_string(),
            avatar: None,
            is_authenticated: true,
        }
    }

    #[test]
    fn starts_closed_and_anonymous() {
        let s = state();
        assert!(!s.any_modal_open());
        assert!(s.user.is_none());
        assert!(s.selected_service_id.is_none());
        assert_eq!(s.current_testimonial, 0);
    }

    #[test]
    fn closing_service_modal_always_clears_selection() {
        let s = state().reduce(StoreAction::SetServiceModalOpen {
            open: true,
            service_id: Some("3".to_string()),
        });
        assert!(s.service_modal_open);
        assert_eq!(s.selected_service().map(|s| s.id.as_str()), Some("3"));

        let s = s.reduce(StoreAction::SetServiceModalOpen {
            open: false,
            service_id: Some("2".to_string()),
        });
        assert!(!s.service_modal_open);
        assert!(s.selected_service_id.is_none());
    }

    #[test]
    fn opening_service_modal_without_id_clears_selection() {
        let s = state()
            .reduce(StoreAction::SetServiceModalOpen {
                open: true,
                service_id: Some("1".to_string()),
            })
            .reduce(StoreAction::SetServiceModalOpen {
                open: true,
                service_id: None,
            });
        assert!(s.service_modal_open);
        assert!(s.selected_service_id.is_none());
    }

    #[test]
    fn unknown_service_id_is_not_selected() {
        let s = state().reduce(StoreAction::SetServiceModalOpen {
            open: true,
            service_id: Some("99".to_string()),
        });
        assert!(s.service_modal_open);
        assert!(s.selected_service_id.is_none());
    }

    #[test]
    fn opening_a_modal_closes_the_others() {
        let s = state()
            .reduce(StoreAction::SetConsultationModalOpen(true))
            .reduce(StoreAction::SetLoginModalOpen(true));
        assert!(s.login_modal_open);
        assert!(!s.consultation_modal_open);

        let s = s.reduce(StoreAction::SetServiceModalOpen {
            open: true,
            service_id: Some("1".to_string()),
        });
        assert!(!s.login_modal_open);
        assert!(s.service_modal_open);

        let s = s.reduce(StoreAction::SetConsultationModalOpen(true));
        assert!(!s.service_modal_open);
        assert!(s.selected_service_id.is_none());
        assert!(s.consultation_modal_open);
    }

    #[test]
    fn closing_one_modal_leaves_others_alone() {
        let s = state()
            .reduce(StoreAction::SetLoginModalOpen(true))
            .reduce(StoreAction::SetConsultationModalOpen(false));
        assert!(s.login_modal_open);
    }

    #[test]
    fn testimonial_rotation_wraps() {
        let len = state().testimonials().len();
        let mut s = state().reduce(StoreAction::SetCurrentTestimonial(3));
        for _ in 0..7 {
            s = s.reduce(StoreAction::NextTestimonial);
        }
        assert_eq!(s.current_testimonial, (3 + 7) % len);

        for _ in 0..9 {
            s = s.reduce(StoreAction::PrevTestimonial);
        }
        assert_eq!(s.current_testimonial, (3 + 7 + 2 * len - 9) % len);
    }

    #[test]
    fn direct_selection_is_wrapped() {
        let s = state().reduce(StoreAction::SetCurrentTestimonial(12));
        assert_eq!(s.current_testimonial, 12 % s.testimonials().len());
        assert!(s.current_testimonial().is_some());
    }

    #[test]
    fn login_stores_user_and_closes_modal() {
        let s = state()
            .reduce(StoreAction::SetLoginModalOpen(true))
            .reduce(StoreAction::LoggedIn(user("a@b.com")));
        assert!(!s.login_modal_open);
        assert_eq!(s.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
    }

    #[test]
    fn logout_only_clears_user() {
        let s = state()
            .reduce(StoreAction::LoggedIn(user("a@b.com")))
            .reduce(StoreAction::SetConsultationModalOpen(true))
            .reduce(StoreAction::AddFavorite("2".to_string()))
            .reduce(StoreAction::Logout);
        assert!(s.user.is_none());
        assert!(s.consultation_modal_open);
        assert!(s.is_favorite("2"));
    }

    #[test]
    fn favorites_are_a_set_of_known_services() {
        let s = state()
            .reduce(StoreAction::AddFavorite("2".to_string()))
            .reduce(StoreAction::AddFavorite("2".to_string()))
            .reduce(StoreAction::AddFavorite("nope".to_string()));
        assert_eq!(s.favorites.len(), 1);

        let s = s
            .reduce(StoreAction::RemoveFavorite("5".to_string()))
            .reduce(StoreAction::RemoveFavorite("2".to_string()));
        assert!(s.favorites.is_empty());
    }

    #[test]
    fn booking_confirmation_closes_consultation_modal() {
        let s = state()
            .reduce(StoreAction::SetConsultationModalOpen(true))
            .reduce(StoreAction::BookingConfirmed);
        assert!(!s.consultation_modal_open);
    }

    #[test]
    fn no_op_actions_keep_the_same_state() {
        let s = state();
        let next = s.clone().reduce(StoreAction::Logout);
        assert!(Rc::ptr_eq(&s, &next));
    }
}
