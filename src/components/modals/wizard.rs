use chrono::NaiveDate;

use crate::forms::{Field, FieldError, FieldErrors};
use crate::store::models::ConsultationBooking;

pub const TIME_SLOTS: [&str; 8] = [
    "09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

pub const TOPICS: [&str; 6] = [
    "استشارة عامة",
    "اختيار التخصص المناسب",
    "التطوير المهني",
    "ريادة الأعمال",
    "التقنية والبرمجة",
    "المحاسبة والمالية",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    PersonalInfo,
    Schedule,
    Details,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::PersonalInfo,
        WizardStep::Schedule,
        WizardStep::Details,
    ];

    pub fn number(self) -> u8 {
        match self {
            WizardStep::PersonalInfo => 1,
            WizardStep::Schedule => 2,
            WizardStep::Details => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "المعلومات الشخصية",
            WizardStep::Schedule => "تفضيلات الموعد",
            WizardStep::Details => "تفاصيل إضافية",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            WizardStep::PersonalInfo => Some(WizardStep::Schedule),
            WizardStep::Schedule => Some(WizardStep::Details),
            WizardStep::Details => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            WizardStep::PersonalInfo => None,
            WizardStep::Schedule => Some(WizardStep::PersonalInfo),
            WizardStep::Details => Some(WizardStep::Schedule),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsultationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: String,
    pub topic: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Advance {
    Moved(WizardStep),
    Ready(ConsultationBooking),
}

/// Three-step booking form. Only the last step hands out a finished booking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsultationWizard {
    pub step: WizardStep,
    pub form: ConsultationForm,
}

impl ConsultationWizard {
    fn validate(&self, step: WizardStep, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let form = &self.form;
        match step {
            WizardStep::PersonalInfo => {
                errors.require(Field::Name, &form.name);
                errors.require_email(Field::Email, &form.email);
                errors.require(Field::Phone, &form.phone);
            }
            WizardStep::Schedule => {
                match form.preferred_date {
                    None => errors.insert(
                        Field::PreferredDate,
                        FieldError::Required(Field::PreferredDate.label()),
                    ),
                    Some(date) if date < today => {
                        errors.insert(Field::PreferredDate, FieldError::DateInPast)
                    }
                    Some(_) => {}
                }
                errors.require_choice(Field::PreferredTime, &form.preferred_time, &TIME_SLOTS);
                errors.require_choice(Field::Topic, &form.topic, &TOPICS);
            }
            WizardStep::Details => {}
        }
        errors
    }

    /// Validates the current step and moves forward. On the last step every
    /// earlier step is re-checked before the booking is produced.
    pub fn advance(&mut self, today: NaiveDate) -> Result<Advance, FieldErrors> {
        match self.step.next() {
            Some(next) => {
                self.validate(self.step, today).into_result()?;
                self.step = next;
                Ok(Advance::Moved(next))
            }
            None => {
                let mut errors = FieldErrors::new();
                for step in WizardStep::ALL {
                    errors.merge(self.validate(step, today));
                }
                errors.into_result()?;
                let Some(preferred_date) = self.form.preferred_date else {
                    let mut errors = FieldErrors::new();
                    errors.insert(
                        Field::PreferredDate,
                        FieldError::Required(Field::PreferredDate.label()),
                    );
                    return Err(errors);
                };
                let form = &self.form;
                Ok(Advance::Ready(ConsultationBooking {
                    name: form.name.trim().to_string(),
                    email: form.email.trim().to_string(),
                    phone: form.phone.trim().to_string(),
                    preferred_date,
                    preferred_time: form.preferred_time.clone(),
                    topic: form.topic.clone(),
                    message: form.message.trim().to_string(),
                }))
            }
        }
    }

    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn fill_personal(wizard: &mut ConsultationWizard) {
        wizard.form.name = "Ali".to_string();
        wizard.form.email = "ali@x.com".to_string();
        wizard.form.phone = "0500000000".to_string();
    }

    fn fill_schedule(wizard: &mut ConsultationWizard) {
        wizard.form.preferred_date = today().succ_opt();
        wizard.form.preferred_time = "10:00".to_string();
        wizard.form.topic = "استشارة عامة".to_string();
    }

    #[test]
    fn starts_on_personal_info() {
        assert_eq!(ConsultationWizard::default().step, WizardStep::PersonalInfo);
    }

    #[test]
    fn invalid_step_one_stays_put() {
        let mut wizard = ConsultationWizard::default();
        wizard.form.name = "Ali".to_string();
        wizard.form.email = "ali".to_string();
        let errors = wizard.advance(today()).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));
        assert!(errors.get(Field::Phone).is_some());
        assert_eq!(wizard.step, WizardStep::PersonalInfo);
    }

    #[test]
    fn full_walkthrough_produces_booking() {
        let mut wizard = ConsultationWizard::default();
        fill_personal(&mut wizard);
        assert_eq!(
            wizard.advance(today()),
            Ok(Advance::Moved(WizardStep::Schedule))
        );
        fill_schedule(&mut wizard);
        assert_eq!(
            wizard.advance(today()),
            Ok(Advance::Moved(WizardStep::Details))
        );

        let Ok(Advance::Ready(booking)) = wizard.advance(today()) else {
            panic!("expected a finished booking");
        };
        assert_eq!(booking.name, "Ali");
        assert_eq!(booking.email, "ali@x.com");
        assert_eq!(booking.phone, "0500000000");
        assert_eq!(booking.preferred_date, today().succ_opt().unwrap());
        assert_eq!(booking.preferred_time, "10:00");
        assert_eq!(booking.topic, "استشارة عامة");
        assert_eq!(booking.message, "");
        assert_eq!(wizard.step, WizardStep::Details);
    }

    #[test]
    fn schedule_rejects_past_dates_and_unknown_slots() {
        let mut wizard = ConsultationWizard::default();
        fill_personal(&mut wizard);
        wizard.advance(today()).unwrap();
        wizard.form.preferred_date = today().pred_opt();
        wizard.form.preferred_time = "03:00".to_string();
        let errors = wizard.advance(today()).unwrap_err();
        assert_eq!(errors.get(Field::PreferredDate), Some(&FieldError::DateInPast));
        assert_eq!(errors.get(Field::PreferredTime), Some(&FieldError::InvalidChoice));
        assert!(matches!(errors.get(Field::Topic), Some(FieldError::Required(_))));
        assert_eq!(wizard.step, WizardStep::Schedule);
    }

    #[test]
    fn today_is_an_acceptable_date() {
        let mut wizard = ConsultationWizard::default();
        fill_personal(&mut wizard);
        wizard.advance(today()).unwrap();
        fill_schedule(&mut wizard);
        wizard.form.preferred_date = Some(today());
        assert!(wizard.advance(today()).is_ok());
    }

    #[test]
    fn back_keeps_values_and_stops_at_first_step() {
        let mut wizard = ConsultationWizard::default();
        fill_personal(&mut wizard);
        wizard.advance(today()).unwrap();
        wizard.back();
        assert_eq!(wizard.step, WizardStep::PersonalInfo);
        assert_eq!(wizard.form.name, "Ali");
        wizard.back();
        assert_eq!(wizard.step, WizardStep::PersonalInfo);
    }

    #[test]
    fn last_step_rechecks_earlier_fields() {
        let mut wizard = ConsultationWizard::default();
        fill_personal(&mut wizard);
        wizard.advance(today()).unwrap();
        fill_schedule(&mut wizard);
        wizard.advance(today()).unwrap();
        wizard.form.email.clear();
        let errors = wizard.advance(today()).unwrap_err();
        assert!(errors.get(Field::Email).is_some());
    }

    #[test]
    fn reset_returns_to_empty_first_step() {
        let mut wizard = ConsultationWizard::default();
        fill_personal(&mut wizard);
        wizard.advance(today()).unwrap();
        wizard.reset();
        assert_eq!(wizard, ConsultationWizard::default());
    }

    #[test]
    fn steps_are_numbered_in_order() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
