use chrono::{Local, NaiveDate};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::wizard::{Advance, ConsultationWizard, WizardStep, TIME_SLOTS, TOPICS};
use super::ModalFrame;
use crate::components::fields::{bind, bind_change, error_text, input_class};
use crate::forms::{Field, FieldError, FieldErrors};
use crate::store::use_store;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn step_indicator(current: WizardStep) -> Html {
    html! {
        <div class="wizard-steps">
            { for WizardStep::ALL.iter().map(|&step| {
                let reached = step.number() <= current.number();
                html! {
                    <div class={classes!("wizard-step", reached.then(|| "reached"))}>
                        <span class="number">
                            { if step.number() < current.number() { "✓".to_string() } else { step.number().to_string() } }
                        </span>
                        <span class="label">{step.title()}</span>
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(ConsultationModal)]
pub fn consultation_modal() -> Html {
    let store = use_store();
    let wizard = use_state(ConsultationWizard::default);
    let errors = use_state(FieldErrors::new);
    let is_booking = use_state(|| false);

    let on_close = {
        let store = store.clone();
        Callback::from(move |_: ()| store.set_consultation_modal_open(false))
    };

    let back = {
        let wizard = wizard.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.back();
            wizard.set(next);
            errors.set(FieldErrors::new());
        })
    };

    let onsubmit = {
        let store = store.clone();
        let wizard = wizard.clone();
        let errors = errors.clone();
        let is_booking = is_booking.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_booking || store.booking_pending() {
                return;
            }
            let mut next = (*wizard).clone();
            match next.advance(today()) {
                Err(found) => errors.set(found),
                Ok(Advance::Moved(step)) => {
                    log::debug!("Consultation wizard moved to step {}", step.number());
                    errors.set(FieldErrors::new());
                    wizard.set(next);
                }
                Ok(Advance::Ready(booking)) => {
                    errors.set(FieldErrors::new());
                    is_booking.set(true);

                    let store = store.clone();
                    let wizard = wizard.clone();
                    let errors = errors.clone();
                    let is_booking = is_booking.clone();
                    spawn_local(async move {
                        match store.book_consultation(&booking).await {
                            Ok(()) => wizard.set(ConsultationWizard::default()),
                            Err(e) => {
                                log::warn!("Booking rejected: {}", e);
                                let mut rejected = FieldErrors::new();
                                rejected.insert(Field::Message, FieldError::Rejected(e.to_string()));
                                errors.set(rejected);
                            }
                        }
                        is_booking.set(false);
                    });
                }
            }
        })
    };

    if !store.consultation_modal_open {
        return html! {};
    }

    let form = &wizard.form;
    let min_date = today().format(DATE_FORMAT).to_string();
    let date_value = form
        .preferred_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    let body = match wizard.step {
        WizardStep::PersonalInfo => html! {
            <>
                <div>
                    <input
                        class={input_class(&errors, Field::Name)}
                        placeholder="الاسم الكامل *"
                        value={form.name.clone()}
                        oninput={bind(&wizard, |w, v| w.form.name = v)}
                    />
                    { error_text(&errors, Field::Name) }
                </div>
                <div>
                    <input
                        type="email"
                        class={input_class(&errors, Field::Email)}
                        placeholder="البريد الإلكتروني *"
                        value={form.email.clone()}
                        oninput={bind(&wizard, |w, v| w.form.email = v)}
                    />
                    { error_text(&errors, Field::Email) }
                </div>
                <div>
                    <input
                        type="tel"
                        class={input_class(&errors, Field::Phone)}
                        placeholder="رقم الهاتف *"
                        value={form.phone.clone()}
                        oninput={bind(&wizard, |w, v| w.form.phone = v)}
                    />
                    { error_text(&errors, Field::Phone) }
                </div>
            </>
        },
        WizardStep::Schedule => html! {
            <>
                <div>
                    <label>{"التاريخ المفضل"}</label>
                    <input
                        type="date"
                        class={input_class(&errors, Field::PreferredDate)}
                        min={min_date}
                        value={date_value}
                        oninput={bind(&wizard, |w, v| {
                            w.form.preferred_date = NaiveDate::parse_from_str(&v, DATE_FORMAT).ok()
                        })}
                    />
                    { error_text(&errors, Field::PreferredDate) }
                </div>
                <div>
                    <label>{"الوقت المفضل"}</label>
                    <select
                        class={input_class(&errors, Field::PreferredTime)}
                        onchange={bind_change(&wizard, |w, v| w.form.preferred_time = v)}
                    >
                        <option value="" selected={form.preferred_time.is_empty()}>{"اختر الوقت المناسب"}</option>
                        { for TIME_SLOTS.iter().map(|&slot| html! {
                            <option value={slot} selected={form.preferred_time == slot}>{slot}</option>
                        }) }
                    </select>
                    { error_text(&errors, Field::PreferredTime) }
                </div>
                <div>
                    <label>{"موضوع الاستشارة"}</label>
                    <select
                        class={input_class(&errors, Field::Topic)}
                        onchange={bind_change(&wizard, |w, v| w.form.topic = v)}
                    >
                        <option value="" selected={form.topic.is_empty()}>{"اختر الموضوع"}</option>
                        { for TOPICS.iter().map(|&topic| html! {
                            <option value={topic} selected={form.topic == topic}>{topic}</option>
                        }) }
                    </select>
                    { error_text(&errors, Field::Topic) }
                </div>
            </>
        },
        WizardStep::Details => html! {
            <>
                <div>
                    <textarea
                        class={input_class(&errors, Field::Message)}
                        placeholder="اكتب أي تفاصيل إضافية أو أسئلة محددة..."
                        value={form.message.clone()}
                        oninput={bind(&wizard, |w, v| w.form.message = v)}
                    />
                    { error_text(&errors, Field::Message) }
                </div>
                <div class="booking-summary">
                    <h4>{"ملخص حجزك:"}</h4>
                    <p>{format!("التاريخ: {}", date_value)}</p>
                    <p>{format!("الوقت: {}", form.preferred_time)}</p>
                    <p>{format!("الموضوع: {}", form.topic)}</p>
                </div>
            </>
        },
    };

    let submit_label = match (wizard.step, *is_booking) {
        (WizardStep::Details, true) => "جاري الحجز...",
        (WizardStep::Details, false) => "تأكيد الحجز",
        _ => "التالي",
    };

    html! {
        <ModalFrame
            title="احجز استشارة مجانية"
            description="استشارة شخصية لمدة 30 دقيقة مع خبرائنا المعتمدين"
            {on_close}
        >
            <style>
                {r#"
                .wizard-steps {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 1.5rem;
                }
                .wizard-step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.35rem;
                    color: #94a3b8;
                    font-size: 0.8rem;
                }
                .wizard-step .number {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: #e2e8f0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                }
                .wizard-step.reached {
                    color: #3b82f6;
                }
                .wizard-step.reached .number {
                    background: #3b82f6;
                    color: white;
                }
                .booking-summary {
                    background: #f8fafc;
                    border-radius: 0.75rem;
                    padding: 1rem;
                    font-size: 0.9rem;
                }
                .wizard-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .wizard-actions .btn-primary {
                    flex: 1;
                }
                "#}
            </style>
            { step_indicator(wizard.step) }
            <form {onsubmit}>
                <h3>{wizard.step.title()}</h3>
                { body }
                <div class="wizard-actions">
                    if wizard.step != WizardStep::PersonalInfo {
                        <button type="button" class="btn-outline" onclick={back} disabled={*is_booking}>
                            {"السابق"}
                        </button>
                    }
                    <button type="submit" class="btn-primary" disabled={*is_booking}>
                        {submit_label}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
