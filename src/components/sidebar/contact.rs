use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::fields::{bind, error_text, input_class};
use crate::config;
use crate::forms::{ContactForm, Field, FieldErrors};
use crate::store::{api, use_store};

#[function_component(ContactPanel)]
pub fn contact_panel() -> Html {
    let store = use_store();
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::new);
    let is_submitting = use_state(|| false);
    let submitted = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let submitted = submitted.clone();
        let latency = store.latency();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let message = (*form).clone();
            if let Err(found) = message.validate() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            is_submitting.set(true);

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let submitted = submitted.clone();
            spawn_local(async move {
                api::submit_contact(&latency, &message).await;
                is_submitting.set(false);
                submitted.set(true);
                form.set(ContactForm::default());

                TimeoutFuture::new(config::contact_success_ms()).await;
                submitted.set(false);
            });
        })
    };

    html! {
        <div id="contact" class="sidebar-card contact">
            <style>
                {r#"
                .contact .intro {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .contact .intro p,
                .contact .hint {
                    color: #64748b;
                }
                .contact form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact .row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .contact textarea {
                    min-height: 7.5rem;
                    resize: none;
                }
                .contact .hint {
                    font-size: 0.75rem;
                    text-align: center;
                }
                .success-panel {
                    text-align: center;
                    padding: 2rem 0;
                }
                .success-panel .check {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 9999px;
                    background: #dcfce7;
                    color: #16a34a;
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .contact-ways {
                    border-top: 1px solid #f1f5f9;
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                }
                .contact-ways div {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 0.9rem;
                    padding: 0.35rem 0;
                }
                @media (max-width: 640px) {
                    .contact .row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="intro">
                <h3>{"سؤال مختار؟"}</h3>
                <p>{"نحن هنا للإجابة على جميع استفساراتك وتقديم المساعدة"}</p>
            </div>

            if *submitted {
                <div class="success-panel">
                    <div class="check">{"✓"}</div>
                    <h4>{"تم الإرسال بنجاح!"}</h4>
                    <p class="hint">{"سنتواصل معك خلال 24 ساعة"}</p>
                </div>
            } else {
                <form {onsubmit}>
                    <div>
                        <input
                            class={input_class(&errors, Field::Name)}
                            placeholder="الاسم الكامل *"
                            value={form.name.clone()}
                            oninput={bind(&form, |f, v| f.name = v)}
                        />
                        { error_text(&errors, Field::Name) }
                    </div>
                    <div class="row">
                        <div>
                            <input
                                type="email"
                                class={input_class(&errors, Field::Email)}
                                placeholder="البريد الإلكتروني *"
                                value={form.email.clone()}
                                oninput={bind(&form, |f, v| f.email = v)}
                            />
                            { error_text(&errors, Field::Email) }
                        </div>
                        <div>
                            <input
                                type="tel"
                                class={input_class(&errors, Field::Phone)}
                                placeholder="رقم الهاتف *"
                                value={form.phone.clone()}
                                oninput={bind(&form, |f, v| f.phone = v)}
                            />
                            { error_text(&errors, Field::Phone) }
                        </div>
                    </div>
                    <div>
                        <input
                            class={input_class(&errors, Field::Subject)}
                            placeholder="الموضوع *"
                            value={form.subject.clone()}
                            oninput={bind(&form, |f, v| f.subject = v)}
                        />
                        { error_text(&errors, Field::Subject) }
                    </div>
                    <div>
                        <textarea
                            class={input_class(&errors, Field::Message)}
                            placeholder="اكتب رسالتك هنا... *"
                            value={form.message.clone()}
                            oninput={bind(&form, |f, v| f.message = v)}
                        />
                        { error_text(&errors, Field::Message) }
                    </div>
                    <button type="submit" class="btn-primary wide" disabled={*is_submitting}>
                        { if *is_submitting { "جاري الإرسال..." } else { "إرسال الرسالة" } }
                    </button>
                    <p class="hint">{"* جميع الحقول مطلوبة"}</p>
                </form>
            }

            <div class="contact-ways">
                <h4>{"طرق التواصل الأخرى"}</h4>
                <div><span>{"📞"}</span><span>{config::CONTACT_PHONE}</span></div>
                <div><span>{"✉️"}</span><span>{config::CONTACT_EMAIL}</span></div>
                <div>
                    <span>{"💬"}</span>
                    <a href={config::whatsapp_url()} target="_blank" rel="noopener noreferrer">
                        {format!("واتساب: {}", config::CONTACT_PHONE)}
                    </a>
                </div>
                <div><span>{"📍"}</span><span>{config::CONTACT_ADDRESS}</span></div>
            </div>
        </div>
    }
}
