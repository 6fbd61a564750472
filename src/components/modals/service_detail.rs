use yew::prelude::*;

use super::ModalFrame;
use crate::components::services::share_url;
use crate::components::statistics::format_thousands;
use crate::store::models::initial;
use crate::store::use_store;

static INCLUDED: [&str; 4] = [
    "شهادة معتمدة",
    "وصول مدى الحياة",
    "دعم فني 24/7",
    "مشاريع تطبيقية",
];

#[function_component(ServiceModal)]
pub fn service_modal() -> Html {
    let store = use_store();

    let on_close = {
        let store = store.clone();
        Callback::from(move |_: ()| store.set_service_modal_open(false, None))
    };

    if !store.service_modal_open {
        return html! {};
    }

    let Some(service) = store.selected_service() else {
        return html! {
            <ModalFrame title="الدورة غير متوفرة" {on_close}>
                <p class="modal-description">{"لم يتم العثور على الدورة المطلوبة"}</p>
            </ModalFrame>
        };
    };

    let favorite = store.is_favorite(&service.id);
    let toggle_favorite = {
        let store = store.clone();
        let id = service.id.clone();
        Callback::from(move |_: MouseEvent| store.toggle_favorite(&id))
    };

    // Free offerings are consultations; paid ones need an account first.
    let primary_action = {
        let store = store.clone();
        let id = service.id.clone();
        let free = service.is_free();
        Callback::from(move |_: MouseEvent| {
            if free {
                store.set_consultation_modal_open(true);
            } else if let Some(user) = store.user.as_ref() {
                log::info!("Enrollment requested by {} for {}", user.email, id);
            } else {
                store.set_login_modal_open(true);
            }
        })
    };

    html! {
        <ModalFrame title={service.title.clone()} wide=true {on_close}>
            <style>
                {r#"
                .service-detail {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 1.5rem;
                }
                .service-detail h3 {
                    font-size: 1.2rem;
                    margin: 1.5rem 0 0.75rem;
                }
                .service-heading {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    font-size: 2.5rem;
                }
                .numbered-module {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem;
                    margin-bottom: 0.5rem;
                    background: #f1f5f9;
                    border-radius: 0.5rem;
                }
                .numbered-module .index {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    background: #3b82f6;
                    color: white;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .instructor-box {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    padding: 1rem;
                    background: #f1f5f9;
                    border-radius: 0.5rem;
                }
                .price-box {
                    background: linear-gradient(135deg, #3b82f6, #8b5cf6);
                    color: white;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    text-align: center;
                    font-size: 1.75rem;
                    font-weight: 700;
                }
                .price-box small {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 400;
                    opacity: 0.8;
                }
                .fact {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.4rem 0;
                }
                .fact .key {
                    color: #64748b;
                }
                .detail-tools {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 0.75rem;
                }
                .detail-tools > * {
                    flex: 1;
                    text-align: center;
                }
                .included {
                    border: 1px solid #e2e8f0;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    margin-top: 1.5rem;
                    font-size: 0.9rem;
                    color: #64748b;
                }
                @media (max-width: 768px) {
                    .service-detail {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="service-heading">
                <span>{&service.icon}</span>
                <span class="badge">{&service.category}</span>
            </div>
            <div class="service-detail">
                <div>
                    <h3>{"عن الدورة"}</h3>
                    <p class="card-description">{&service.description}</p>

                    <h3>{"محتوى الدورة"}</h3>
                    { for service.modules.iter().enumerate().map(|(i, module)| html! {
                        <div class="numbered-module">
                            <span class="index">{(i + 1).to_string()}</span>
                            <span>{module}</span>
                        </div>
                    }) }

                    <h3>{"المدرب"}</h3>
                    <div class="instructor-box">
                        <div class="avatar">{initial(&service.instructor.name)}</div>
                        <div>
                            <h4>{&service.instructor.name}</h4>
                            <p class="card-description">{&service.instructor.bio}</p>
                        </div>
                    </div>
                </div>

                <div>
                    <div class="price-box">
                        if service.is_free() {
                            {"مجاناً"}
                        } else {
                            {format!("${}", service.price)}
                            <small>{"للدورة كاملة"}</small>
                        }
                    </div>
                    <div class="fact">
                        <span class="key">{"المدة:"}</span>
                        <span>{&service.duration}</span>
                    </div>
                    <div class="fact">
                        <span class="key">{"الطلاب:"}</span>
                        <span>{format_thousands(service.students)}</span>
                    </div>
                    <div class="fact">
                        <span class="key">{"التقييم:"}</span>
                        <span>{format!("⭐ {:.1}", service.rating)}</span>
                    </div>

                    <button class="btn-primary wide" onclick={primary_action}>
                        { if service.is_free() { "احجز الاستشارة" } else { "اشترك الآن" } }
                    </button>
                    <div class="detail-tools">
                        <button
                            class={classes!("btn-outline", favorite.then(|| "favorite"))}
                            onclick={toggle_favorite}
                        >
                            { if favorite { "♥" } else { "♡" } }
                        </button>
                        <a class="btn-outline" href={share_url(service)} target="_blank" rel="noopener noreferrer">
                            {"⤴"}
                        </a>
                    </div>

                    <div class="included">
                        <h4>{"يشمل:"}</h4>
                        { for INCLUDED.iter().map(|item| html! { <div>{format!("✓ {}", item)}</div> }) }
                    </div>
                </div>
            </div>
        </ModalFrame>
    }
}
