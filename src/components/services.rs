pub mod filter;

use yew::prelude::*;

use crate::carousel;
use crate::components::fields::event_value;
use crate::store::models::{initial, Service};
use crate::store::{use_store, AppStore};
use filter::{CategoryFilter, ServiceFilter, ALL_CATEGORIES};

const CARDS_PER_PAGE: usize = 2;
const INITIAL_VISIBLE: usize = 4;

pub fn share_url(service: &Service) -> String {
    let text = format!("{} - {}", service.title, service.description);
    format!("https://wa.me/?text={}", urlencoding::encode(&text))
}

fn stars(rating: f32) -> Html {
    (0..5u8)
        .map(|i| {
            let class = if f32::from(i) < rating.floor() { "star filled" } else { "star" };
            html! { <span class={class}>{"★"}</span> }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    on_page: bool,
    folded: bool,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let store: AppStore = use_store();
    let service = &props.service;
    let favorite = store.is_favorite(&service.id);

    let open_details = {
        let store = store.clone();
        let id = service.id.clone();
        Callback::from(move |_: MouseEvent| store.set_service_modal_open(true, Some(id.clone())))
    };

    let toggle_favorite = {
        let store = store.clone();
        let id = service.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            store.toggle_favorite(&id);
        })
    };

    let extra_modules = service.modules.len().saturating_sub(2);

    html! {
        <div
            class={classes!(
                "service-card",
                props.on_page.then(|| "on-page"),
                props.folded.then(|| "folded")
            )}
        >
            <div class="card-top">
                <div class="card-icon">{&service.icon}</div>
                <div class="card-meta">
                    <span class="badge">{&service.category}</span>
                    <div class="card-facts">
                        <span>{format!("🕒 {}", service.duration)}</span>
                        <span>{format!("👥 {}", service.students)}</span>
                    </div>
                </div>
                <div class="card-tools">
                    <button
                        class={classes!("icon-button", favorite.then(|| "favorite"))}
                        onclick={toggle_favorite}
                    >
                        { if favorite { "♥" } else { "♡" } }
                    </button>
                    <a class="icon-button" href={share_url(service)} target="_blank" rel="noopener noreferrer">
                        {"⤴"}
                    </a>
                </div>
            </div>

            <h3>{&service.title}</h3>
            <p class="card-description">{&service.description}</p>

            <div class="card-rating">
                <div class="stars">{stars(service.rating)}</div>
                <span class="rating-value">{format!("{:.1}", service.rating)}</span>
                <span class="rating-count">{format!("({} طالب)", service.students)}</span>
                {
                    if service.is_free() {
                        html! { <span class="price free">{"مجاناً"}</span> }
                    } else {
                        html! { <span class="price">{format!("${}", service.price)}</span> }
                    }
                }
            </div>

            <div class="card-modules">
                <h4>{"ما ستتعلمه:"}</h4>
                { for service.modules.iter().take(2).map(|module| html! {
                    <div class="module">{module}</div>
                }) }
                if extra_modules > 0 {
                    <div class="module-more">{format!("+ {} موضوع إضافي", extra_modules)}</div>
                }
            </div>

            <div class="card-actions">
                <button class="btn-primary" onclick={open_details.clone()}>
                    { if service.is_free() { "احصل على الاستشارة" } else { "اشترك الآن" } }
                </button>
                <button class="btn-outline" onclick={open_details}>{"التفاصيل"}</button>
            </div>

            <div class="card-instructor">
                <div class="avatar">{initial(&service.instructor.name)}</div>
                <div>
                    <p class="name">{&service.instructor.name}</p>
                    <p class="role">{"مدرب معتمد"}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let store = use_store();
    let filter = use_state(ServiceFilter::default);
    let page = use_state(|| 0usize);
    let show_all = use_state(|| false);

    let filtered = filter.apply(store.services());
    let pages = carousel::page_count(filtered.len(), CARDS_PER_PAGE);
    let current_page = carousel::clamp_page(*page, pages);
    let visible = if *show_all {
        filtered.len()
    } else {
        filtered.len().min(INITIAL_VISIBLE)
    };

    let on_search = {
        let filter = filter.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*filter).clone();
            next.query = event_value(&e);
            filter.set(next);
            page.set(0);
        })
    };

    let on_category = {
        let filter = filter.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let mut next = (*filter).clone();
            next.category = CategoryFilter::from_value(&event_value(&e));
            log::debug!("Category filter: {}", next.category.value());
            filter.set(next);
            page.set(0);
        })
    };

    let next_page = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(carousel::next_index(current_page, pages)))
    };

    let prev_page = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(carousel::prev_index(current_page, pages)))
    };

    let load_more = {
        let show_all = show_all.clone();
        Callback::from(move |_: MouseEvent| show_all.set(true))
    };

    let categories = store.catalog.categories();

    html! {
        <section id="services" class="lpc-services">
            <style>
                {r#"
                .lpc-services .section-head {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .lpc-services h2 {
                    font-size: 2.75rem;
                    margin: 1rem 0 1.5rem;
                }
                .lpc-services .lead {
                    font-size: 1.2rem;
                    color: #64748b;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .filters {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 3rem;
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.8);
                    border-radius: 1rem;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
                }
                .filters input {
                    flex: 1;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    background: white;
                    border-radius: 1.25rem;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card.folded {
                    display: none;
                }
                .service-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 40px rgba(59, 130, 246, 0.15);
                }
                .card-top {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .card-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #3b82f6, #8b5cf6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                }
                .card-meta {
                    flex: 1;
                }
                .card-facts {
                    display: flex;
                    gap: 1rem;
                    color: #64748b;
                    font-size: 0.85rem;
                    margin-top: 0.5rem;
                }
                .card-tools {
                    display: flex;
                    gap: 0.5rem;
                }
                .icon-button {
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #94a3b8;
                    cursor: pointer;
                    text-decoration: none;
                }
                .icon-button.favorite {
                    color: #ef4444;
                }
                .card-description {
                    color: #64748b;
                    margin: 1rem 0 1.5rem;
                    line-height: 1.6;
                }
                .card-rating {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .star {
                    color: #d1d5db;
                }
                .star.filled {
                    color: #facc15;
                }
                .rating-count {
                    color: #64748b;
                    font-size: 0.85rem;
                }
                .price {
                    margin-inline-start: auto;
                    font-size: 1.75rem;
                    font-weight: 700;
                    color: #3b82f6;
                }
                .price.free {
                    font-size: 1rem;
                    color: #15803d;
                    background: #dcfce7;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                }
                .card-modules .module {
                    color: #64748b;
                    font-size: 0.9rem;
                    padding: 0.2rem 0;
                }
                .card-modules .module::before {
                    content: "• ";
                    color: #3b82f6;
                }
                .module-more {
                    color: #3b82f6;
                    font-size: 0.9rem;
                    font-weight: 500;
                }
                .card-actions {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .card-actions .btn-primary {
                    flex: 1;
                }
                .card-instructor {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(226, 232, 240, 0.6);
                }
                .card-instructor .role {
                    color: #64748b;
                    font-size: 0.85rem;
                }
                .pager {
                    display: none;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 3rem;
                }
                .pager .dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #d1d5db;
                    border: none;
                    padding: 0;
                }
                .pager .dot.active {
                    width: 1.5rem;
                    background: #3b82f6;
                }
                .empty-results {
                    text-align: center;
                    color: #64748b;
                    padding: 3rem 0;
                }
                .load-more {
                    text-align: center;
                    margin-top: 3rem;
                }
                @media (max-width: 768px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                    .service-card.folded.on-page {
                        display: block;
                    }
                    .service-card:not(.on-page) {
                        display: none;
                    }
                    .pager {
                        display: flex;
                    }
                    .desktop-only {
                        display: none;
                    }
                    .filters {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
            <div class="section-head">
                <span class="badge">{"خدماتنا المميزة"}</span>
                <h2>
                    {"تتوفر مجموعة واسعة من الوظائف "}
                    <span class="accent">{"المطلوبة لخريجيها"}</span>
                </h2>
                <p class="lead">
                    {"اختر من بين أكثر من 52 دورة تدريبية متخصصة، مصممة بعناية من قبل خبراء في المجال لتضمن حصولك على أفضل تجربة تعليمية ممكنة."}
                </p>
            </div>

            <div class="filters">
                <input
                    class="lpc-input"
                    type="search"
                    placeholder="ابحث عن الدورة المناسبة..."
                    value={filter.query.clone()}
                    oninput={on_search}
                />
                <select class="lpc-input" onchange={on_category}>
                    <option value={ALL_CATEGORIES} selected={filter.category == CategoryFilter::All}>
                        {"جميع الفئات"}
                    </option>
                    { for categories.iter().map(|category| html! {
                        <option value={category.to_string()} selected={filter.category.value() == *category}>
                            {*category}
                        </option>
                    }) }
                </select>
            </div>

            if filtered.is_empty() {
                <p class="empty-results">{"لا توجد دورات مطابقة لبحثك"}</p>
            }

            <div class="services-grid">
                { for filtered.iter().enumerate().map(|(i, service)| html! {
                    <ServiceCard
                        key={service.id.clone()}
                        service={(*service).clone()}
                        on_page={i / CARDS_PER_PAGE == current_page}
                        folded={i >= visible}
                    />
                }) }
            </div>

            if pages > 1 {
                <div class="pager">
                    <button class="icon-button" onclick={prev_page}>{"›"}</button>
                    { for (0..pages).map(|idx| {
                        let page = page.clone();
                        html! {
                            <button
                                class={classes!("dot", (idx == current_page).then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| page.set(idx))}
                            />
                        }
                    }) }
                    <button class="icon-button" onclick={next_page}>{"‹"}</button>
                </div>
            }

            if filtered.len() > INITIAL_VISIBLE && !*show_all {
                <div class="load-more desktop-only">
                    <button class="btn-outline" onclick={load_more}>{"عرض المزيد من الدورات"}</button>
                </div>
            }
        </section>
    }
}
