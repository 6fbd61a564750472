use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::store::models::initial;
use crate::store::use_store;

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel() -> Html {
    let store = use_store();
    let count = store.testimonials().len();

    // Relative step, so a manual selection just continues from the new index.
    {
        let store = store.clone();
        use_interval(
            move || store.next_testimonial(),
            if count > 1 { config::rotation_interval_ms() } else { 0 },
        );
    }

    let prev = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.prev_testimonial())
    };

    let next = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.next_testimonial())
    };

    let watch_video = Callback::from(|_: MouseEvent| {
        log::info!("Testimonial video requested");
    });

    let Some(current) = store.current_testimonial() else {
        return html! {
            <div id="testimonials" class="sidebar-card">
                <h3>{"آراء الطلاب"}</h3>
                <p class="muted">{"لا توجد تقييمات بعد"}</p>
            </div>
        };
    };

    html! {
        <div id="testimonials" class="sidebar-card testimonials">
            <style>
                {r#"
                .testimonials .card-head {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1.5rem;
                }
                .testimonial {
                    min-height: 16rem;
                    animation: rise 0.5s ease;
                }
                @keyframes rise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .student {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .student .avatar {
                    width: 4rem;
                    height: 4rem;
                    font-size: 1.25rem;
                }
                .student .role {
                    color: #64748b;
                    font-size: 0.85rem;
                }
                .student .course {
                    color: #3b82f6;
                    font-size: 0.85rem;
                    font-weight: 500;
                }
                .testimonial blockquote {
                    color: #374151;
                    font-style: italic;
                    line-height: 1.7;
                    margin: 1rem 0;
                }
                .carousel-controls {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-top: 1.5rem;
                }
                .carousel-controls .dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .carousel-controls .dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    padding: 0;
                    border: none;
                    border-radius: 9999px;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .carousel-controls .dot.active {
                    width: 1.5rem;
                    background: #3b82f6;
                }
                "#}
            </style>
            <div class="card-head">
                <h3>{"آراء الطلاب"}</h3>
                <span class="badge">{format!("{} تقييم", count)}</span>
            </div>

            <div class="testimonial" key={current.id.clone()}>
                <div class="student">
                    <div class="avatar">{initial(&current.name)}</div>
                    <div>
                        <h4>{&current.name}</h4>
                        <p class="role">{&current.role}</p>
                        <p class="course">{&current.course}</p>
                    </div>
                </div>
                <div class="card-rating">
                    { for (0..5u8).map(|i| html! {
                        <span class={if i < current.rating { "star filled" } else { "star" }}>{"★"}</span>
                    }) }
                    <span class="rating-value">{format!("{}/5", current.rating)}</span>
                </div>
                <blockquote>{format!("\"{}\"", current.content)}</blockquote>
                if current.video.is_some() {
                    <button class="btn-outline wide" onclick={watch_video}>
                        {"▶ مشاهدة الفيديو"}
                    </button>
                }
            </div>

            <div class="carousel-controls">
                <button class="icon-button" onclick={prev}>{"›"}</button>
                <div class="dots">
                    { for (0..count).map(|index| {
                        let active = index == store.current_testimonial;
                        let store = store.clone();
                        html! {
                            <button
                                class={classes!("dot", active.then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| store.set_current_testimonial(index))}
                            />
                        }
                    }) }
                </div>
                <button class="icon-button" onclick={next}>{"‹"}</button>
            </div>
        </div>
    }
}
