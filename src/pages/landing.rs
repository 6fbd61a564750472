use yew::prelude::*;

use crate::components::{
    footer::Footer, header::Header, hero::Hero, modals::Modals, services::Services,
    sidebar::Sidebar, statistics::StatisticsSection,
};
use crate::store::use_store;

fn lock_body_scroll(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let overflow = if locked { "hidden" } else { "" };
        if body.style().set_property("overflow", overflow).is_err() {
            log::warn!("Could not update body scroll lock");
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let store = use_store();
    let modal_open = store.any_modal_open();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    use_effect_with_deps(
        move |locked| {
            lock_body_scroll(*locked);
            || lock_body_scroll(false)
        },
        modal_open,
    );

    html! {
        <div class="lpc-landing" dir="rtl">
            <style>
                {r#"
                .lpc-landing {
                    min-height: 100vh;
                    background: linear-gradient(180deg, #f8fafc 0%, #eef2ff 100%);
                    color: #1e293b;
                    font-family: 'Cairo', 'Segoe UI', sans-serif;
                }
                .lpc-landing * {
                    box-sizing: border-box;
                }
                .lpc-main {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .content-row {
                    display: flex;
                    gap: 2rem;
                    align-items: flex-start;
                    margin-top: 4rem;
                }
                .content-row > .lpc-services {
                    flex: 1;
                    min-width: 0;
                }
                .btn-primary {
                    background: linear-gradient(45deg, #3b82f6, #8b5cf6);
                    color: white;
                    border: none;
                    border-radius: 0.75rem;
                    padding: 0.85rem 1.75rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .btn-primary:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 10px 25px rgba(59, 130, 246, 0.35);
                }
                .btn-primary:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                    transform: none;
                }
                .btn-outline {
                    background: transparent;
                    color: #3b82f6;
                    border: 1px solid #3b82f6;
                    border-radius: 0.75rem;
                    padding: 0.85rem 1.5rem;
                    font-weight: 500;
                    cursor: pointer;
                    text-decoration: none;
                }
                .btn-outline:hover {
                    background: #3b82f6;
                    color: white;
                }
                .btn-outline.light {
                    color: white;
                    border-color: rgba(255, 255, 255, 0.6);
                }
                .btn-outline.favorite {
                    color: #ef4444;
                    border-color: #ef4444;
                }
                .wide {
                    width: 100%;
                }
                .link-button {
                    background: none;
                    border: none;
                    color: #3b82f6;
                    cursor: pointer;
                    padding: 0;
                }
                .lpc-input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.75rem;
                    font-size: 1rem;
                    background: white;
                }
                .lpc-input:focus {
                    outline: none;
                    border-color: #3b82f6;
                    box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.15);
                }
                .lpc-input.invalid {
                    border-color: #dc2626;
                }
                .field-error {
                    color: #dc2626;
                    font-size: 0.85rem;
                    margin: 0.25rem 0 0;
                }
                .password-field {
                    position: relative;
                }
                .password-field .icon-button {
                    position: absolute;
                    top: 0.6rem;
                    inset-inline-end: 0.75rem;
                }
                .badge {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(59, 130, 246, 0.1);
                    color: #3b82f6;
                    font-size: 0.85rem;
                    font-weight: 500;
                }
                .accent {
                    background: linear-gradient(45deg, #3b82f6, #8b5cf6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(135deg, #3b82f6, #8b5cf6);
                    color: white;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .muted {
                    color: #64748b;
                }
                @media (max-width: 1024px) {
                    .content-row {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
            <Header />
            <Hero />
            <main class="lpc-main">
                <StatisticsSection />
                <div class="content-row">
                    <Services />
                    <Sidebar />
                </div>
            </main>
            <Footer />
            <Modals />
        </div>
    }
}
