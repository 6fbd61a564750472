use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::store::use_store;

static NAV_ITEMS: [(&str, &str); 4] = [
    ("الرئيسية", "hero"),
    ("الخدمات", "services"),
    ("آراء الطلاب", "testimonials"),
    ("اتصل بنا", "contact"),
];

pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No section with id '{}'", id),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let store = use_store();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 50.0;
    let menu_open = use_state(|| false);
    let account_open = use_state(|| false);

    let navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let open_login = {
        let store = store.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            store.set_login_modal_open(true);
            menu_open.set(false);
        })
    };

    let toggle_account = {
        let account_open = account_open.clone();
        Callback::from(move |_: MouseEvent| account_open.set(!*account_open))
    };

    let logout = {
        let store = store.clone();
        let account_open = account_open.clone();
        Callback::from(move |_: MouseEvent| {
            account_open.set(false);
            store.logout();
        })
    };

    let nav_buttons = |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|&(label, id)| {
                let onclick = navigate.reform(move |_: MouseEvent| id);
                html! { <button class={class} {onclick}>{label}</button> }
            })
            .collect::<Html>()
    };

    html! {
        <header class={classes!("lpc-header", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                .lpc-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: all 0.5s ease;
                    background: transparent;
                }
                .lpc-header.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
                }
                .lpc-header .header-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .lpc-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: white;
                }
                .lpc-header.scrolled .lpc-logo,
                .lpc-header.scrolled .nav-item,
                .lpc-header.scrolled .account-button {
                    color: #1e293b;
                }
                .lpc-logo .mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #3b82f6, #8b5cf6);
                    color: white;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .desktop-nav {
                    display: flex;
                    gap: 2rem;
                }
                .nav-item {
                    background: none;
                    border: none;
                    color: white;
                    font-weight: 500;
                    cursor: pointer;
                }
                .nav-item:hover {
                    color: #3b82f6;
                }
                .account {
                    position: relative;
                }
                .account-button {
                    background: none;
                    border: none;
                    color: white;
                    cursor: pointer;
                    font-weight: 500;
                }
                .account-menu {
                    position: absolute;
                    top: 2.5rem;
                    inset-inline-end: 0;
                    width: 12rem;
                    background: rgba(255, 255, 255, 0.97);
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
                    padding: 0.5rem 0;
                }
                .account-menu button {
                    display: block;
                    width: 100%;
                    text-align: start;
                    padding: 0.5rem 1rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .account-menu .logout {
                    color: #dc2626;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: inherit;
                    cursor: pointer;
                }
                .mobile-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 40;
                }
                .mobile-nav {
                    position: fixed;
                    top: 0;
                    bottom: 0;
                    inset-inline-end: 0;
                    width: 20rem;
                    background: rgba(255, 255, 255, 0.97);
                    padding: 1.5rem;
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .mobile-nav .nav-link {
                    text-align: start;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    background: none;
                    border: none;
                    font-weight: 500;
                    cursor: pointer;
                }
                .mobile-nav .nav-link:hover {
                    background: #f1f5f9;
                }
                @media (max-width: 1024px) {
                    .desktop-nav, .account {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                }
                "#}
            </style>
            <div class="header-content">
                <button class="lpc-logo" onclick={navigate.reform(|_: MouseEvent| "hero")}>
                    <span class="mark">{"L"}</span>
                    <span>{"LPC"}</span>
                </button>

                <nav class="desktop-nav">
                    { nav_buttons("nav-item") }
                </nav>

                <div class="account">
                    {
                        if let Some(user) = store.user.as_ref() {
                            html! {
                                <>
                                    <button class="account-button" onclick={toggle_account}>
                                        {format!("👤 {} ▾", user.name)}
                                    </button>
                                    if *account_open {
                                        <div class="account-menu">
                                            <button>{"لوحة التحكم"}</button>
                                            <button>{"دوراتي"}</button>
                                            <button>{"الشهادات"}</button>
                                            <button class="logout" onclick={logout}>{"تسجيل الخروج"}</button>
                                        </div>
                                    }
                                </>
                            }
                        } else {
                            html! {
                                <button class="btn-outline" onclick={open_login.clone()}>
                                    {"تسجيل الدخول"}
                                </button>
                            }
                        }
                    }
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-overlay" onclick={close_menu.clone()}></div>
                <nav class="mobile-nav">
                    <button class="nav-link" onclick={close_menu}>{"✕"}</button>
                    { nav_buttons("nav-link") }
                    if store.user.is_none() {
                        <button class="btn-primary" onclick={open_login}>
                            {"تسجيل الدخول"}
                        </button>
                    }
                </nav>
            }
        </header>
    }
}
