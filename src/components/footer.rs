use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::header::{scroll_to_section, scroll_to_top};
use crate::config;

static QUICK_LINKS: [(&str, &str); 4] = [
    ("الرئيسية", "hero"),
    ("الخدمات", "services"),
    ("آراء الطلاب", "testimonials"),
    ("اتصل بنا", "contact"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <footer class="lpc-footer">
                <style>
                    {r#"
                    .lpc-footer {
                        background: #0f172a;
                        color: #cbd5e1;
                        padding: 3rem 1.5rem 2rem;
                    }
                    .footer-grid {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 2rem;
                    }
                    .lpc-footer h4 {
                        color: white;
                        margin-bottom: 1rem;
                    }
                    .lpc-footer button.link {
                        display: block;
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        padding: 0.25rem 0;
                    }
                    .lpc-footer button.link:hover {
                        color: white;
                    }
                    .footer-bottom {
                        text-align: center;
                        border-top: 1px solid #1e293b;
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        font-size: 0.85rem;
                    }
                    .floating {
                        position: fixed;
                        bottom: 1.5rem;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 9999px;
                        border: none;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        color: white;
                        text-decoration: none;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                        cursor: pointer;
                        z-index: 40;
                    }
                    .floating.whatsapp {
                        inset-inline-start: 1.5rem;
                        background: #22c55e;
                    }
                    .floating.to-top {
                        inset-inline-end: 1.5rem;
                        background: #3b82f6;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    "#}
                </style>
                <div class="footer-grid">
                    <div>
                        <h4>{"LPC"}</h4>
                        <p>{"منصة تعليمية تقدم دورات تدريبية معتمدة واستشارات مهنية مع نخبة من الخبراء."}</p>
                    </div>
                    <div>
                        <h4>{"روابط سريعة"}</h4>
                        { for QUICK_LINKS.iter().map(|&(label, id)| html! {
                            <button class="link" onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id))}>
                                {label}
                            </button>
                        }) }
                    </div>
                    <div>
                        <h4>{"تواصل معنا"}</h4>
                        <p>{config::CONTACT_PHONE}</p>
                        <p>{config::CONTACT_EMAIL}</p>
                        <p>{config::CONTACT_ADDRESS}</p>
                    </div>
                </div>
                <div class="footer-bottom">
                    {"© LPC. جميع الحقوق محفوظة"}
                </div>
            </footer>

            <a
                class="floating whatsapp"
                href={config::whatsapp_url()}
                target="_blank"
                rel="noopener noreferrer"
            >
                {"💬"}
            </a>
            if scroll_y > 400.0 {
                <button class="floating to-top" onclick={to_top}>{"↑"}</button>
            }
        </>
    }
}
