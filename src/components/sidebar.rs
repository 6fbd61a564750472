mod contact;
mod testimonials;

use yew::prelude::*;

use contact::ContactPanel;
use testimonials::TestimonialCarousel;

static REASONS: [(&str, &str); 3] = [
    ("🕒", "دعم على مدار 24 ساعة"),
    ("⭐", "مدربين معتمدين دولياً"),
    ("📄", "شهادات معترف بها"),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <aside class="lpc-sidebar">
            <style>
                {r#"
                .lpc-sidebar {
                    width: 24rem;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .sidebar-card {
                    background: white;
                    border-radius: 1.25rem;
                    padding: 1.5rem;
                    border: 1px solid #f1f5f9;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
                }
                .sidebar-card h3 {
                    font-size: 1.5rem;
                    margin: 0;
                }
                .reasons {
                    background: linear-gradient(135deg, #3b82f6, #8b5cf6);
                    color: white;
                    border-radius: 1.25rem;
                    padding: 1.5rem;
                }
                .reasons h3 {
                    font-size: 1.25rem;
                    margin: 0 0 1rem;
                }
                .reason {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.9rem;
                    padding: 0.35rem 0;
                }
                .reason .icon {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                @media (max-width: 1024px) {
                    .lpc-sidebar {
                        width: 100%;
                    }
                }
                "#}
            </style>
            <TestimonialCarousel />
            <div class="reasons">
                <h3>{"لماذا نختار؟"}</h3>
                { for REASONS.iter().map(|&(icon, text)| html! {
                    <div class="reason">
                        <span class="icon">{icon}</span>
                        <span>{text}</span>
                    </div>
                }) }
            </div>
            <ContactPanel />
        </aside>
    }
}
