use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" dir="rtl">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: linear-gradient(135deg, #1e3a8a 0%, #6d28d9 100%);
                    color: white;
                    text-align: center;
                }
                .not-found h1 {
                    font-size: 5rem;
                    margin: 0;
                }
                .not-found .home-link {
                    color: white;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    border-radius: 0.75rem;
                    padding: 0.75rem 1.5rem;
                    text-decoration: none;
                }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"الصفحة التي تبحث عنها غير موجودة"}</p>
            <Link<Route> to={Route::Home} classes="home-link">
                {"العودة إلى الصفحة الرئيسية"}
            </Link<Route>>
        </div>
    }
}
