use yew::prelude::*;

use crate::components::header::scroll_to_section;
use crate::components::statistics::format_thousands;
use crate::store::use_store;

#[function_component(Hero)]
pub fn hero() -> Html {
    let store = use_store();
    let students = format_thousands(store.catalog.statistics.students);

    let book_consultation = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.set_consultation_modal_open(true))
    };

    let explore = Callback::from(|_: MouseEvent| scroll_to_section("services"));

    html! {
        <section id="hero" class="lpc-hero">
            <style>
                {r#"
                .lpc-hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #1e3a8a 0%, #6d28d9 100%);
                    color: white;
                    padding: 8rem 1.5rem 4rem;
                }
                .lpc-hero .orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(80px);
                    opacity: 0.4;
                    animation: drift 20s linear infinite;
                }
                .lpc-hero .orb.one {
                    width: 24rem;
                    height: 24rem;
                    background: #3b82f6;
                    top: -6rem;
                    inset-inline-start: -6rem;
                }
                .lpc-hero .orb.two {
                    width: 20rem;
                    height: 20rem;
                    background: #ec4899;
                    bottom: -4rem;
                    inset-inline-end: -4rem;
                    animation-duration: 25s;
                    animation-direction: reverse;
                }
                @keyframes drift {
                    0% { transform: translate(-50px, -25px); }
                    50% { transform: translate(50px, 25px); }
                    100% { transform: translate(-50px, -25px); }
                }
                .lpc-hero .hero-content {
                    position: relative;
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.15);
                    font-size: 0.9rem;
                    margin-bottom: 1.5rem;
                }
                .lpc-hero h1 {
                    font-size: 3rem;
                    line-height: 1.2;
                    margin-bottom: 1.5rem;
                }
                .lpc-hero h1 .accent {
                    background: linear-gradient(45deg, #fde68a, #f9a8d4);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .lpc-hero p {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.85);
                    margin-bottom: 2rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .hero-proof {
                    display: flex;
                    gap: 2rem;
                    margin-top: 2.5rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .hero-card {
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 1.5rem;
                    padding: 2rem;
                    backdrop-filter: blur(10px);
                    text-align: center;
                    font-size: 4rem;
                }
                @media (max-width: 900px) {
                    .lpc-hero .hero-content {
                        grid-template-columns: 1fr;
                    }
                    .lpc-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
            <div class="orb one"></div>
            <div class="orb two"></div>
            <div class="hero-content">
                <div>
                    <span class="hero-badge">{"✨ Plataforma #1 de Aprendizaje"}</span>
                    <h1>
                        {"Obtén los Mejores Cursos de Formación "}
                        <span class="accent">{"y Adquiere las Habilidades Necesarias"}</span>
                        {" para el Éxito en Tecnología y Negocios"}
                    </h1>
                    <p>
                        {format!(
                            "Únete a más de {} estudiantes en el viaje del aprendizaje y desarrollo profesional. \
                             Obtén certificados acreditados con expertos especializados en cada campo.",
                            students
                        )}
                    </p>
                    <div class="hero-actions">
                        <button class="btn-primary" onclick={book_consultation}>
                            {"احجز استشارة مجانية"}
                        </button>
                        <button class="btn-outline light" onclick={explore}>
                            {"استكشف الدورات"}
                        </button>
                    </div>
                    <div class="hero-proof">
                        <span>{"⭐ 4.9/5"}</span>
                        <span>{format!("🎓 +{}", students)}</span>
                        <span>{"🏆 شهادات معتمدة"}</span>
                    </div>
                </div>
                <div class="hero-card">
                    {"🎓"}
                </div>
            </div>
        </section>
    }
}
