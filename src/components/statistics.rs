use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_STEPS};
use crate::store::models::Statistics;
use crate::store::use_store;

/// Value shown by a counter after `step` of `steps` animation frames.
pub fn counter_value(target: u32, step: u32, steps: u32) -> u32 {
    if steps == 0 || step >= steps {
        return target;
    }
    let value = u64::from(target) * u64::from(step) / u64::from(steps);
    u32::try_from(value).unwrap_or(target)
}

pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

struct StatCard {
    target: u32,
    label: &'static str,
    suffix: &'static str,
    icon: &'static str,
    description: &'static str,
    gradient: &'static str,
}

fn cards(stats: &Statistics) -> [StatCard; 4] {
    [
        StatCard {
            target: stats.students,
            label: "طالب وطالبة",
            suffix: "+",
            icon: "👥",
            description: "انضموا لرحلة التعلم معنا",
            gradient: "linear-gradient(135deg, #3b82f6, #9333ea)",
        },
        StatCard {
            target: stats.courses,
            label: "دورة تدريبية",
            suffix: "",
            icon: "📚",
            description: "في مختلف التخصصات",
            gradient: "linear-gradient(135deg, #22c55e, #0d9488)",
        },
        StatCard {
            target: stats.certificates,
            label: "شهادة معتمدة",
            suffix: "",
            icon: "🏆",
            description: "معترف بها عالمياً",
            gradient: "linear-gradient(135deg, #f97316, #dc2626)",
        },
        StatCard {
            target: stats.instructors,
            label: "مدرب خبير",
            suffix: "",
            icon: "🎓",
            description: "بخبرة عملية واسعة",
            gradient: "linear-gradient(135deg, #a855f7, #db2777)",
        },
    ]
}

fn in_viewport(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    element.get_bounding_client_rect().top() < height
}

#[function_component(StatisticsSection)]
pub fn statistics_section() -> Html {
    let store = use_store();
    let node = use_node_ref();
    let (_, scroll_y) = use_window_scroll();
    let started = use_state(|| false);
    let step = use_state(|| 0u32);

    // Counters start the first time the section scrolls into view.
    {
        let started = started.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                if !*started && in_viewport(&node) {
                    log::debug!("Statistics in view, starting counters");
                    started.set(true);
                }
                || ()
            },
            scroll_y.to_bits(),
        );
    }

    let running = *started && *step < COUNTER_STEPS;
    {
        let step = step.clone();
        use_interval(
            move || step.set((*step + 1).min(COUNTER_STEPS)),
            if running { COUNTER_DURATION_MS / COUNTER_STEPS } else { 0 },
        );
    }

    let stat_cards = cards(&store.catalog.statistics);

    html! {
        <section class="lpc-statistics" ref={node}>
            <style>
                {r#"
                .lpc-statistics {
                    padding: 3rem 0;
                }
                .lpc-statistics h2 {
                    text-align: center;
                    font-size: 2.5rem;
                    margin-bottom: 2.5rem;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .stat-card {
                    background: white;
                    border-radius: 1.25rem;
                    padding: 2rem 1.5rem;
                    text-align: center;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
                    transition: transform 0.3s ease;
                }
                .stat-card:hover {
                    transform: translateY(-6px);
                }
                .stat-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                }
                .stat-value {
                    font-size: 2.5rem;
                    font-weight: 700;
                }
                .stat-label {
                    font-weight: 600;
                    margin: 0.25rem 0;
                }
                .stat-description {
                    color: #64748b;
                    font-size: 0.9rem;
                }
                @media (max-width: 900px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
            <h2>{"أرقام نفخر بها"}</h2>
            <div class="stats-grid">
                { for stat_cards.iter().map(|card| {
                    let value = counter_value(card.target, *step, COUNTER_STEPS);
                    html! {
                        <div class="stat-card">
                            <div class="stat-icon" style={format!("background: {};", card.gradient)}>
                                {card.icon}
                            </div>
                            <div class="stat-value">
                                {format!("{}{}", format_thousands(value), card.suffix)}
                            </div>
                            <div class="stat-label">{card.label}</div>
                            <div class="stat-description">{card.description}</div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_ends_exactly_on_target() {
        assert_eq!(counter_value(5847, COUNTER_STEPS, COUNTER_STEPS), 5847);
        assert_eq!(counter_value(5847, COUNTER_STEPS + 4, COUNTER_STEPS), 5847);
    }

    #[test]
    fn counter_is_monotonic_and_bounded() {
        for target in [0, 28, 87, 156, 5847, u32::MAX] {
            let mut previous = 0;
            for step in 0..=COUNTER_STEPS {
                let value = counter_value(target, step, COUNTER_STEPS);
                assert!(value >= previous);
                assert!(value <= target);
                previous = value;
            }
        }
    }

    #[test]
    fn counter_starts_at_zero() {
        assert_eq!(counter_value(156, 0, COUNTER_STEPS), 0);
        assert_eq!(counter_value(156, 30, COUNTER_STEPS), 78);
    }

    #[test]
    fn zero_steps_jumps_to_target() {
        assert_eq!(counter_value(87, 0, 0), 87);
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(987), "987");
        assert_eq!(format_thousands(5847), "5,847");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
