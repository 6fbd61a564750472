use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod forms;
mod store;
mod components {
    pub mod fields;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod modals;
    pub mod services;
    pub mod sidebar;
    pub mod statistics;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use config::Latency;
use pages::{landing::Landing, not_found::NotFound};
use store::api::InFlight;
use store::catalog::Catalog;
use store::state::AppState;
use store::AppStore;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: Rc<Catalog>,
    #[prop_or_default]
    pub latency: Latency,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let state = {
        let catalog = props.catalog.clone();
        use_reducer(move || AppState::new(catalog))
    };
    let booking = use_state(InFlight::default);
    let store = AppStore::new(state, props.latency, (*booking).clone());

    html! {
        <ContextProvider<AppStore> context={store}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AppStore>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    match Catalog::seed() {
        Ok(catalog) => {
            info!("Starting application");
            yew::Renderer::<App>::with_props(AppProps {
                catalog: Rc::new(catalog),
                latency: Latency::default(),
            })
            .render();
        }
        Err(e) => gloo_console::error!(format!("Could not load catalog: {}", e)),
    }
}
