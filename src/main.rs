use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod observers;
mod styles;
mod view_state;
mod components {
    pub mod contact;
    pub mod floating_cta;
    pub mod footer;
    pub mod hero;
    pub mod manifesto;
    pub mod navbar;
    pub mod services;
    pub mod showroom;
}
mod pages {
    pub mod landing;
}

use observers::ScrollHub;
use pages::landing::Landing;
use styles::GlobalStyles;

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
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    // One window listener for the whole page; dropped with the app.
    let scroll_hub = use_memo(|_| ScrollHub::attach(), ());

    html! {
        <ContextProvider<ScrollHub> context={(*scroll_hub).clone()}>
            <GlobalStyles />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ScrollHub>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
