use log::{error, info, warn};
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

mod config;
mod dom;
mod errors;
mod reveal;
mod smooth_scroll;
mod components {
    pub mod countdown;
    pub mod nav;
    pub mod newsletter;
    pub mod partners;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::nav::SiteHeader;
use pages::{home::Home, not_found::NotFound};
use smooth_scroll::SmoothScroll;

const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";

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
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                let smooth_scroll = match SmoothScroll::attach() {
                    Ok(handle) => Some(handle),
                    Err(err) => {
                        error!("Smooth scrolling disabled: {}", err);
                        None
                    }
                };
                move || drop(smooth_scroll)
            },
            (),
        );
    }

    // Focus outlines only while the visitor is navigating with Tab.
    use_event_with_window("keydown", |e: KeyboardEvent| {
        if e.key() == "Tab" {
            if let Err(err) = dom::set_body_class(KEYBOARD_NAV_CLASS, true) {
                warn!("Failed to enable keyboard navigation styles: {}", err);
            }
        }
    });
    use_event_with_window("mousedown", |_: MouseEvent| {
        if let Err(err) = dom::set_body_class(KEYBOARD_NAV_CLASS, false) {
            warn!("Failed to disable keyboard navigation styles: {}", err);
        }
    });

    html! {
        <BrowserRouter>
            <SiteHeader />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn print_banner() {
    gloo_console::log!(
        "%c🏎️ THE PADDOCK\n%cWelcome to the racing site demo.\nBuilt with Rust, Yew and WebAssembly.\n\nHappy coding! 🏁",
        "color: #CC0000; font-size: 24px; font-weight: bold;",
        "color: #FFD700; font-size: 12px;"
    );
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Err(err) = errors::install_global_error_handler() {
        error!("Failed to install global error handler: {}", err);
    }
    if let Err(err) = dom::preload_stylesheet(config::FONT_STYLESHEET_URL) {
        warn!("Font preload skipped: {}", err);
    }
    print_banner();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
