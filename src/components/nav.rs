use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::{use_event_with_window, use_window_scroll};

use crate::config;
use crate::dom;
use crate::errors::SiteError;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#story", "Our Story"),
    ("#team", "Team"),
    ("#race", "Next Race"),
    ("#shop", "Shop"),
    ("#newsletter", "The Paddock"),
];

/// Open/closed state of the mobile menu. The DOM classes and the body
/// scroll lock are derived from it, never read back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn hamburger_class(self) -> Classes {
        classes!("hamburger", self.open.then(|| "active"))
    }

    pub fn menu_class(self) -> Classes {
        classes!("nav-menu", self.open.then(|| "active"))
    }

    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => self.toggled(),
            MenuAction::Close => self.closed(),
        };
        Rc::new(next)
    }
}

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD
}

fn apply_scroll_lock(state: MenuState) -> Result<(), SiteError> {
    dom::body()?
        .style()
        .set_property("overflow", state.body_overflow())?;
    Ok(())
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu = use_reducer_eq(MenuState::default);
    let (_, scroll_y) = use_window_scroll();

    {
        use_effect_with_deps(
            move |state: &MenuState| {
                debug!("Menu open: {}", state.is_open());
                if let Err(err) = apply_scroll_lock(*state) {
                    error!("Failed to update body scroll lock: {}", err);
                }
                || ()
            },
            *menu,
        );
    }

    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu.dispatch(MenuAction::Close);
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(MenuAction::Close);
        })
    };

    // Clicks on the overlay itself close the menu; clicks on items bubble
    // up here too and must be ignored.
    let on_overlay_click = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            let on_overlay = e
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|el| el.id() == "nav-menu")
                .unwrap_or(false);
            if on_overlay {
                menu.dispatch(MenuAction::Close);
            }
        })
    };

    html! {
        <header id="header" class={classes!("header", header_is_scrolled(scroll_y).then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#hero" class="nav-logo">
                    <span class="nav-logo-mark">{"THE PADDOCK"}</span>
                </a>

                <nav id="nav-menu" class={menu.menu_class()} onclick={on_overlay_click}>
                    <ul class="nav-list">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li class="nav-item">
                                <a href={*href} class="nav-link" onclick={close_menu.clone()}>
                                    {*label}
                                </a>
                            </li>
                        }) }
                    </ul>
                </nav>

                <button
                    id="hamburger"
                    class={menu.hamburger_class()}
                    aria-label="Toggle navigation"
                    aria-expanded={menu.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        let state = MenuState::default();
        assert!(!state.is_open());
        assert_eq!(state.body_overflow(), "");
        assert_eq!(state.menu_class(), classes!("nav-menu"));
    }

    #[test]
    fn test_toggle_projects_active_classes() {
        let open = MenuState::default().toggled();
        assert!(open.is_open());
        assert_eq!(open.hamburger_class(), classes!("hamburger", "active"));
        assert_eq!(open.menu_class(), classes!("nav-menu", "active"));
        assert_eq!(open.body_overflow(), "hidden");

        let closed = open.toggled();
        assert!(!closed.is_open());
        assert_eq!(closed.hamburger_class(), classes!("hamburger"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let open = MenuState::default().toggled();
        assert_eq!(open.closed(), MenuState::default());
        assert_eq!(open.closed().closed(), MenuState::default());
    }

    #[test]
    fn test_reducer_actions() {
        let state = Rc::new(MenuState::default());
        let opened = state.reduce(MenuAction::Toggle);
        assert!(opened.is_open());
        let closed = opened.reduce(MenuAction::Close);
        assert!(!closed.is_open());
        let still_closed = closed.reduce(MenuAction::Close);
        assert_eq!(*still_closed, MenuState::default());
    }

    #[test]
    fn test_header_threshold() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(100.0));
        assert!(header_is_scrolled(100.5));
        assert!(header_is_scrolled(2400.0));
    }
}
