use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use stylist::yew::Global;

mod motion {
    pub mod ease;
    pub mod flip;
    pub mod marquee;
    pub mod reveal;
    pub mod stage;
    pub mod timeline;
}
mod pages {
    pub mod about;
    pub mod content;
}

use pages::about::{About, Variant};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/preview")]
    Preview,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering primary page");
            html! { <About variant={Variant::Primary} /> }
        }
        Route::Preview => {
            info!("Rendering preview page");
            html! { <About variant={Variant::Preview} /> }
        }
    }
}

fn scroll_to_anchor(selector: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let document = web_sys::window().unwrap().document().unwrap();
        let target = document
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("missing anchor target: {selector}"));
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 480);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let anchor = |label: &'static str, selector: &'static str| {
        let close = close_menu.clone();
        let scroll = scroll_to_anchor(selector);
        let onclick = Callback::from(move |e: MouseEvent| {
            close.emit(e.clone());
            scroll.emit(e);
        });
        html! {
            <a href={selector} class="nav-link" {onclick}>{ label }</a>
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"AstraNet"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { anchor("How It Works", "#workflow") }
                    { anchor("Team", "#team") }
                    { anchor("Stack", "#stack") }
                    { anchor("Live Dashboard", "#cta") }
                </div>
            </div>
        </nav>
    }
}

const GLOBAL_CSS: &str = r#"
    html, body {
        margin: 0;
        padding: 0;
        background: #000;
        color: #fff;
        font-family: system-ui, sans-serif;
        -webkit-font-smoothing: antialiased;
    }

    button {
        font-family: inherit;
    }

    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        padding: 1rem 1.5rem;
        background: transparent;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }

    .top-nav.scrolled {
        background: rgba(0, 0, 0, 0.85);
        backdrop-filter: blur(8px);
        box-shadow: 0 1px 0 rgba(255, 255, 255, 0.08);
    }

    .nav-content {
        max-width: 72rem;
        margin: 0 auto;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .nav-logo {
        color: #fff;
        font-size: 1.25rem;
        font-weight: 700;
        text-decoration: none;
        letter-spacing: 0.05em;
    }

    .nav-right {
        display: flex;
        align-items: center;
        gap: 2rem;
    }

    .nav-link {
        color: rgba(255, 255, 255, 0.7);
        text-decoration: none;
        font-size: 0.95rem;
        transition: color 0.3s ease;
    }

    .nav-link:hover {
        color: #fff;
    }

    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 4px;
    }

    .burger-menu span {
        width: 22px;
        height: 2px;
        background: #fff;
    }

    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }

        .nav-right {
            display: none;
        }

        .nav-right.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            padding: 1.5rem;
            gap: 1.25rem;
            background: rgba(0, 0, 0, 0.95);
        }
    }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={GLOBAL_CSS} />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
