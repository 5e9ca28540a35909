use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use super::icons::{Icon, SvgIcon};
use crate::config::NAV_SOLID_AFTER;
use crate::motion::use_scroll_signal;

/// Desktop links as (label, element id). The page has no separate about
/// section, so "About" lands on the team.
pub const DESKTOP_LINKS: [(&str, &str); 5] = [
    ("Services", "services"),
    ("Work", "work"),
    ("Pricing", "pricing"),
    ("Team", "team"),
    ("About", "team"),
];

pub const MOBILE_LINKS: [(&str, &str); 5] = [
    ("Services", "services"),
    ("Work", "work"),
    ("Pricing", "pricing"),
    ("Team", "team"),
    ("Contact", "contact"),
];

/// Smoothly scrolls the element with `id` into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("no section with id {}", id),
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll = use_scroll_signal();
    let solid = scroll.y > NAV_SOLID_AFTER;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    html! {
        <nav class={classes!("top-nav", solid.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        padding: 1.5rem 0;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(5, 5, 5, 0.8);
                        border-bottom-color: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(12px);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        cursor: pointer;
                    }
                    .nav-logo .mark {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 2px;
                        background: #ff3366;
                        font-size: 0.875rem;
                        transform: rotate(3deg);
                    }
                    .nav-logo .accent { color: #ff3366; }
                    .nav-links { display: none; align-items: center; gap: 2rem; }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #9ca3af;
                        font-size: 0.875rem;
                        font-weight: 500;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .nav-link:hover { color: #ff3366; }
                    .nav-cta {
                        display: none;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1.5rem;
                        border: 1px solid rgba(255, 51, 102, 0.3);
                        border-radius: 2px;
                        background: rgba(255, 51, 102, 0.1);
                        color: #ff3366;
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .nav-cta:hover { background: #ff3366; color: #fff; }
                    .burger-menu {
                        display: block;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .burger-menu { position: relative; z-index: 50; }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 30;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        background: #050000;
                        animation: menu-slide 0.3s ease-out;
                    }
                    .mobile-menu .nav-link { font-size: 1.875rem; font-weight: 700; letter-spacing: 0.1em; }
                    @keyframes menu-slide {
                        from { opacity: 0; transform: translateX(100%); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @media (min-width: 768px) {
                        .nav-links, .nav-cta { display: flex; }
                        .burger-menu, .mobile-menu { display: none; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <button class="nav-logo" onclick={Callback::from(|_: MouseEvent| {
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                })}>
                    <span class="mark">{"M"}</span>
                    <span>{"MJ"}<span class="accent">{"FORYOU"}</span></span>
                </button>

                <div class="nav-links">
                    { for DESKTOP_LINKS.iter().map(|(label, id)| html! {
                        <button class="nav-link" onclick={go_to(*id)}>{ *label }</button>
                    }) }
                </div>

                <button class="nav-cta" onclick={go_to("contact")}>
                    {"Get Quote"}
                    <SvgIcon icon={Icon::ArrowRight} size={14} />
                </button>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    if *menu_open {
                        <SvgIcon icon={Icon::Close} />
                    } else {
                        <SvgIcon icon={Icon::Menu} />
                    }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { for MOBILE_LINKS.iter().map(|(label, id)| html! {
                        <button class="nav-link" onclick={go_to(*id)}>{ *label }</button>
                    }) }
                </div>
            }
        </nav>
    }
}
