use yew::prelude::*;

use crate::config::site_config;
use crate::content::Anchor;
use crate::icons::{Icon, IconView};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_navigate: Callback<MouseEvent>,
}

/// Fixed top bar plus the mobile overlay. Pure function of its props.
#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scrolled, menu_open, on_toggle, on_navigate } = props;
    let brand = site_config().brand;

    let desktop_links = Anchor::ALL.iter().map(|anchor| {
        let class = if *anchor == Anchor::Contact { "nav-cta" } else { "nav-link" };
        html! {
            <a href={anchor.href()} class={class} onclick={on_navigate.clone()}>
                { anchor.nav_label() }
            </a>
        }
    });

    let mobile_links = Anchor::ALL.iter().map(|anchor| {
        let class = classes!("mobile-link", (*anchor == Anchor::Contact).then_some("mobile-link-accent"));
        html! {
            <a href={anchor.href()} class={class} onclick={on_navigate.clone()}>
                { anchor.mobile_label() }
            </a>
        }
    });

    html! {
        <>
            <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
                <div class="nav-content">
                    <a href="#" class="nav-logo" onclick={on_navigate.clone()}>
                        <IconView icon={Icon::Sparkles} class={classes!("nav-logo-icon")} />
                        <span>{ brand }<span class="accent">{"."}</span></span>
                    </a>

                    <div class="nav-links">
                        { for desktop_links }
                    </div>

                    <button
                        type="button"
                        class="burger-menu"
                        aria-label="menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={on_toggle.clone()}
                    >
                        <IconView icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>
            </nav>

            <div
                class={classes!("mobile-menu", menu_open.then_some("open"))}
                aria-hidden={(!*menu_open).to_string()}
            >
                { for mobile_links }
            </div>

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(11, 13, 23, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom-color: rgba(255, 255, 255, 0.05);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-logo-icon, .nav-logo .accent {
                        color: #7c8cff;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        color: #d1d5db;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-cta {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        background: #536dfe;
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        box-shadow: 0 0 15px rgba(83, 109, 254, 0.3);
                        transition: background 0.2s;
                    }
                    .nav-cta:hover {
                        background: #7c8cff;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        padding: 6rem 1.5rem 0;
                        display: none;
                        flex-direction: column;
                        gap: 1.5rem;
                        background: rgba(11, 13, 23, 0.95);
                        backdrop-filter: blur(24px);
                        opacity: 0;
                        transform: translateY(-20px);
                        pointer-events: none;
                        transition: opacity 0.25s ease, transform 0.25s ease;
                    }
                    .mobile-menu.open {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }
                    .mobile-link {
                        font-size: 1.25rem;
                        font-weight: 500;
                        color: #fff;
                        text-decoration: none;
                    }
                    .mobile-link-accent {
                        color: #7c8cff;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </>
    }
}
