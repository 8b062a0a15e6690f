use log::debug;
use yew::prelude::*;

use crate::components::{Hero, Nav};
use crate::hooks::use_scroll_y;
use crate::motion::{is_scrolled, MenuAction, MenuState};
use crate::sections::{About, Features, Footer, Team};

/// Page shell. Owns the single scroll subscription and the mobile menu
/// state; every child gets read-only values and callbacks.
#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll_y = use_scroll_y();
    let menu = use_reducer_eq(MenuState::default);

    let on_toggle = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| {
            debug!("mobile menu toggled");
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // Anchor clicks keep their default so the browser scrolls to the section.
    let on_navigate = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    html! {
        <div class="landing-page">
            <Nav
                scrolled={is_scrolled(scroll_y)}
                menu_open={menu.is_open()}
                on_toggle={on_toggle}
                on_navigate={on_navigate}
            />
            <Hero scroll_y={scroll_y} />
            <About />
            <Features />
            <Team />
            <Footer />

            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        background: #0b0d17;
                        color: #e5e7eb;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "PingFang SC", "Microsoft YaHei", sans-serif;
                    }
                    ::selection {
                        background: rgba(83, 109, 254, 0.3);
                        color: #fff;
                    }
                    .landing-page h1, .landing-page h2, .landing-page h3, .landing-page h4, .landing-page p {
                        margin-top: 0;
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                        flex-shrink: 0;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(4, minmax(0, 1fr));
                        gap: 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .card-grid {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                    }
                    @media (max-width: 768px) {
                        .card-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .section-title {
                        margin-bottom: 3rem;
                        text-align: center;
                        overflow: hidden;
                    }
                    .section-title h2 {
                        font-size: clamp(1.875rem, 4vw, 2.25rem);
                        font-weight: 700;
                        color: #fff;
                        letter-spacing: 0.05em;
                        margin-bottom: 1rem;
                    }
                    .section-title-bar {
                        height: 0.25rem;
                        width: 5rem;
                        margin: 0 auto;
                        border-radius: 9999px;
                        background: #536dfe;
                    }

                    .reveal {
                        opacity: 0;
                        transition-property: opacity, transform;
                        transition-duration: 0.6s;
                        transition-timing-function: ease-out;
                    }
                    .reveal-up { transform: translateY(30px); }
                    .reveal-left { transform: translateX(-50px); }
                    .reveal-right { transform: translateX(50px); }
                    .reveal-scale { transform: scale(0.9); }
                    .reveal.is-visible {
                        opacity: 1;
                        transform: none;
                    }

                    .copy-button {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        background: rgba(30, 34, 56, 0.5);
                        border: 1px solid rgba(83, 109, 254, 0.3);
                        border-radius: 0.5rem;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .copy-button:hover {
                        background: #1e2238;
                    }
                    .copy-button:active {
                        transform: scale(0.95);
                    }
                    .copy-button-text {
                        font-family: monospace;
                        font-size: 0.875rem;
                        color: #d1d5db;
                    }
                    .copy-icon {
                        width: 1rem;
                        height: 1rem;
                        color: #7c8cff;
                    }
                    .copy-button:hover .copy-icon {
                        color: #fff;
                    }
                    .copy-icon.copy-icon-done {
                        color: #4ade80;
                    }
                "#}
            </style>
        </div>
    }
}
