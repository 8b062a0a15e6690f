use yew::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::config::site_config;
use crate::motion::{hero_opacity, parallax_offset};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Window scroll offset, owned by the page shell.
    pub scroll_y: f64,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let config = site_config();
    let scroll_y = props.scroll_y;

    let background_style = format!("transform: translate3d(0, {:.2}px, 0);", parallax_offset(scroll_y));
    let content_style = format!("opacity: {:.3};", hero_opacity(scroll_y));

    html! {
        <header class="hero">
            <div class="hero-background" style={background_style}>
                <div class="hero-overlay"></div>
                <img src={config.hero_background} alt="Server Background" />
            </div>

            <div class="hero-content" style={content_style}>
                <h1 class="hero-title stage stage-scale">
                    {"星光 "}<span class="gradient-text">{ config.brand }</span>
                </h1>
                <p class="hero-subtitle stage stage-left" style="animation-delay: 0.3s;">
                    {"2024年底创立 · 宝藏小服 · 技术驱动"}<br />
                    {"在这里，创造你的世界，谱写新的传奇。"}
                </p>
                <div class="hero-cta-group stage stage-right" style="animation-delay: 0.5s;">
                    <CopyButton text={config.server_address} label="IP" />
                    <CopyButton text={config.group_id} label="Q群" />
                </div>
                <div class="scroll-indicator stage stage-up" style="animation-delay: 1s;">
                    <div class="scroll-indicator-dot"></div>
                </div>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        will-change: transform;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        z-index: 1;
                        background: linear-gradient(to bottom, rgba(11, 13, 23, 0.4), rgba(11, 13, 23, 0.6), #0b0d17);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 2;
                        max-width: 1200px;
                        padding: 0 1.5rem;
                        text-align: center;
                        will-change: opacity;
                    }
                    .hero-title {
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 800;
                        color: #fff;
                        margin-bottom: 1.5rem;
                    }
                    .gradient-text {
                        background: linear-gradient(to right, #7c8cff, #c084fc);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-subtitle {
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        font-size: 1.2rem;
                        font-weight: 300;
                        line-height: 1.7;
                        color: #d1d5db;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: -6rem;
                        left: 50%;
                        margin-left: -0.75rem;
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.2);
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        padding: 0.5rem;
                        box-sizing: border-box;
                    }
                    .scroll-indicator-dot {
                        width: 0.25rem;
                        height: 0.5rem;
                        background: #fff;
                        border-radius: 9999px;
                        animation: bounce 1s infinite;
                    }
                    .stage {
                        opacity: 0;
                        animation-duration: 0.8s;
                        animation-timing-function: ease-out;
                        animation-fill-mode: forwards;
                    }
                    .stage-scale { animation-name: stageScale; }
                    .stage-left { animation-name: stageLeft; }
                    .stage-right { animation-name: stageRight; }
                    .stage-up { animation-name: stageUp; animation-duration: 1s; }
                    @keyframes stageScale {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes stageLeft {
                        from { opacity: 0; transform: translateX(-50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes stageRight {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes stageUp {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .hero-cta-group {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
