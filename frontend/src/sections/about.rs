use yew::prelude::*;

use crate::components::{Reveal, RevealVariant};
use crate::config::site_config;
use crate::content::Anchor;
use crate::icons::{Icon, IconView};

#[function_component(About)]
pub fn about() -> Html {
    let config = site_config();

    html! {
        <section id={Anchor::About.id()} class="about-section">
            <div class="container about-grid">
                <Reveal variant={RevealVariant::SlideLeft} root_margin="-100px">
                    <h2>{ format!("关于 {}", config.brand) }</h2>
                    <p>
                        {"StarShine 服务器创立于 2024 年底，是一个致力于提供高质量游戏体验的宝藏小服。"}
                        {"我们不仅仅是一个游戏服务器，更是一个充满活力的社区。"}
                    </p>
                    <p>
                        {"我们采用"}<span class="highlight">{"实体公网服务器"}</span>{"托管，拥有优越的硬件配置和专业的管理团队。"}
                        {"无论你是建筑大神、红石专家，还是喜欢冒险的生存玩家，这里都有属于你的一片天地。"}
                    </p>
                    <div class="about-stats">
                        <div class="about-stat">
                            <IconView icon={Icon::Server} class={classes!("about-stat-icon")} />
                            <span>{"24/7 在线"}</span>
                        </div>
                        <div class="about-stat">
                            <IconView icon={Icon::Users} class={classes!("about-stat-icon")} />
                            <span>{"和谐社区"}</span>
                        </div>
                    </div>
                </Reveal>

                <Reveal variant={RevealVariant::SlideRight} root_margin="-100px" class={classes!("about-media")}>
                    <div class="about-glow"></div>
                    <img src={config.about_image} alt="About Server" />
                </Reveal>
            </div>

            <style>
                {r#"
                    .about-section {
                        position: relative;
                        padding: 6rem 0;
                        background: #0b0d17;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-section h2 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 1.5rem;
                    }
                    .about-section p {
                        color: #9ca3af;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .about-section .highlight {
                        color: #7c8cff;
                        font-weight: 600;
                    }
                    .about-stats {
                        display: flex;
                        gap: 1rem;
                        font-family: monospace;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .about-stat {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .about-stat-icon {
                        width: 1rem;
                        height: 1rem;
                        color: #7c8cff;
                    }
                    .about-media {
                        position: relative;
                    }
                    .about-glow {
                        position: absolute;
                        inset: 0;
                        background: rgba(83, 109, 254, 0.1);
                        filter: blur(64px);
                        border-radius: 9999px;
                    }
                    .about-media img {
                        position: relative;
                        width: 100%;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        transition: transform 0.5s;
                    }
                    .about-media img:hover {
                        transform: scale(1.02);
                    }
                    @media (max-width: 768px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
