use yew::prelude::*;

use crate::components::{Reveal, RevealVariant, SectionTitle};
use crate::content::{Anchor, TeamMember, TEAM};
use crate::motion::stagger_delay;

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub member: &'static TeamMember,
    pub index: usize,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let member = props.member;

    let avatar = match member.avatar {
        Some(src) => html! { <img src={src} alt={member.name} /> },
        // No fallback image, just the initial.
        None => html! {
            <div class="team-avatar-initial">
                { member.name.chars().next().map(String::from).unwrap_or_default() }
            </div>
        },
    };

    html! {
        <Reveal variant={RevealVariant::Scale} delay={stagger_delay(props.index)} class={classes!("team-card")}>
            <div class="team-avatar">
                <div class="team-avatar-glow"></div>
                { avatar }
            </div>
            <h3>{ member.name }</h3>
            <p class="team-role">{ member.role }</p>
            <p class="team-description">{ member.description }</p>
        </Reveal>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <section id={Anchor::Team.id()} class="team-section">
            <div class="team-decor team-decor-left"></div>
            <div class="team-decor team-decor-right"></div>

            <div class="container team-inner">
                <SectionTitle subtitle="Team">{"管理团队"}</SectionTitle>
                <p class="team-tagline">{"技术水平优越 · 用心打造每一个细节"}</p>
                <div class="card-grid">
                    { for TEAM.iter().enumerate().map(|(index, member)| html! {
                        <TeamCard member={member} index={index} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .team-section {
                        position: relative;
                        padding: 6rem 0;
                        background: #0b0d17;
                        overflow: hidden;
                    }
                    .team-decor {
                        position: absolute;
                        width: 16rem;
                        height: 16rem;
                        border-radius: 9999px;
                        filter: blur(100px);
                        pointer-events: none;
                    }
                    .team-decor-left {
                        top: 0;
                        left: 0;
                        background: rgba(83, 109, 254, 0.05);
                    }
                    .team-decor-right {
                        bottom: 0;
                        right: 0;
                        background: rgba(168, 85, 247, 0.05);
                    }
                    .team-inner {
                        position: relative;
                        z-index: 1;
                    }
                    .team-tagline {
                        text-align: center;
                        color: #9ca3af;
                        margin: -2rem 0 3rem;
                    }
                    .team-card {
                        background: rgba(20, 23, 40, 0.5);
                        backdrop-filter: blur(4px);
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        text-align: center;
                        transition: background 0.2s;
                    }
                    .team-card:hover {
                        background: #141728;
                    }
                    .team-avatar {
                        position: relative;
                        width: 6rem;
                        height: 6rem;
                        margin: 0 auto 1.5rem;
                    }
                    .team-avatar-glow {
                        position: absolute;
                        inset: 0;
                        background: #536dfe;
                        border-radius: 9999px;
                        filter: blur(8px);
                        opacity: 0;
                        transition: opacity 0.5s;
                    }
                    .team-card:hover .team-avatar-glow {
                        opacity: 0.4;
                    }
                    .team-avatar img, .team-avatar-initial {
                        position: relative;
                        z-index: 1;
                        width: 100%;
                        height: 100%;
                        border-radius: 9999px;
                        object-fit: cover;
                        border: 2px solid #1e2238;
                        box-sizing: border-box;
                    }
                    .team-avatar-initial {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        color: #fff;
                        background: #1e2238;
                    }
                    .team-card h3 {
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 0.25rem;
                    }
                    .team-role {
                        color: #7c8cff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 1rem;
                    }
                    .team-description {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        line-height: 1.6;
                    }
                "#}
            </style>
        </section>
    }
}
