use yew::prelude::*;

use crate::components::{Reveal, RevealVariant, SectionTitle};
use crate::content::{Anchor, Feature, FEATURES};
use crate::icons::IconView;
use crate::motion::stagger_delay;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: &'static Feature,
    pub index: usize,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = props.feature;

    html! {
        <Reveal variant={RevealVariant::FadeUp} delay={stagger_delay(props.index)} class={classes!("feature-card")}>
            <div class={feature.status.icon_class()}>
                <IconView icon={feature.icon} />
            </div>
            <h3>{ feature.title }</h3>
            <p>{ feature.description }</p>
            <span class={feature.status.badge_class()}>{ feature.status.badge_label() }</span>
        </Reveal>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id={Anchor::Features.id()} class="features-section">
            <div class="container">
                <SectionTitle subtitle="Features">{"玩法与特色"}</SectionTitle>
                <div class="card-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard feature={feature} index={index} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .features-section {
                        padding: 6rem 0;
                        background: rgba(20, 23, 40, 0.5);
                    }
                    .feature-card {
                        background: #0b0d17;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        transition: border-color 0.2s;
                    }
                    .feature-card:hover {
                        border-color: rgba(83, 109, 254, 0.5);
                    }
                    .feature-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 0.5rem;
                    }
                    .feature-card p {
                        font-size: 0.875rem;
                        line-height: 1.6;
                        color: #9ca3af;
                        margin-bottom: 1rem;
                    }
                    .feature-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                        transition: background 0.2s, color 0.2s;
                    }
                    .feature-icon .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .feature-icon-active {
                        background: rgba(83, 109, 254, 0.2);
                        color: #7c8cff;
                    }
                    .feature-card:hover .feature-icon-active {
                        background: #536dfe;
                        color: #fff;
                    }
                    .feature-icon-planned {
                        background: rgba(31, 41, 55, 0.5);
                        color: #6b7280;
                    }
                    .status-badge {
                        display: inline-block;
                        padding: 0.25rem 0.5rem;
                        font-size: 0.75rem;
                        font-family: monospace;
                        border-radius: 0.25rem;
                    }
                    .status-active {
                        background: rgba(34, 197, 94, 0.1);
                        color: #22c55e;
                        border: 1px solid rgba(34, 197, 94, 0.2);
                    }
                    .status-planned {
                        background: rgba(234, 179, 8, 0.1);
                        color: #eab308;
                        border: 1px solid rgba(234, 179, 8, 0.2);
                    }
                "#}
            </style>
        </section>
    }
}
