use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealVariant};

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <Reveal variant={RevealVariant::FadeUp}>
                <h2>{ for props.children.iter() }</h2>
            </Reveal>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <Reveal variant={RevealVariant::FadeUp} delay={0.2}>
                            <div class="section-title-bar" title={subtitle.clone()}></div>
                        </Reveal>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
