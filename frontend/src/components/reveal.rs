use yew::prelude::*;

use crate::hooks::use_reveal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealVariant {
    #[default]
    FadeUp,
    SlideLeft,
    SlideRight,
    Scale,
}

impl RevealVariant {
    fn class(self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "reveal-up",
            RevealVariant::SlideLeft => "reveal-left",
            RevealVariant::SlideRight => "reveal-right",
            RevealVariant::Scale => "reveal-scale",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub variant: RevealVariant,
    /// Seconds before the transition starts once triggered.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or("0px")]
    pub root_margin: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays its entrance transition the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.root_margin);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.variant.class(), revealed.then_some("is-visible"), props.class.clone())}
            style={format!("transition-delay: {:.1}s;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
