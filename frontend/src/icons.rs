use yew::prelude::*;

/// Stroke icons drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sparkles,
    Menu,
    Close,
    Copy,
    Check,
    Hammer,
    Map,
    Sword,
    Cpu,
    Server,
    Users,
    Video,
    Youtube,
    Github,
    Message,
}

impl Icon {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Sparkles => &[
                "M12 3l1.9 5.8L20 10l-6.1 1.9L12 18l-1.9-6.1L4 10l6.1-1.2z",
                "M5 3v4",
                "M3 5h4",
                "M19 17v4",
                "M17 19h4",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6L6 18", "M6 6l12 12"],
            Icon::Copy => &[
                "M8 8h12v12H8z",
                "M4 16V6a2 2 0 0 1 2-2h10",
            ],
            Icon::Check => &["M18 6L7 17l-5-5", "M22 10l-7.5 7.5L13 16"],
            Icon::Hammer => &[
                "M15 12l-8.5 8.5a2.1 2.1 0 0 1-3-3L12 9",
                "M17.6 15L22 10.6",
                "M20.9 11.7l-1.3-1.3a2 2 0 0 1-.6-1.4V7.9l-2.4-2.4A6 6 0 0 0 12.4 4H9l.9.8A6.2 6.2 0 0 1 12 9.4v1.7l2 2h1.2a2 2 0 0 1 1.4.6l1.1 1.1",
            ],
            Icon::Map => &[
                "M3 6l6-3 6 3 6-3v15l-6 3-6-3-6 3z",
                "M9 3v15",
                "M15 6v15",
            ],
            Icon::Sword => &[
                "M14.5 17.5L3 6V3h3l11.5 11.5",
                "M13 19l6-6",
                "M16 16l4 4",
                "M19 21l2-2",
            ],
            Icon::Cpu => &[
                "M4 4h16v16H4z",
                "M9 9h6v6H9z",
                "M9 1v3", "M15 1v3", "M9 20v3", "M15 20v3",
                "M20 9h3", "M20 14h3", "M1 9h3", "M1 14h3",
            ],
            Icon::Server => &[
                "M2 2h20v8H2z",
                "M2 14h20v8H2z",
                "M6 6h.01",
                "M6 18h.01",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
                "M22 21v-2a4 4 0 0 0-3-3.9",
                "M16 3.1a4 4 0 0 1 0 7.8",
            ],
            Icon::Video => &[
                "M16 13l5.2 3.5a.5.5 0 0 0 .8-.4V7.9a.5.5 0 0 0-.8-.4L16 11",
                "M2 6h14v12H2z",
            ],
            Icon::Youtube => &[
                "M2.5 17a24.1 24.1 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.6 49.6 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.1 24.1 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.6 49.6 0 0 1-16.2 0A2 2 0 0 1 2.5 17",
                "M10 15l5-3-5-3z",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.1-1.3-.3-2.5-1-3.5.3-1.2.3-2.4 0-3.5 0 0-1 0-3 1.5-2.6-.5-5.4-.5-8 0C6 2 5 2 5 2c-.3 1.1-.3 2.3 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.4.5-.7 1.1-.8 1.7-.2.6-.3 1.2-.2 1.8v4",
                "M9 18c-4.5 2-5-2-7-2",
            ],
            Icon::Message => &["M7.9 20A9 9 0 1 0 4 16.1L2 22z"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
