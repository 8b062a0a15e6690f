use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::Reflect;
use yew::prelude::*;

use crate::icons::{Icon, IconView};
use crate::motion::{CopyFeedback, COPY_RESET_MS};

/// Best-effort clipboard write. A rejected promise is logged and
/// otherwise ignored; the button confirms regardless.
fn write_clipboard(text: String) {
    if let Some(window) = web_sys::window() {
        let navigator = window.navigator();
        // Insecure origins expose no clipboard at all.
        let has_clipboard = Reflect::get(&navigator, &"clipboard".into())
            .map(|value| !value.is_undefined())
            .unwrap_or(false);
        if !has_clipboard {
            warn!("clipboard API unavailable, skipping write");
            return;
        }

        let promise = navigator.clipboard().write_text(&text);
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                warn!("clipboard write rejected: {:?}", err);
            }
        });
    } else {
        warn!("no window, skipping clipboard write");
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    pub label: AttrValue,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let feedback = use_mut_ref(CopyFeedback::default);
    let pending_reset = use_mut_ref(|| None::<Timeout>);
    let copied = use_state_eq(|| false);

    let onclick = {
        let text = props.text.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            write_clipboard(text.to_string());

            let ticket = feedback.borrow_mut().activate();
            copied.set(true);
            debug!("copied {text}, confirmation ticket {ticket}");

            let reset = {
                let feedback = feedback.clone();
                let copied = copied.clone();
                Timeout::new(COPY_RESET_MS, move || {
                    if feedback.borrow_mut().expire(ticket) {
                        copied.set(false);
                    }
                })
            };
            // Dropping the previous handle cancels its reset.
            *pending_reset.borrow_mut() = Some(reset);
        })
    };

    html! {
        <button type="button" class="copy-button" onclick={onclick}>
            <span class="copy-button-text">{ format!("{}: {}", props.label, props.text) }</span>
            {
                if *copied {
                    html! { <IconView icon={Icon::Check} class={classes!("copy-icon", "copy-icon-done")} /> }
                } else {
                    html! { <IconView icon={Icon::Copy} class={classes!("copy-icon")} /> }
                }
            }
        </button>
    }
}
