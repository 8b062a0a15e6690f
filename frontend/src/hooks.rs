use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::RevealLatch;

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}

/// Window scroll offset, re-read on every `scroll` event.
/// The listener lives exactly as long as the calling component.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(current_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let callback = Closure::wrap(Box::new(move || {
                        scroll_y.set(current_scroll_y());
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("could not attach scroll listener");
                    }
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        if window
                            .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("could not detach scroll listener");
                        }
                    }
                }
            },
            (),
        );
    }

    *scroll_y
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    root_margin: &str,
    latch: Rc<RefCell<RevealLatch>>,
    on_reveal: Callback<()>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false)
        });

        if latch.borrow_mut().observe(visible) {
            debug!("element revealed");
            observer.disconnect();
            on_reveal.emit(());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(_) => {
            warn!("IntersectionObserver unavailable, revealing immediately");
            None
        }
    }
}

/// Fire-once viewport trigger: flips to true the first time the node
/// intersects the viewport and stays true for the component's lifetime.
#[hook]
pub fn use_reveal(node: NodeRef, root_margin: &'static str) -> bool {
    let latch = use_mut_ref(RevealLatch::default);
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                if !latch.borrow().is_revealed() {
                    if let Some(element) = node.cast::<Element>() {
                        let on_reveal = {
                            let revealed = revealed.clone();
                            Callback::from(move |_| revealed.set(true))
                        };
                        observer = observe_once(&element, root_margin, latch.clone(), on_reveal);
                        if observer.is_none() {
                            latch.borrow_mut().observe(true);
                            revealed.set(true);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}
