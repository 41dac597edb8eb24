use leptos::{ev, prelude::*};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::nav::{anchor_id, scroll_target};

const HASH_LINKS: &str = "a[href^='#'], a[href^='/#']";

/// Turns clicks on in-page `#section` links into a smooth scroll that leaves
/// the target just below the fixed header, and records the hash in history.
pub fn use_anchor_scroll(header_height: f64) {
    Effect::new(move |_| {
        let handle = window_event_listener(ev::click, move |ev: MouseEvent| {
            scroll_to_anchor(&ev, header_height);
        });
        on_cleanup(move || handle.remove());
    });
}

fn scroll_to_anchor(ev: &MouseEvent, header_height: f64) {
    let Some(anchor) = ev
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(HASH_LINKS).ok().flatten())
    else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let Some(id) = anchor_id(&href) else {
        return;
    };
    // missing targets fall through to the browser's default jump
    let Some(target) = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("no element for anchor #{id}");
        return;
    };

    ev.prevent_default();
    let opts = ScrollToOptions::new();
    opts.set_top(scroll_target(f64::from(target.offset_top()), header_height));
    opts.set_behavior(ScrollBehavior::Smooth);

    let window = window();
    window.scroll_to_with_scroll_to_options(&opts);
    if let Ok(history) = window.history() {
        _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")));
    }
}
