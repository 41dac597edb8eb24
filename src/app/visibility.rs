use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::visibility::{Motion, Observation, Presence, TrackerOptions, VisibilityTracker};

/// Tracks whether the returned element is on screen.
///
/// Attach the `NodeRef` to the element to observe and read the signal to pick
/// between hidden and visible styles. The observer is disconnected when the
/// owning component unmounts, or as soon as a `trigger_once` tracker fires.
/// Without `IntersectionObserver` support the signal simply stays `false`.
pub fn use_visibility(options: TrackerOptions) -> (NodeRef<html::Div>, Signal<bool>) {
    let target = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    let observer_options = UseIntersectionObserverOptions::default()
        .root_margin(options.root_margin.clone())
        .thresholds(vec![options.threshold]);
    let tracker = StoredValue::new(VisibilityTracker::new(options));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            let Some(entry) = entries.last() else {
                return;
            };
            let obs = Observation {
                ratio: entry.intersection_ratio(),
                intersecting: entry.is_intersecting(),
            };
            let Some(reaction) = tracker.try_update_value(|t| t.observe(obs)) else {
                return;
            };
            if reaction.changed {
                set_visible.set(reaction.visible);
            }
            if reaction.release {
                observer.disconnect();
            }
        },
        observer_options,
    );

    on_cleanup(move || {
        // the tracker may already be disposed; stop regardless
        if tracker.try_update_value(|t| t.release_with(&stop)).is_none() {
            stop();
        }
    });

    (target, visible.into())
}

/// Wraps children in an element that animates in when scrolled into view.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: Motion,
    /// Latch visible after the first appearance instead of replaying.
    #[prop(optional)]
    once: bool,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let options = if once {
        TrackerOptions::default().trigger_once()
    } else {
        TrackerOptions::default()
    };
    let (node_ref, visible) = use_visibility(options);
    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"));

    view! {
        <div
            node_ref=node_ref
            class=move || format!("{} {class}", motion.class(Presence::from(visible.get())))
            style=style
        >
            {children()}
        </div>
    }
}
