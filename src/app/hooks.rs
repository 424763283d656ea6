use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_element_bounding, use_element_visibility, use_event_listener, use_window,
    use_window_size, UseElementBoundingReturn, UseWindowSizeReturn,
};

use crate::motion::{section_scroll_ratio, ScrollRatio, SectionGeometry};

/// Vertical scroll offset of the window.
///
/// Sampled once on mount and again on every `scroll` event. The listener is
/// attached with the calling component and removed when its owner is disposed.
/// On the server the offset stays at 0.
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(0.0);
    let sample = move || {
        let y = window().scroll_y().unwrap_or_default();
        set_offset.set(y);
    };

    Effect::new(move |_| sample());
    let detach = use_event_listener(use_window(), ev::scroll, move |_| sample());
    on_cleanup(detach);

    offset
}

/// Progress of `target` through the viewport, recomputed whenever the
/// section's bounding box or the window size changes.
pub fn use_section_progress(target: NodeRef<html::Section>) -> Signal<ScrollRatio> {
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(target);
    let UseWindowSizeReturn {
        height: viewport_height,
        ..
    } = use_window_size();

    Signal::derive(move || {
        section_scroll_ratio(SectionGeometry {
            top: top.get(),
            height: height.get(),
            viewport_height: viewport_height.get(),
        })
    })
}

/// Latches to `true` the first time `target` intersects the viewport.
pub fn use_revealed(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });
    revealed
}

/// Fades and lifts its children into place once they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] wrapper_class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_revealed(target);
    let class = move || {
        let state = if revealed.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-5"
        };
        format!("transition-all duration-700 ease-out {wrapper_class} {state}")
    };

    view! {
        <div node_ref=target class=class style=format!("transition-delay: {delay_ms}ms")>
            {children()}
        </div>
    }
}
