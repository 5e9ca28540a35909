use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Current document scroll position, in pixels and as page progress.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ScrollSignal {
    pub y: f64,
    /// `y` over the scrollable distance, in `[0, 1]`.
    pub progress: f64,
}

impl ScrollSignal {
    pub fn from_metrics(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let max = scroll_height - viewport_height;
        if !scroll_y.is_finite() || !max.is_finite() || max <= 0.0 {
            return Self::default();
        }
        let y = scroll_y.clamp(0.0, max);
        Self { y, progress: y / max }
    }

    fn read(window: &Window) -> Self {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let content = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        Self::from_metrics(scroll_y, content, viewport)
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    pub children: Children,
}

/// Owns the single window scroll subscription and broadcasts it to every
/// descendant through context.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let signal = use_state_eq(ScrollSignal::default);

    {
        let signal = signal.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window().map(|window| {
                    let callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        let signal = signal.clone();
                        move || signal.set(ScrollSignal::read(&window))
                    });
                    for event in SCROLL_EVENTS {
                        if let Err(e) = window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                        {
                            warn!("could not subscribe to {}: {:?}", event, e);
                        }
                    }
                    // Initial read
                    signal.set(ScrollSignal::read(&window));
                    (window, callback)
                });
                if subscription.is_none() {
                    debug!("no window, scroll layers stay static");
                }

                move || {
                    if let Some((window, callback)) = subscription {
                        for event in SCROLL_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollSignal> context={*signal}>
            { for props.children.iter() }
        </ContextProvider<ScrollSignal>>
    }
}

/// Latest scroll signal, or the top-of-page signal when no provider exists.
#[hook]
pub fn use_scroll_signal() -> ScrollSignal {
    use_context::<ScrollSignal>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_position_over_scrollable_distance() {
        let s = ScrollSignal::from_metrics(500.0, 3000.0, 1000.0);
        assert_eq!(s.y, 500.0);
        assert_eq!(s.progress, 0.25);
    }

    #[test]
    fn rubber_band_overscroll_is_clamped() {
        let above = ScrollSignal::from_metrics(-80.0, 3000.0, 1000.0);
        assert_eq!(above, ScrollSignal::default());

        let below = ScrollSignal::from_metrics(2150.0, 3000.0, 1000.0);
        assert_eq!(below.y, 2000.0);
        assert_eq!(below.progress, 1.0);
    }

    #[test]
    fn unscrollable_page_stays_at_top() {
        assert_eq!(
            ScrollSignal::from_metrics(0.0, 700.0, 900.0),
            ScrollSignal::default()
        );
        assert_eq!(
            ScrollSignal::from_metrics(10.0, 900.0, 900.0),
            ScrollSignal::default()
        );
    }

    #[test]
    fn non_finite_readings_degrade_to_top() {
        assert_eq!(
            ScrollSignal::from_metrics(f64::NAN, 3000.0, 1000.0),
            ScrollSignal::default()
        );
    }
}
