use gloo_console::error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

// A section counts as in view once its top edge crosses this fraction of
// the viewport height.
const REVEAL_FRACTION: f64 = 0.85;

fn is_in_view(section_top: f64, viewport_height: f64) -> bool {
    section_top < viewport_height * REVEAL_FRACTION
}

/// Tracks whether the section behind `section_ref` has scrolled into view.
///
/// Registers a window scroll listener on mount and removes it on unmount.
/// With `once` set, the flag latches after the first reveal; otherwise it
/// drops again when the section scrolls back out above the threshold. The
/// caller maps the flag onto a CSS class and lets a stylesheet transition
/// do the actual fading.
#[hook]
pub fn use_scroll_reveal(section_ref: &NodeRef, once: bool) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let evaluate = {
                        let revealed = revealed.clone();
                        let section_ref = section_ref.clone();
                        move || {
                            if let Some(section) = section_ref.cast::<Element>() {
                                if let Some(win) = web_sys::window() {
                                    let viewport_height = win
                                        .inner_height()
                                        .ok()
                                        .and_then(|height| height.as_f64())
                                        .unwrap_or(0.0);
                                    let section_top = section.get_bounding_client_rect().top();
                                    let in_view = is_in_view(section_top, viewport_height);
                                    if once {
                                        if in_view {
                                            revealed.set(true);
                                        }
                                    } else {
                                        revealed.set(in_view);
                                    }
                                }
                            } else {
                                error!("scroll reveal target is not attached to an element");
                            }
                        }
                    };
                    let callback = Closure::<dyn Fn()>::new({
                        let evaluate = evaluate.clone();
                        move || evaluate()
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Sections already on screen reveal without a scroll.
                    evaluate();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }
    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_below_the_threshold() {
        assert!(is_in_view(500.0, 800.0));
    }

    #[test]
    fn holds_back_at_or_past_the_threshold() {
        // 800 * 0.85 = 680
        assert!(!is_in_view(680.0, 800.0));
        assert!(!is_in_view(900.0, 800.0));
    }

    #[test]
    fn a_section_at_the_top_of_the_page_is_visible_immediately() {
        assert!(is_in_view(0.0, 800.0));
    }
}
