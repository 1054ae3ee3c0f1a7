use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use super::scroll_reveal::use_scroll_reveal;

const SHORT_EMBEDS: [&str; 6] = [
    "https://www.youtube.com/embed/3doBdRJfJvs",
    "https://www.youtube.com/embed/5FqC07Ix_bI",
    "https://www.youtube.com/embed/eWLblAbP9gg",
    "https://www.youtube.com/embed/5Fbwd_Pdykk",
    "https://www.youtube.com/embed/7XTFtCko-Ao",
    "https://www.youtube.com/embed/5qap5aO4i9A",
];

// One arrow press covers roughly one card plus its gap. The browser clamps
// the resulting offset to the strip's content bounds.
const SCROLL_STEP_PX: f64 = 320.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ScrollDirection {
    Left,
    Right,
}

fn scroll_delta(direction: ScrollDirection) -> f64 {
    match direction {
        ScrollDirection::Left => -SCROLL_STEP_PX,
        ScrollDirection::Right => SCROLL_STEP_PX,
    }
}

fn scroll_strip(strip_ref: &NodeRef, direction: ScrollDirection) {
    if let Some(strip) = strip_ref.cast::<Element>() {
        let options = ScrollToOptions::new();
        options.set_left(scroll_delta(direction));
        options.set_behavior(ScrollBehavior::Smooth);
        strip.scroll_by_with_scroll_to_options(&options);
    }
}

#[function_component(ShortsCarousel)]
pub fn shorts_carousel() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_scroll_reveal(&section_ref, false);
    let strip_ref = use_node_ref();

    let on_scroll_left = {
        let strip_ref = strip_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_strip(&strip_ref, ScrollDirection::Left))
    };
    let on_scroll_right = {
        let strip_ref = strip_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_strip(&strip_ref, ScrollDirection::Right))
    };

    html! {
        <section ref={section_ref} class={classes!("shorts-section", if revealed { "revealed" } else { "" })}>
            <div class="shorts-header">
                <h2 class="shorts-title">
                    {"Watch "}
                    <span class="shorts-brand">{"Deigo's YouTube Shorts"}</span>
                </h2>
                <p class="shorts-copy">
                    {"Get inspired by fast, trendy, and easy-to-follow hair transformations. Watch "}
                    <span class="shorts-highlight">{"real grooming tutorials"}</span>
                    {" from Deigo's channel."}
                </p>
            </div>

            <div class="shorts-carousel">
                <button
                    class="carousel-arrow carousel-arrow-left"
                    aria-label="Scroll left"
                    onclick={on_scroll_left}
                >
                    <i class="fas fa-chevron-left"></i>
                </button>

                <div class="shorts-strip" ref={strip_ref}>
                    { for SHORT_EMBEDS.iter().enumerate().map(|(index, src)| html! {
                        <div key={index} class="shorts-card">
                            <iframe
                                src={*src}
                                title={format!("Deigo grooming short {}", index + 1)}
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                allowfullscreen=true
                                loading="lazy"
                            />
                        </div>
                    }) }
                </div>

                <button
                    class="carousel-arrow carousel-arrow-right"
                    aria-label="Scroll right"
                    onclick={on_scroll_right}
                >
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <style>
                {r#"
    .shorts-section {
        position: relative;
        width: 100%;
        padding: 5rem 1.5rem;
        background: #EAF6FF;
        text-align: center;
        overflow: hidden;
        opacity: 0;
        transform: translateY(50px);
        transition: opacity 1s ease, transform 1s ease;
    }
    .shorts-section.revealed {
        opacity: 1;
        transform: none;
    }
    .shorts-header {
        max-width: 48rem;
        margin: 0 auto 3rem;
    }
    .shorts-title {
        font-size: 2.6rem;
        font-weight: 700;
        color: #0f172a;
        margin: 0 0 1rem;
    }
    .shorts-brand {
        background: linear-gradient(90deg, #0ea5e9, #0284c7);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .shorts-copy {
        font-size: 1.15rem;
        line-height: 1.7;
        color: #475569;
        margin: 0;
    }
    .shorts-highlight {
        font-weight: 600;
        color: #0ea5e9;
    }
    .shorts-carousel {
        position: relative;
        max-width: 80rem;
        margin: 0 auto;
    }
    .shorts-strip {
        display: flex;
        gap: 1.5rem;
        overflow-x: auto;
        scroll-snap-type: x mandatory;
        scroll-behavior: smooth;
        padding: 0 2rem;
        scrollbar-width: none;
        -ms-overflow-style: none;
    }
    .shorts-strip::-webkit-scrollbar {
        display: none;
    }
    .shorts-card {
        position: relative;
        flex: 0 0 auto;
        min-width: 280px;
        aspect-ratio: 9 / 16;
        background: #000;
        border-radius: 1rem;
        overflow: hidden;
        scroll-snap-align: center;
        box-shadow: 0 18px 40px rgba(15, 23, 42, 0.25);
        transition: transform 0.3s ease;
    }
    .shorts-card:hover {
        transform: scale(1.02);
    }
    .shorts-card iframe {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        border: none;
    }
    .carousel-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        z-index: 20;
        width: 3rem;
        height: 3rem;
        border: none;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.8);
        color: #0369a1;
        font-size: 1.1rem;
        cursor: pointer;
        box-shadow: 0 8px 20px rgba(15, 23, 42, 0.15);
        backdrop-filter: blur(6px);
        transition: background 0.3s ease;
    }
    .carousel-arrow:hover {
        background: #e0f2fe;
    }
    .carousel-arrow-left {
        left: -1rem;
    }
    .carousel-arrow-right {
        right: -1rem;
    }
    @media (max-width: 640px) {
        .shorts-title {
            font-size: 2rem;
        }
        .shorts-card {
            min-width: 200px;
        }
        .carousel-arrow-left {
            left: 0.25rem;
        }
        .carousel-arrow-right {
            right: 0.25rem;
        }
    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_right_scroll_moves_forward_by_one_step() {
        assert_eq!(scroll_delta(ScrollDirection::Right), SCROLL_STEP_PX);
    }

    #[test]
    fn a_left_scroll_mirrors_the_right_step() {
        assert_eq!(
            scroll_delta(ScrollDirection::Left),
            -scroll_delta(ScrollDirection::Right)
        );
    }
}
