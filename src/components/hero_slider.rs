use web_sys::MouseEvent;
use yew::prelude::*;

use super::scroll_reveal::use_scroll_reveal;

const HERO_VIDEOS: [&str; 3] = [
    "/videos/slide1.mp4",
    "/videos/cuttingv2.mp4",
    "/videos/cuttingv3.mp4",
];

fn next_index(current: usize, count: usize) -> usize {
    (current + 1) % count
}

fn previous_index(current: usize, count: usize) -> usize {
    (current + count - 1) % count
}

#[function_component(HeroSlider)]
pub fn hero_slider() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_scroll_reveal(&section_ref, false);
    let current = use_state(|| 0usize);
    // The slide that just lost the active spot keeps a `leaving` class so
    // both halves of the cross-transition run off the same state change.
    let leaving = use_state(|| None::<usize>);

    let show_slide = {
        let current = current.clone();
        let leaving = leaving.clone();
        Callback::from(move |target: usize| {
            if target != *current {
                leaving.set(Some(*current));
                current.set(target);
            }
        })
    };

    let on_previous = {
        let current = current.clone();
        let show_slide = show_slide.clone();
        Callback::from(move |_: MouseEvent| {
            show_slide.emit(previous_index(*current, HERO_VIDEOS.len()));
        })
    };

    let on_next = {
        let current = current.clone();
        let show_slide = show_slide.clone();
        Callback::from(move |_: MouseEvent| {
            show_slide.emit(next_index(*current, HERO_VIDEOS.len()));
        })
    };

    html! {
        <section ref={section_ref} class={classes!("hero-section", if revealed { "revealed" } else { "" })}>
            <div class="hero-inner">
                <h1 class="hero-title">
                    {"Hair Shortcut by "}
                    <span class="hero-brand">{"Deigo"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Master quick and stylish hair shortcuts with "}
                    <span class="hero-highlight">{"Deigo's signature techniques."}</span>
                    {" Elevate your style and confidence with every cut."}
                </p>
                <button class="hero-cta">{"Explore Styles"}</button>

                <div class="hero-slider">
                    <button
                        class="slider-arrow slider-arrow-left"
                        aria-label="Previous video"
                        onclick={on_previous}
                    >
                        <i class="fas fa-chevron-left"></i>
                    </button>

                    <div class="slider-frame">
                        { for HERO_VIDEOS.iter().enumerate().map(|(index, src)| {
                            let state = if index == *current {
                                "active"
                            } else if Some(index) == *leaving {
                                "leaving"
                            } else {
                                ""
                            };
                            html! {
                                <video
                                    key={index}
                                    class={classes!("hero-slide", state)}
                                    src={*src}
                                    autoplay=true
                                    muted=true
                                    loop=true
                                    playsinline=true
                                    preload="none"
                                />
                            }
                        }) }
                        <div class="slider-shade"></div>
                        <div class="slider-dots">
                            { for (0..HERO_VIDEOS.len()).map(|index| {
                                let show_slide = show_slide.clone();
                                let onclick = Callback::from(move |_: MouseEvent| show_slide.emit(index));
                                html! {
                                    <button
                                        key={index}
                                        class={classes!("slider-dot", if index == *current { "active" } else { "" })}
                                        aria-label={format!("Go to video {}", index + 1)}
                                        {onclick}
                                    />
                                }
                            }) }
                        </div>
                    </div>

                    <button
                        class="slider-arrow slider-arrow-right"
                        aria-label="Next video"
                        onclick={on_next}
                    >
                        <i class="fas fa-chevron-right"></i>
                    </button>
                </div>
            </div>
            <style>
                {r#"
    .hero-section {
        position: relative;
        width: 100%;
        padding: 5rem 1.5rem 6rem;
        background: #DFF2FE;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        opacity: 0;
        transform: translateY(60px);
        transition: opacity 1.3s ease, transform 1.3s ease;
    }
    .hero-section.revealed {
        opacity: 1;
        transform: none;
    }
    .hero-inner {
        width: 100%;
        max-width: 1100px;
        margin: 0 auto;
    }
    .hero-title {
        font-size: 3.5rem;
        font-weight: 700;
        color: #0f172a;
        margin: 0 0 1.5rem;
    }
    .hero-brand {
        background: linear-gradient(90deg, #0ea5e9, #0284c7);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle {
        font-size: 1.15rem;
        line-height: 1.7;
        color: #475569;
        max-width: 48rem;
        margin: 0 auto 2rem;
    }
    .hero-highlight {
        font-weight: 600;
        color: #0ea5e9;
    }
    .hero-cta {
        background: #0ea5e9;
        color: #fff;
        font-weight: 600;
        font-size: 1rem;
        padding: 0.85rem 2.2rem;
        border: none;
        border-radius: 999px;
        box-shadow: 0 10px 24px rgba(14, 165, 233, 0.35);
        cursor: pointer;
        transition: background 0.3s ease;
    }
    .hero-cta:hover {
        background: #0284c7;
    }
    .hero-slider {
        position: relative;
        margin-top: 3rem;
        display: flex;
        justify-content: center;
        align-items: center;
    }
    .slider-frame {
        position: relative;
        width: 100%;
        max-width: 64rem;
        aspect-ratio: 16 / 9;
        border-radius: 1rem;
        overflow: hidden;
        border: 1px solid #bae6fd;
        box-shadow: 0 25px 60px rgba(2, 132, 199, 0.25);
    }
    .hero-slide {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0;
        transform: translateX(40px);
        transition: opacity 0.8s ease-in-out, transform 0.8s ease-in-out;
        z-index: 0;
    }
    .hero-slide.active {
        opacity: 1;
        transform: translateX(0);
        z-index: 2;
    }
    .hero-slide.leaving {
        opacity: 0;
        transform: translateX(-40px);
        z-index: 1;
    }
    .slider-shade {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.2), transparent);
        z-index: 3;
        pointer-events: none;
    }
    .slider-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        z-index: 4;
        width: 3rem;
        height: 3rem;
        border: none;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.75);
        color: #0369a1;
        font-size: 1.1rem;
        cursor: pointer;
        box-shadow: 0 8px 20px rgba(15, 23, 42, 0.15);
        backdrop-filter: blur(6px);
        transition: background 0.3s ease;
    }
    .slider-arrow:hover {
        background: #e0f2fe;
    }
    .slider-arrow-left {
        left: -1.5rem;
    }
    .slider-arrow-right {
        right: -1.5rem;
    }
    .slider-dots {
        position: absolute;
        bottom: 1rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        gap: 0.75rem;
        z-index: 4;
    }
    .slider-dot {
        width: 0.75rem;
        height: 0.75rem;
        padding: 0;
        border: none;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.7);
        cursor: pointer;
        transition: background 0.3s ease, transform 0.3s ease;
    }
    .slider-dot:hover {
        background: #7dd3fc;
    }
    .slider-dot.active {
        background: #38bdf8;
        transform: scale(1.15);
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 2.4rem;
        }
        .hero-subtitle {
            font-size: 1rem;
        }
        .slider-arrow-left {
            left: 0.5rem;
        }
        .slider-arrow-right {
            right: 0.5rem;
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

    const COUNT: usize = HERO_VIDEOS.len();

    #[test]
    fn next_advances_and_wraps() {
        assert_eq!(next_index(0, COUNT), 1);
        assert_eq!(next_index(1, COUNT), 2);
        assert_eq!(next_index(COUNT - 1, COUNT), 0);
    }

    #[test]
    fn previous_wraps_from_the_first_slide() {
        assert_eq!(previous_index(0, COUNT), 2);
        assert_eq!(previous_index(1, COUNT), 0);
        assert_eq!(previous_index(2, COUNT), 1);
    }

    #[test]
    fn stepping_forward_then_back_is_identity() {
        for index in 0..COUNT {
            assert_eq!(previous_index(next_index(index, COUNT), COUNT), index);
        }
    }

    #[test]
    fn a_full_cycle_returns_to_the_start() {
        let mut index = 0;
        for _ in 0..COUNT {
            index = next_index(index, COUNT);
        }
        assert_eq!(index, 0);
    }
}
