mod components;

use components::grooming_gallery::GroomingGallery;
use components::hero_slider::HeroSlider;
use components::shorts_carousel::ShortsCarousel;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <HeroSlider />
            <ShortsCarousel />
            <GroomingGallery />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
