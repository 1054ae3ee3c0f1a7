pub mod grooming_gallery;
pub mod hero_slider;
pub mod scroll_reveal;
pub mod shorts_carousel;
