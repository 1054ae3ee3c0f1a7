use web_sys::MouseEvent;
use yew::prelude::*;

use super::scroll_reveal::use_scroll_reveal;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum StyleCategory {
    Beard,
    Mustache,
    Hair,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum GalleryFilter {
    #[default]
    All,
    Only(StyleCategory),
}

impl GalleryFilter {
    fn admits(self, category: StyleCategory) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Only(wanted) => wanted == category,
        }
    }

    fn label(self) -> &'static str {
        match self {
            GalleryFilter::All => "All",
            GalleryFilter::Only(StyleCategory::Beard) => "Beard",
            GalleryFilter::Only(StyleCategory::Mustache) => "Mustache",
            GalleryFilter::Only(StyleCategory::Hair) => "Hair",
        }
    }

    fn key(self) -> &'static str {
        match self {
            GalleryFilter::All => "all",
            GalleryFilter::Only(StyleCategory::Beard) => "beard",
            GalleryFilter::Only(StyleCategory::Mustache) => "mustache",
            GalleryFilter::Only(StyleCategory::Hair) => "hair",
        }
    }
}

const FILTER_CHOICES: [GalleryFilter; 4] = [
    GalleryFilter::All,
    GalleryFilter::Only(StyleCategory::Beard),
    GalleryFilter::Only(StyleCategory::Mustache),
    GalleryFilter::Only(StyleCategory::Hair),
];

#[derive(PartialEq, Debug)]
struct GalleryItem {
    id: u32,
    category: StyleCategory,
    title: &'static str,
    image: &'static str,
    blurb: &'static str,
}

const GALLERY_ITEMS: [GalleryItem; 6] = [
    GalleryItem {
        id: 1,
        category: StyleCategory::Beard,
        title: "Classic Beard Trim",
        image: "/images/selfbeardtrim.jpeg",
        blurb: "Clean lines with a soft fade on the sides for a professional look.",
    },
    GalleryItem {
        id: 2,
        category: StyleCategory::Mustache,
        title: "Handlebar Mustache",
        image: "/images/HandlebarMustache.jpg",
        blurb: "Curled tips styled with wax for a bold, timeless look.",
    },
    GalleryItem {
        id: 3,
        category: StyleCategory::Hair,
        title: "Self Haircut Fade",
        image: "/images/SelfHaircutFade.jpg",
        blurb: "DIY mid fade with smooth blending and clean finish.",
    },
    GalleryItem {
        id: 4,
        category: StyleCategory::Beard,
        title: "Beard Sculpting",
        image: "/images/BeardSculpting.jpg",
        blurb: "Precision shaping for jawline definition and clean neckline.",
    },
    GalleryItem {
        id: 5,
        category: StyleCategory::Mustache,
        title: "Minimal Mustache",
        image: "/images/MinimalMustache.avif",
        blurb: "Short, neat, and balanced. Perfect for subtle style.",
    },
    GalleryItem {
        id: 6,
        category: StyleCategory::Hair,
        title: "Textured Crop",
        image: "/images/TexturedCrop.jpg",
        blurb: "Modern crop with textured top. Easy to maintain daily.",
    },
];

/// Pure projection of the static table; the table itself is never touched.
fn visible_items(filter: GalleryFilter) -> Vec<&'static GalleryItem> {
    GALLERY_ITEMS
        .iter()
        .filter(|item| filter.admits(item.category))
        .collect()
}

// Delay between consecutive cards in the staggered entrance.
const CARD_STAGGER_MS: usize = 120;

#[function_component(GroomingGallery)]
pub fn grooming_gallery() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_scroll_reveal(&section_ref, true);
    let filter = use_state(GalleryFilter::default);

    let items = visible_items(*filter);

    html! {
        <section ref={section_ref} class={classes!("gallery-section", if revealed { "revealed" } else { "" })}>
            <div class="gallery-header">
                <i class="fas fa-scissors gallery-icon"></i>
                <h2 class="gallery-title">
                    {"Explore "}
                    <span class="gallery-accent">{"Your Style"}</span>
                    {" — Beard, Mustache & Hair"}
                </h2>
                <p class="gallery-copy">
                    {"Pick a category to learn grooming styles or explore all for full inspiration."}
                </p>
            </div>

            <div class="gallery-filters">
                { for FILTER_CHOICES.iter().map(|choice| {
                    let choice = *choice;
                    let filter_handle = filter.clone();
                    let onclick = Callback::from(move |_: MouseEvent| filter_handle.set(choice));
                    html! {
                        <button
                            key={choice.key()}
                            class={classes!("filter-button", if *filter == choice { "selected" } else { "" })}
                            {onclick}
                        >
                            <i class="fas fa-filter"></i>
                            { choice.label() }
                        </button>
                    }
                }) }
            </div>

            if items.is_empty() {
                <p class="gallery-empty">{"No styles found."}</p>
            } else {
                <div class="gallery-grid">
                    { for items.iter().enumerate().map(|(position, item)| html! {
                        // Keying on the filter recreates the cards on every
                        // filter change, restarting the entrance animation.
                        <div
                            key={format!("{}-{}", filter.key(), item.id)}
                            class="gallery-card"
                            style={format!("animation-delay: {}ms;", position * CARD_STAGGER_MS)}
                        >
                            <div class="card-media">
                                <img src={item.image} alt={item.title} loading="lazy" />
                                <div class="card-veil"></div>
                            </div>
                            <div class="card-body">
                                <h3 class="card-title">{ item.title }</h3>
                                <p class="card-blurb">{ item.blurb }</p>
                            </div>
                        </div>
                    }) }
                </div>
            }
            <style>
                {r#"
    .gallery-section {
        width: 100%;
        padding: 5rem 1.5rem 6rem;
        background: #F8FBFF;
        text-align: center;
        opacity: 0;
        transform: translateY(60px);
        transition: opacity 1.2s ease, transform 1.2s ease;
    }
    .gallery-section.revealed {
        opacity: 1;
        transform: none;
    }
    .gallery-header {
        max-width: 56rem;
        margin: 0 auto 3.5rem;
    }
    .gallery-icon {
        font-size: 2.2rem;
        color: #0ea5e9;
        margin-bottom: 1rem;
        animation: icon-pulse 2s ease-in-out infinite;
    }
    @keyframes icon-pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
    .gallery-title {
        font-size: 2.6rem;
        font-weight: 700;
        color: #0f172a;
        margin: 0 0 0.75rem;
    }
    .gallery-accent {
        color: #0ea5e9;
    }
    .gallery-copy {
        font-size: 1.15rem;
        line-height: 1.7;
        color: #475569;
        margin: 0;
    }
    .gallery-filters {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
        margin-bottom: 3rem;
    }
    .filter-button {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.65rem 1.3rem;
        border-radius: 999px;
        border: 1px solid #e2e8f0;
        background: #fff;
        color: #334155;
        font-weight: 500;
        font-size: 1rem;
        cursor: pointer;
        transition: border-color 0.2s ease, color 0.2s ease, background 0.2s ease;
    }
    .filter-button:hover {
        border-color: #7dd3fc;
        color: #0284c7;
    }
    .filter-button.selected {
        background: #0ea5e9;
        color: #fff;
        border-color: #0ea5e9;
        box-shadow: 0 8px 20px rgba(14, 165, 233, 0.3);
    }
    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(1, 1fr);
        gap: 2rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    @media (min-width: 640px) {
        .gallery-grid { grid-template-columns: repeat(2, 1fr); }
    }
    @media (min-width: 900px) {
        .gallery-grid { grid-template-columns: repeat(3, 1fr); }
    }
    @media (min-width: 1280px) {
        .gallery-grid { grid-template-columns: repeat(4, 1fr); }
    }
    .gallery-card {
        background: #fff;
        border: 1px solid #f1f5f9;
        border-radius: 1rem;
        overflow: hidden;
        box-shadow: 0 12px 30px rgba(15, 23, 42, 0.08);
        text-align: left;
        opacity: 0;
        animation: card-in 0.6s ease-out forwards;
        transition: box-shadow 0.5s ease;
    }
    .gallery-card:hover {
        box-shadow: 0 24px 50px rgba(15, 23, 42, 0.16);
    }
    @keyframes card-in {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
    .card-media {
        position: relative;
        aspect-ratio: 4 / 3;
        width: 100%;
        overflow: hidden;
    }
    .card-media img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s ease;
    }
    .gallery-card:hover .card-media img {
        transform: scale(1.05);
    }
    .card-veil {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.2), transparent);
        opacity: 0;
        transition: opacity 0.5s ease;
    }
    .gallery-card:hover .card-veil {
        opacity: 1;
    }
    .card-body {
        padding: 1.25rem;
    }
    .card-title {
        font-size: 1.2rem;
        font-weight: 600;
        color: #1e293b;
        margin: 0 0 0.5rem;
    }
    .card-blurb {
        font-size: 0.95rem;
        line-height: 1.6;
        color: #475569;
        margin: 0;
    }
    .gallery-empty {
        margin-top: 2.5rem;
        font-size: 1.1rem;
        color: #64748b;
    }
    @media (max-width: 640px) {
        .gallery-title {
            font-size: 2rem;
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

    fn ids(filter: GalleryFilter) -> Vec<u32> {
        visible_items(filter).iter().map(|item| item.id).collect()
    }

    #[test]
    fn the_default_filter_shows_every_style() {
        assert_eq!(GalleryFilter::default(), GalleryFilter::All);
        assert_eq!(ids(GalleryFilter::All), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn beard_projects_its_two_styles_in_order() {
        assert_eq!(ids(GalleryFilter::Only(StyleCategory::Beard)), vec![1, 4]);
    }

    #[test]
    fn mustache_projects_its_two_styles_in_order() {
        assert_eq!(ids(GalleryFilter::Only(StyleCategory::Mustache)), vec![2, 5]);
    }

    #[test]
    fn hair_projects_its_two_styles_in_order() {
        assert_eq!(ids(GalleryFilter::Only(StyleCategory::Hair)), vec![3, 6]);
    }

    #[test]
    fn narrowing_then_widening_restores_the_full_list() {
        assert_eq!(ids(GalleryFilter::Only(StyleCategory::Beard)).len(), 2);
        let widened = ids(GalleryFilter::All);
        assert_eq!(widened.len(), GALLERY_ITEMS.len());
        assert_eq!(widened, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn filtering_does_not_touch_the_source_table() {
        let before: Vec<u32> = GALLERY_ITEMS.iter().map(|item| item.id).collect();
        let _ = visible_items(GalleryFilter::Only(StyleCategory::Hair));
        let after: Vec<u32> = GALLERY_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(before, after);
    }
}
