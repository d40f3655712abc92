//! Grid card for one work, with its optional inline carousel.
//!
//! The inline carousel index is local to the card. Clicks on carousel
//! controls or the external link are classified and never reach the
//! lightbox; anything else on the card opens it.

use gallery::card::{CardModel, FALLBACK_IMAGE, Slide, image_src};
use gallery::carousel::Carousel;
use gallery::consts::CAROUSEL_SWIPE_THRESHOLD_PX;
use gallery::input::{Direction, SwipeTracker};
use leptos::html::Article;
use leptos::prelude::*;

use crate::state::gallery::GalleryState;

/// `<img>` that swaps itself for the inline placeholder if loading fails.
#[component]
pub fn FallbackImg(src: String, alt: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let current = RwSignal::new(image_src(&src).to_owned());
    let on_error = move |_| {
        if current.with_untracked(|s| s != FALLBACK_IMAGE) {
            current.set(FALLBACK_IMAGE.to_owned());
        }
    };
    view! { <img class=class src=move || current.get() alt=alt loading="lazy" on:error=on_error/> }
}

#[component]
pub fn WorkCard(card: CardModel, delay_ms: u32) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let node = NodeRef::<Article>::new();
    let carousel = RwSignal::new(Carousel::new(card.slides.len()));
    let swipe = RwSignal::new(SwipeTracker::new(CAROUSEL_SWIPE_THRESHOLD_PX));
    let tilt = RwSignal::new((0.0_f64, 0.0_f64));

    let id = card.id.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        let target = crate::util::dom::classify_card_click(&ev);
        #[cfg(not(feature = "hydrate"))]
        let target = {
            let _ = ev;
            gallery::card::ClickTarget::Body
        };
        if target.opens_lightbox() {
            gallery.update(|g| {
                g.open_work(&id);
            });
        }
    };

    let on_tilt = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = node.get() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left();
            let y = f64::from(ev.client_y()) - rect.top();
            tilt.set(gallery::motion::tilt(rect.width(), rect.height(), x, y));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let step = move |direction: Direction| {
        carousel.update(|c| {
            if let Some(c) = c {
                c.step(direction);
            }
        });
    };

    #[cfg(feature = "hydrate")]
    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some(x) = crate::util::dom::touch_x(&ev) {
            swipe.update(|s| s.begin(x));
        }
    };
    #[cfg(feature = "hydrate")]
    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        let Some(x) = crate::util::dom::touch_x(&ev) else {
            swipe.update(SwipeTracker::cancel);
            return;
        };
        let mut direction = None;
        swipe.update(|s| direction = s.end(x));
        if let Some(direction) = direction {
            step(direction);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let (on_touch_start, on_touch_end) = (
        move |_: leptos::ev::TouchEvent| swipe.update(SwipeTracker::cancel),
        move |_: leptos::ev::TouchEvent| swipe.update(SwipeTracker::cancel),
    );

    let is_carousel = card.is_carousel();
    let slides = card.slides.clone();
    let slide_count = slides.len();
    let media = if is_carousel {
        view! {
            <div class="work-carousel" on:touchstart=on_touch_start on:touchend=on_touch_end>
                <div class="carousel-track">
                    {slides
                        .into_iter()
                        .enumerate()
                        .map(|(i, Slide { src, alt })| {
                            view! {
                                <div
                                    class="carousel-slide"
                                    class:active=move || carousel.with(|c| c.is_some_and(|c| c.is_active(i)))
                                >
                                    <FallbackImg src alt/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="carousel-btn carousel-btn--prev" aria-label="Previous image" on:click=move |_| step(Direction::Prev)>
                    "‹"
                </button>
                <button class="carousel-btn carousel-btn--next" aria-label="Next image" on:click=move |_| step(Direction::Next)>
                    "›"
                </button>
                <div class="carousel-dots">
                    {(0..slide_count)
                        .map(|i| {
                            view! {
                                <button
                                    class="carousel-dot"
                                    class:active=move || carousel.with(|c| c.is_some_and(|c| c.is_active(i)))
                                    aria-label=format!("Image {}", i + 1)
                                    on:click=move |_| {
                                        carousel.update(|c| {
                                            if let Some(c) = c {
                                                c.go_to(i);
                                            }
                                        });
                                    }
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="carousel-counter">
                    {move || carousel.with(|c| c.map(|c| c.counter_label()).unwrap_or_default())}
                </span>
            </div>
        }
        .into_any()
    } else {
        let Slide { src, alt } = slides.into_iter().next().unwrap_or_else(|| Slide {
            src: String::new(),
            alt: card.title.clone(),
        });
        view! {
            <div class="work-image">
                <FallbackImg src alt/>
            </div>
        }
        .into_any()
    };

    let CardModel { title, category_label, category_color, description, tags, link, .. } = card;

    view! {
        <article
            node_ref=node
            class="work-card"
            style:animation-delay=format!("{delay_ms}ms")
            style:transform=move || {
                let (rx, ry) = tilt.get();
                format!("perspective(1000px) rotateX({rx:.2}deg) rotateY({ry:.2}deg)")
            }
            on:click=on_click
            on:mousemove=on_tilt
            on:mouseleave=move |_| tilt.set((0.0, 0.0))
        >
            {media}
            <div class="work-info">
                <span class="work-category" style:color=category_color>{category_label}</span>
                <h3 class="work-title">{title}</h3>
                <p class="work-description">{description}</p>
                <div class="work-tags">
                    {tags.into_iter().map(|tag| view! { <span class="work-tag">{tag}</span> }).collect_view()}
                </div>
                {link
                    .map(|href| {
                        view! {
                            <a class="work-external-link" href=href target="_blank" rel="noopener">
                                "Open ↗"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
