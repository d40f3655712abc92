//! Full-screen lightbox over the filtered works.
//!
//! SYSTEM CONTEXT
//! ==============
//! All transitions go through `GalleryState` (and so the `gallery` lightbox
//! state machine). This module only adds what needs a DOM: the window keydown
//! listener, touch tracking, the directional swap animation and the deferred
//! teardown after the close transition.
//!
//! The overlay is mounted while the lightbox is Open or Closing. Its keydown
//! listener is installed on mount and removed on unmount, so exactly one
//! exists while the overlay is in the DOM.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use gallery::card::slides_for;
use gallery::consts::{
    CAROUSEL_SWIPE_THRESHOLD_PX, LIGHTBOX_CLOSE_MS, LIGHTBOX_SWAP_IN_MS, LIGHTBOX_SWAP_OFFSET_PX, LIGHTBOX_SWAP_OUT_MS,
    LIGHTBOX_SWIPE_THRESHOLD_PX,
};
use gallery::input::{Direction, HitRegion, SwipeTracker};
use gallery::lightbox::LightboxEffect;
use gallery::work::WorkItem;
use leptos::prelude::*;

use crate::components::work_card::FallbackImg;
use crate::state::gallery::GalleryState;
use crate::util::timers;

/// Selector of the nested carousel; touches starting inside it drive the carousel.
#[cfg(feature = "hydrate")]
const CAROUSEL_REGION_SELECTOR: &str = ".lightbox-carousel";

/// Phase of the directional content swap after a navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwapPhase {
    #[default]
    Idle,
    /// New content parked off to the side, hidden.
    Out(Direction),
    /// New content sliding into place.
    In(Direction),
}

/// Inline style of the content wrapper for a swap phase.
pub fn swap_style(phase: SwapPhase) -> String {
    match phase {
        SwapPhase::Idle => String::new(),
        SwapPhase::Out(direction) => {
            #[allow(clippy::cast_precision_loss)]
            let offset = LIGHTBOX_SWAP_OFFSET_PX * direction.offset() as f64;
            format!("transform: translateX({offset}px); opacity: 0; transition: opacity {LIGHTBOX_SWAP_OUT_MS}ms ease")
        }
        SwapPhase::In(_) => format!(
            "transform: translateX(0); opacity: 1; transition: transform {LIGHTBOX_SWAP_IN_MS}ms ease, opacity {LIGHTBOX_SWAP_IN_MS}ms ease"
        ),
    }
}

/// Swipe threshold for a touch that started in `region`.
pub fn swipe_threshold(region: HitRegion) -> f64 {
    match region {
        HitRegion::Carousel => CAROUSEL_SWIPE_THRESHOLD_PX,
        HitRegion::Body => LIGHTBOX_SWIPE_THRESHOLD_PX,
    }
}

/// Swap animation driver. Lives outside the overlay so pending timers never
/// touch disposed signals.
#[derive(Clone, Copy)]
struct Swap {
    phase: RwSignal<SwapPhase>,
    seq: RwSignal<u64>,
}

impl Swap {
    fn new() -> Self {
        Self { phase: RwSignal::new(SwapPhase::Idle), seq: RwSignal::new(0) }
    }

    /// Play the swap for a navigation effect; other effects are ignored.
    fn play(self, effect: Option<LightboxEffect>) {
        let Some(LightboxEffect::Navigated(direction)) = effect else {
            return;
        };
        let seq = self.seq.get_untracked() + 1;
        self.seq.set(seq);
        self.phase.set(SwapPhase::Out(direction));
        timers::after(LIGHTBOX_SWAP_OUT_MS, move || {
            if self.seq.get_untracked() != seq {
                return;
            }
            self.phase.set(SwapPhase::In(direction));
            timers::after(LIGHTBOX_SWAP_IN_MS, move || {
                if self.seq.get_untracked() == seq {
                    self.phase.set(SwapPhase::Idle);
                }
            });
        });
    }
}

#[component]
pub fn Lightbox() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let mounted = Memo::new(move |_| gallery.with(|g| g.lightbox.is_mounted()));
    let closing = Memo::new(move |_| gallery.with(GalleryState::closing_session));
    let swap = Swap::new();

    Effect::new(move || {
        if let Some(session) = closing.get() {
            timers::after(LIGHTBOX_CLOSE_MS, move || {
                gallery.update(|g| {
                    g.lightbox.finish_close(session);
                });
            });
        }
    });

    view! {
        <Show when=move || mounted.get()>
            <LightboxOverlay swap/>
        </Show>
    }
}

#[component]
fn LightboxOverlay(swap: Swap) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let is_open = move || gallery.with(|g| g.lightbox.is_open());
    let current = Memo::new(move |_| gallery.with(|g| g.current_work().cloned()));

    let act = move |f: fn(&mut GalleryState) -> Option<LightboxEffect>| {
        let mut effect = None;
        gallery.update(|g| effect = f(g));
        swap.play(effect);
    };
    let close = move || {
        gallery.update(|g| {
            g.lightbox.close();
        });
    };

    #[cfg(feature = "hydrate")]
    {
        let keys = window_event_listener(leptos::ev::keydown, move |ev| {
            let mut effect = None;
            gallery.update(|g| effect = g.handle_key(&ev.key()));
            if effect.is_some() {
                ev.prevent_default();
            }
            swap.play(effect);
        });
        on_cleanup(move || keys.remove());
    }

    let touch = RwSignal::new(None::<(HitRegion, SwipeTracker)>);
    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let Some(x) = crate::util::dom::touch_x(&ev) else {
                return;
            };
            let in_carousel = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(CAROUSEL_REGION_SELECTOR).ok().flatten())
                .is_some();
            let region = if in_carousel { HitRegion::Carousel } else { HitRegion::Body };
            let mut tracker = SwipeTracker::new(swipe_threshold(region));
            tracker.begin(x);
            touch.set(Some((region, tracker)));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        let Some((region, mut tracker)) = touch.get_untracked() else {
            return;
        };
        touch.set(None);
        #[cfg(feature = "hydrate")]
        let x = crate::util::dom::touch_x(&ev);
        #[cfg(not(feature = "hydrate"))]
        let x = {
            let _ = ev;
            None::<f64>
        };
        let Some(direction) = x.and_then(|x| tracker.end(x)) else {
            return;
        };
        let mut effect = None;
        gallery.update(|g| effect = g.handle_swipe(region, direction));
        swap.play(effect);
    };

    view! {
        <div class="lightbox" class:active=is_open on:click=move |_| close()>
            <button class="lightbox-close" aria-label="Close" on:click=move |_| close()>
                "×"
            </button>
            <Show when=move || gallery.with(GalleryState::can_navigate)>
                <button
                    class="lightbox-nav lightbox-prev"
                    aria-label="Previous work"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        act(|g| g.navigate(Direction::Prev));
                    }
                >
                    "‹"
                </button>
                <button
                    class="lightbox-nav lightbox-next"
                    aria-label="Next work"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        act(|g| g.navigate(Direction::Next));
                    }
                >
                    "›"
                </button>
            </Show>
            <div
                class="lightbox-content"
                style=move || swap_style(swap.phase.get())
                on:click=move |ev| ev.stop_propagation()
                on:touchstart=on_touch_start
                on:touchend=on_touch_end
            >
                {move || current.get().map(|work| view! { <LightboxBody work/> })}
            </div>
            <div class="lightbox-counter">{move || gallery.with(GalleryState::counter_label).unwrap_or_default()}</div>
        </div>
    }
}

/// Media and details of the displayed work.
#[component]
fn LightboxBody(work: WorkItem) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let slides = slides_for(&work);
    let slide_count = slides.len();
    let active = move |i: usize| gallery.with(|g| g.lightbox.carousel().is_some_and(|c| c.is_active(i)));

    let media = if work.is_carousel() {
        view! {
            <div class="lightbox-carousel">
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(i, slide)| {
                        view! {
                            <div class="lightbox-slide" class:active=move || active(i)>
                                <FallbackImg src=slide.src alt=slide.alt/>
                            </div>
                        }
                    })
                    .collect_view()}
                <button
                    class="carousel-btn carousel-btn--prev"
                    aria-label="Previous image"
                    on:click=move |_| {
                        gallery.update(|g| {
                            g.lightbox.step_carousel(Direction::Prev);
                        });
                    }
                >
                    "‹"
                </button>
                <button
                    class="carousel-btn carousel-btn--next"
                    aria-label="Next image"
                    on:click=move |_| {
                        gallery.update(|g| {
                            g.lightbox.step_carousel(Direction::Next);
                        });
                    }
                >
                    "›"
                </button>
                <div class="carousel-dots">
                    {(0..slide_count)
                        .map(|i| {
                            view! {
                                <button
                                    class="carousel-dot"
                                    class:active=move || active(i)
                                    aria-label=format!("Image {}", i + 1)
                                    on:click=move |_| {
                                        gallery.update(|g| {
                                            g.lightbox.go_to_slide(i);
                                        });
                                    }
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="carousel-counter">
                    {move || gallery.with(|g| g.lightbox.carousel().map(|c| c.counter_label()).unwrap_or_default())}
                </span>
            </div>
        }
        .into_any()
    } else {
        let slide = slides.into_iter().next();
        let (src, alt) = slide.map_or_else(|| (String::new(), work.title.clone()), |s| (s.src, s.alt));
        view! {
            <div
                class="lightbox-image"
                class:zoomed=move || gallery.with(|g| g.lightbox.zoomed())
                on:click=move |_| {
                    gallery.update(|g| {
                        g.lightbox.toggle_zoom();
                    });
                }
            >
                <FallbackImg src alt/>
            </div>
        }
        .into_any()
    };

    let WorkItem { title, description, category, tags, link, .. } = work;

    view! {
        {media}
        <div class="lightbox-info">
            <span class="work-category" style:color=category.color()>{category.label().to_owned()}</span>
            <h3 class="lightbox-title">{title}</h3>
            <p class="lightbox-description">{description}</p>
            <div class="work-tags">
                {tags.into_iter().map(|tag| view! { <span class="work-tag">{tag}</span> }).collect_view()}
            </div>
            {link
                .map(|href| {
                    view! {
                        <a class="btn btn-primary lightbox-link" href=href target="_blank" rel="noopener">
                            "Open project ↗"
                        </a>
                    }
                })}
        </div>
    }
}
