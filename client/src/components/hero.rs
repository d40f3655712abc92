//! Hero section: staged title reveal, parallax shapes and magnetic buttons.

use gallery::motion;
use leptos::html::A;
use leptos::prelude::*;

use crate::components::site_header::TELEGRAM_URL;
use crate::state::ui::UiState;
use crate::util::{dom, timers};

const TITLE_LINES: [&str; 3] = ["Design that sells,", "video that holds attention,", "sites that work"];

/// Decorative shapes, `(class, parallax speed)`.
const SHAPES: [(&str, f64); 3] = [("shape shape--1", 0.1), ("shape shape--2", 0.25), ("shape shape--3", 0.4)];

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section id="home" class="hero">
            <div class="hero__shapes" aria-hidden="true">
                {SHAPES
                    .iter()
                    .map(|&(class, speed)| {
                        view! {
                            <div
                                class=class
                                style:transform=move || {
                                    format!("translateY({:.1}px)", motion::parallax_offset(ui.with(|u| u.scroll_y), speed))
                                }
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="container hero__content">
                <p class="hero__eyebrow">"Marketplace cards · Reels · YouTube · Web"</p>
                <h1 class="hero__title">
                    {TITLE_LINES.iter().enumerate().map(|(i, line)| view! { <TitleLine index=i text=line/> }).collect_view()}
                </h1>
                <p class="hero__subtitle">
                    "Infographics for Wildberries and Ozon, short-form and long-form editing, and fast landing pages."
                </p>
                <div class="hero__actions">
                    <MagneticLink href="#works" class="btn btn-primary">"See works"</MagneticLink>
                    <MagneticLink href=TELEGRAM_URL class="btn btn-outline telegram-link" external=true>
                        "Write in Telegram"
                    </MagneticLink>
                </div>
            </div>
        </section>
    }
}

/// One title line, revealed after its staggered delay.
#[component]
fn TitleLine(index: usize, text: &'static str) -> impl IntoView {
    let revealed = RwSignal::new(false);
    timers::after(motion::title_reveal_delay_ms(index), move || revealed.set(true));
    view! {
        <span class="hero__line" class:revealed=move || revealed.get()>
            {text}
        </span>
    }
}

/// Button-styled link that leans toward the pointer while hovered.
#[component]
fn MagneticLink(
    href: &'static str,
    class: &'static str,
    #[prop(optional)] external: bool,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<A>::new();
    let offset = RwSignal::new((0.0_f64, 0.0_f64));

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = node.get() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left();
            let y = f64::from(ev.client_y()) - rect.top();
            offset.set(motion::magnetic_offset(rect.width(), rect.height(), x, y));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if !external && dom::scroll_to_anchor(href) {
            ev.prevent_default();
        }
    };

    view! {
        <a
            node_ref=node
            href=href
            class=format!("{class} magnetic")
            target=external.then_some("_blank")
            rel=external.then_some("noopener")
            style:transform=move || {
                let (x, y) = offset.get();
                format!("translate({x:.1}px, {y:.1}px)")
            }
            on:mousemove=on_move
            on:mouseleave=move |_| offset.set((0.0, 0.0))
            on:click=on_click
        >
            {children()}
        </a>
    }
}
