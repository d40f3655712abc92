//! Works section: filter buttons, the paginated card grid and "load more".

#[cfg(test)]
#[path = "works_section_test.rs"]
mod works_section_test;

use gallery::card::CardModel;
use gallery::consts::FILTER_FADE_MS;
use gallery::motion::stagger_delay_ms;
use gallery::view::Filter;
use gallery::work::{Category, WorkId};
use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::work_card::WorkCard;
use crate::state::gallery::GalleryState;
use crate::util::timers;

/// Filter buttons, `all` first.
fn filter_options() -> Vec<(Filter, String)> {
    std::iter::once((Filter::All, "All".to_owned()))
        .chain(Category::KNOWN.into_iter().map(|c| {
            let label = c.label().to_owned();
            (Filter::Category(c), label)
        }))
        .collect()
}

/// Grid entries keyed by `(grid epoch, work id)` so a rebuilt grid replays
/// the entrance stagger while "load more" keeps existing cards. Empty while
/// the first load is in flight.
fn grid_cards(state: &GalleryState) -> Vec<(u64, usize, CardModel)> {
    if state.loading {
        return Vec::new();
    }
    let page_size = state.view.page_size();
    state
        .view
        .visible()
        .iter()
        .enumerate()
        .map(|(i, work)| (state.grid_epoch, i % page_size, CardModel::from_item(work)))
        .collect()
}

/// `<For>` key for a grid entry.
fn grid_key(entry: &(u64, usize, CardModel)) -> (u64, WorkId) {
    (entry.0, entry.2.id.clone())
}

#[component]
pub fn WorksSection() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    let select = move |filter: Filter| {
        let mut started = false;
        gallery.update(|g| started = g.request_filter(filter));
        if started {
            timers::after(FILTER_FADE_MS, move || {
                gallery.update(|g| {
                    g.commit_filter();
                });
            });
        }
    };

    view! {
        <section id="works" class="works">
            <div class="container">
                <Reveal class="section-header">
                    <h2 class="section-title">"Works"</h2>
                    <p class="section-subtitle">"Selected projects across design, video and development"</p>
                </Reveal>
                <div class="works-filter" role="tablist">
                    {filter_options()
                        .into_iter()
                        .map(|(filter, label)| {
                            let value = filter.as_str().to_owned();
                            let is_active = {
                                let filter = filter.clone();
                                move || gallery.with(|g| g.target_filter() == &filter)
                            };
                            view! {
                                <button
                                    class="filter-btn"
                                    class:active=is_active
                                    data-filter=value
                                    on:click=move |_| select(filter.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || gallery.with(|g| g.loading)>
                    <div class="works-loading">
                        <span class="loading-dots"><span></span><span></span><span></span></span>
                    </div>
                </Show>

                <Show when=move || gallery.with(|g| !g.loading && g.view.is_empty())>
                    <div class="works-empty">
                        <p>"No works in this category yet."</p>
                    </div>
                </Show>

                <div class="works-grid" class:fading=move || gallery.with(|g| g.fading)>
                    <For
                        each=move || gallery.with(grid_cards)
                        key=grid_key
                        children=move |(_, position, card)| {
                            view! { <WorkCard card delay_ms=stagger_delay_ms(position)/> }
                        }
                    />
                </div>

                <Show when=move || gallery.with(|g| g.view.has_more())>
                    <div class="works-more">
                        <button class="btn btn-outline load-more" on:click=move |_| gallery.update(GalleryState::load_more)>
                            "Load more"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}
