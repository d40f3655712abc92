use super::*;
use gallery::catalog::CatalogSource;
use gallery::work::Category;

fn work(id: i64, category: &str, images: usize) -> WorkItem {
    WorkItem {
        id: WorkId::Num(id),
        title: format!("Work {id}"),
        description: String::new(),
        category: Category::from(category),
        image: String::new(),
        images: (images > 0).then(|| (0..images).map(|i| format!("{id}-{i}.png")).collect()),
        tags: Vec::new(),
        link: None,
    }
}

fn loaded() -> GalleryState {
    let mut state = GalleryState::default();
    state.apply_load(Ok(vec![work(1, "design", 0), work(2, "reels", 2), work(3, "reels", 0), work(4, "youtube", 0)]));
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn default_state_is_loading_builtin_works() {
    let state = GalleryState::default();
    assert!(state.loading);
    assert_eq!(state.catalog.source(), CatalogSource::Builtin);
    assert_eq!(state.view.filtered().len(), state.catalog.len());
}

#[test]
fn successful_load_replaces_catalog() {
    let state = loaded();
    assert!(!state.loading);
    assert_eq!(state.catalog.source(), CatalogSource::Remote);
    assert_eq!(state.fallback, None);
    assert_eq!(state.view.filtered().len(), 4);
}

#[test]
fn failed_load_keeps_builtin_and_records_reason() {
    let mut state = GalleryState::default();
    state.apply_load(Err(LoadError::Status(500)));
    assert!(!state.loading);
    assert_eq!(state.catalog.source(), CatalogSource::Builtin);
    assert_eq!(state.fallback, Some(LoadError::Status(500)));
}

#[test]
fn reload_keeps_filter_and_resets_page() {
    let mut state = loaded();
    state.set_filter(Filter::from("reels"));
    state.load_more();
    state.apply_load(Ok(vec![work(5, "reels", 0), work(6, "design", 0)]));
    assert_eq!(state.view.filter(), &Filter::from("reels"));
    assert_eq!(state.view.page(), 1);
    assert_eq!(state.view.filtered().len(), 1);
}

#[test]
fn reload_closes_open_lightbox() {
    let mut state = loaded();
    state.open_work(&WorkId::Num(2)).unwrap();
    state.apply_load(Ok(vec![work(9, "design", 0)]));
    assert!(!state.lightbox.is_open());
    assert!(state.closing_session().is_some());
}

// =============================================================
// Filter
// =============================================================

#[test]
fn set_filter_bumps_grid_epoch_once() {
    let mut state = loaded();
    let epoch = state.grid_epoch;
    assert!(state.set_filter(Filter::from("reels")));
    assert!(!state.set_filter(Filter::from("reels")));
    assert_eq!(state.grid_epoch, epoch + 1);
}

#[test]
fn last_filter_request_during_fade_wins() {
    let mut state = loaded();
    assert!(state.request_filter(Filter::from("reels")));
    assert!(state.fading);
    assert!(!state.request_filter(Filter::All));
    assert_eq!(state.target_filter(), &Filter::All);
    assert_eq!(state.view.filter(), &Filter::All);

    let epoch = state.grid_epoch;
    assert!(!state.commit_filter());
    assert!(!state.fading);
    assert_eq!(state.view.filter(), &Filter::All);
    assert_eq!(state.grid_epoch, epoch);
}

#[test]
fn filter_requests_apply_once_after_fade() {
    let mut state = loaded();
    assert!(state.request_filter(Filter::from("reels")));
    assert!(!state.request_filter(Filter::from("youtube")));
    assert!(!state.request_filter(Filter::from("youtube")));
    assert_eq!(state.view.filter(), &Filter::All);

    assert!(state.commit_filter());
    assert_eq!(state.view.filter(), &Filter::from("youtube"));
    assert_eq!(state.view.filtered().len(), 1);
    assert!(!state.commit_filter());
}

#[test]
fn reload_during_fade_applies_requested_filter() {
    let mut state = loaded();
    state.request_filter(Filter::from("reels"));
    state.apply_load(Ok(vec![work(5, "reels", 0), work(6, "design", 0)]));
    assert!(!state.fading);
    assert_eq!(state.pending_filter, None);
    assert_eq!(state.view.filter(), &Filter::from("reels"));
    assert_eq!(state.view.filtered().len(), 1);
}

// =============================================================
// Lightbox over the filtered list
// =============================================================

#[test]
fn reels_filter_navigation_wraps_between_two_works() {
    let mut state = loaded();
    state.set_filter(Filter::from("reels"));
    state.open_work(&WorkId::Num(3)).unwrap();
    assert_eq!(state.counter_label().as_deref(), Some("2 / 2"));
    state.navigate(Direction::Next);
    assert_eq!(state.current_work().map(|w| w.id.clone()), Some(WorkId::Num(2)));
    assert!(state.lightbox.carousel().is_some());
}

#[test]
fn work_outside_filter_cannot_be_opened() {
    let mut state = loaded();
    state.set_filter(Filter::from("reels"));
    assert_eq!(state.open_work(&WorkId::Num(1)), None);
}

#[test]
fn escape_starts_close_and_reports_session() {
    let mut state = loaded();
    let session = state.open_work(&WorkId::Num(1)).unwrap();
    assert_eq!(state.handle_key("Escape"), Some(LightboxEffect::Closing(session)));
    assert_eq!(state.closing_session(), Some(session));
}

#[test]
fn closing_lightbox_keeps_showing_work_and_counter() {
    let mut state = loaded();
    let session = state.open_work(&WorkId::Num(2)).unwrap();
    state.handle_key("Escape");
    assert_eq!(state.current_work().map(|w| w.id.clone()), Some(WorkId::Num(2)));
    assert_eq!(state.counter_label().as_deref(), Some("2 / 4"));
    assert!(state.lightbox.finish_close(session));
    assert_eq!(state.current_work(), None);
}

#[test]
fn swipe_in_carousel_keeps_work() {
    let mut state = loaded();
    state.open_work(&WorkId::Num(2)).unwrap();
    state.handle_swipe(HitRegion::Carousel, Direction::Next);
    assert_eq!(state.current_work().map(|w| w.id.clone()), Some(WorkId::Num(2)));
    assert!(state.can_navigate());
}
