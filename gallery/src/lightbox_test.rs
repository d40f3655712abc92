use super::*;
use crate::work::Category;

fn work(id: i64, category: &str, images: usize) -> WorkItem {
    WorkItem {
        id: WorkId::Num(id),
        title: format!("Work {id}"),
        description: String::new(),
        category: Category::from(category),
        image: format!("images/{id}-0.png"),
        images: (images > 0).then(|| (0..images).map(|i| format!("images/{id}-{i}.png")).collect()),
        tags: Vec::new(),
        link: None,
    }
}

fn list() -> Vec<WorkItem> {
    vec![work(10, "design", 0), work(11, "design", 3), work(12, "reels", 2), work(13, "youtube", 1)]
}

fn opened(id: i64, filtered: &[WorkItem]) -> Lightbox {
    let mut lightbox = Lightbox::new();
    lightbox.open(&WorkId::Num(id), filtered).unwrap();
    lightbox
}

// =============================================================
// open
// =============================================================

#[test]
fn open_stores_filtered_position_not_id() {
    let filtered = list();
    let lightbox = opened(12, &filtered);
    assert_eq!(lightbox.open_index(), Some(2));
    assert_eq!(lightbox.current(&filtered).map(|w| w.id.clone()), Some(WorkId::Num(12)));
}

#[test]
fn open_unknown_id_is_noop() {
    let mut lightbox = Lightbox::new();
    assert_eq!(lightbox.open(&WorkId::Num(99), &list()), None);
    assert_eq!(lightbox.state(), LightboxState::Closed);
}

#[test]
fn open_sets_carousel_to_first_slide() {
    let filtered = list();
    let lightbox = opened(11, &filtered);
    let carousel = lightbox.carousel().unwrap();
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.len(), 3);
}

#[test]
fn open_single_image_list_has_no_carousel() {
    let filtered = list();
    let lightbox = opened(13, &filtered);
    assert!(lightbox.carousel().is_none());
}

#[test]
fn open_bumps_session() {
    let filtered = list();
    let mut lightbox = Lightbox::new();
    let first = lightbox.open(&WorkId::Num(10), &filtered).unwrap();
    let second = lightbox.open(&WorkId::Num(11), &filtered).unwrap();
    assert!(second > first);
}

// =============================================================
// navigate
// =============================================================

#[test]
fn navigate_wraps_forward_and_backward() {
    let filtered = list();
    let mut lightbox = opened(13, &filtered);
    lightbox.navigate(Direction::Next, &filtered);
    assert_eq!(lightbox.open_index(), Some(0));
    lightbox.navigate(Direction::Prev, &filtered);
    assert_eq!(lightbox.open_index(), Some(3));
}

#[test]
fn navigate_n_times_returns_to_start() {
    let filtered = list();
    for start in [10, 11, 12, 13] {
        let mut lightbox = opened(start, &filtered);
        let origin = lightbox.open_index();
        for _ in 0..filtered.len() {
            lightbox.navigate(Direction::Next, &filtered);
        }
        assert_eq!(lightbox.open_index(), origin);
    }
}

#[test]
fn navigate_is_a_bijection_on_positions() {
    let filtered = list();
    let mut targets: Vec<usize> = (0..filtered.len())
        .map(|i| {
            let mut lightbox = opened(10 + i64::try_from(i).unwrap(), &filtered);
            lightbox.navigate(Direction::Next, &filtered);
            lightbox.open_index().unwrap()
        })
        .collect();
    targets.sort_unstable();
    assert_eq!(targets, vec![0, 1, 2, 3]);
}

#[test]
fn navigate_resets_carousel_and_zoom() {
    let filtered = list();
    let mut lightbox = opened(11, &filtered);
    lightbox.step_carousel(Direction::Next);
    lightbox.step_carousel(Direction::Next);
    assert_eq!(lightbox.carousel().unwrap().index(), 2);

    lightbox.navigate(Direction::Next, &filtered);
    assert_eq!(lightbox.carousel().unwrap().index(), 0);
    lightbox.navigate(Direction::Prev, &filtered);
    assert_eq!(lightbox.carousel().unwrap().index(), 0);
}

#[test]
fn navigate_records_direction() {
    let filtered = list();
    let mut lightbox = opened(10, &filtered);
    assert_eq!(lightbox.view().unwrap().last_direction, None);
    assert_eq!(lightbox.navigate(Direction::Prev, &filtered), Some(LightboxEffect::Navigated(Direction::Prev)));
    assert_eq!(lightbox.view().unwrap().last_direction, Some(Direction::Prev));
}

#[test]
fn navigate_single_item_is_noop() {
    let filtered = vec![work(2, "reels", 0)];
    let mut lightbox = opened(2, &filtered);
    assert_eq!(lightbox.open_index(), Some(0));
    assert_eq!(lightbox.navigate(Direction::Next, &filtered), None);
    assert_eq!(lightbox.open_index(), Some(0));
    assert!(!Lightbox::can_navigate(&filtered));
}

#[test]
fn navigate_when_closed_is_noop() {
    let mut lightbox = Lightbox::new();
    assert_eq!(lightbox.navigate(Direction::Next, &list()), None);
}

// =============================================================
// Carousel and zoom
// =============================================================

#[test]
fn carousel_steps_do_not_move_outer_index() {
    let filtered = list();
    let mut lightbox = opened(12, &filtered);
    lightbox.step_carousel(Direction::Next);
    lightbox.step_carousel(Direction::Next);
    assert_eq!(lightbox.open_index(), Some(2));
    assert_eq!(lightbox.carousel().unwrap().index(), 0);
    lightbox.go_to_slide(1);
    assert_eq!(lightbox.carousel().unwrap().counter_label(), "2/2");
}

#[test]
fn carousel_step_on_single_image_is_noop() {
    let filtered = list();
    let mut lightbox = opened(10, &filtered);
    assert_eq!(lightbox.step_carousel(Direction::Next), None);
}

#[test]
fn zoom_toggles_only_for_single_image() {
    let filtered = list();
    let mut single = opened(10, &filtered);
    assert_eq!(single.toggle_zoom(), Some(true));
    assert!(single.zoomed());
    assert_eq!(single.toggle_zoom(), Some(false));

    let mut multi = opened(11, &filtered);
    assert_eq!(multi.toggle_zoom(), None);
    assert!(!multi.zoomed());
}

#[test]
fn zoom_does_not_affect_navigation_index() {
    let filtered = list();
    let mut lightbox = opened(13, &filtered);
    lightbox.toggle_zoom();
    assert_eq!(lightbox.open_index(), Some(3));
    lightbox.navigate(Direction::Next, &filtered);
    assert!(!lightbox.zoomed());
}

// =============================================================
// close
// =============================================================

#[test]
fn close_then_finish_reaches_closed() {
    let filtered = list();
    let mut lightbox = opened(10, &filtered);
    let session = lightbox.close().unwrap();
    assert!(lightbox.is_mounted());
    assert!(!lightbox.is_open());
    assert!(lightbox.finish_close(session));
    assert_eq!(lightbox.state(), LightboxState::Closed);
}

#[test]
fn stale_finish_close_does_not_tear_down_reopened_lightbox() {
    let filtered = list();
    let mut lightbox = opened(10, &filtered);
    let old = lightbox.close().unwrap();
    lightbox.open(&WorkId::Num(12), &filtered).unwrap();
    assert!(!lightbox.finish_close(old));
    assert!(lightbox.is_open());
    assert_eq!(lightbox.open_index(), Some(2));
}

#[test]
fn closing_keeps_showing_last_work_until_finished() {
    let filtered = list();
    let mut lightbox = opened(12, &filtered);
    lightbox.step_carousel(Direction::Next);
    let session = lightbox.close().unwrap();
    assert_eq!(lightbox.open_index(), None);
    assert_eq!(lightbox.carousel().map(|c| c.counter_label()).as_deref(), Some("2/2"));
    assert_eq!(lightbox.step_carousel(Direction::Next), None);
    assert_eq!(lightbox.current(&filtered).map(|w| w.id.clone()), Some(WorkId::Num(12)));
    assert_eq!(lightbox.counter_label(&filtered).as_deref(), Some("3 / 4"));

    lightbox.finish_close(session);
    assert_eq!(lightbox.current(&filtered), None);
    assert_eq!(lightbox.counter_label(&filtered), None);
}

#[test]
fn close_when_closed_is_noop() {
    let mut lightbox = Lightbox::new();
    assert_eq!(lightbox.close(), None);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn keys_drive_navigation_and_close() {
    let filtered = list();
    let mut lightbox = opened(10, &filtered);
    lightbox.handle_key("ArrowRight", &filtered);
    assert_eq!(lightbox.open_index(), Some(1));
    lightbox.handle_key("ArrowLeft", &filtered);
    lightbox.handle_key("ArrowLeft", &filtered);
    assert_eq!(lightbox.open_index(), Some(3));
    let effect = lightbox.handle_key("Escape", &filtered);
    assert_eq!(effect, Some(LightboxEffect::Closing(lightbox.session())));
}

#[test]
fn keys_are_ignored_unless_open() {
    let filtered = list();
    let mut lightbox = Lightbox::new();
    assert_eq!(lightbox.handle_key("ArrowRight", &filtered), None);
    assert_eq!(lightbox.state(), LightboxState::Closed);

    let mut closing = opened(10, &filtered);
    closing.close();
    assert_eq!(closing.handle_key("ArrowRight", &filtered), None);
    assert_eq!(closing.handle_key("Escape", &filtered), None);
}

// =============================================================
// Swipes
// =============================================================

#[test]
fn swipe_in_carousel_region_moves_only_the_carousel() {
    let filtered = list();
    let mut lightbox = opened(11, &filtered);
    let effect = lightbox.handle_swipe(HitRegion::Carousel, Direction::Next, &filtered);
    assert_eq!(effect, Some(LightboxEffect::SlideChanged));
    assert_eq!(lightbox.open_index(), Some(1));
    assert_eq!(lightbox.carousel().unwrap().index(), 1);
}

#[test]
fn swipe_in_body_navigates() {
    let filtered = list();
    let mut lightbox = opened(11, &filtered);
    lightbox.handle_swipe(HitRegion::Body, Direction::Prev, &filtered);
    assert_eq!(lightbox.open_index(), Some(0));
}

#[test]
fn carousel_region_without_carousel_navigates() {
    let filtered = list();
    let mut lightbox = opened(10, &filtered);
    lightbox.handle_swipe(HitRegion::Carousel, Direction::Next, &filtered);
    assert_eq!(lightbox.open_index(), Some(1));
}

// =============================================================
// Labels
// =============================================================

#[test]
fn counter_label_is_one_based() {
    let filtered = list();
    let lightbox = opened(12, &filtered);
    assert_eq!(lightbox.counter_label(&filtered).as_deref(), Some("3 / 4"));
    assert_eq!(Lightbox::new().counter_label(&filtered), None);
}
