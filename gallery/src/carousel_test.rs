use super::*;
use crate::work::{Category, WorkId};

fn work_with_images(images: Option<Vec<&str>>) -> WorkItem {
    WorkItem {
        id: WorkId::Num(1),
        title: "t".to_owned(),
        description: "d".to_owned(),
        category: Category::Design,
        image: "main.png".to_owned(),
        images: images.map(|v| v.into_iter().map(str::to_owned).collect()),
        tags: Vec::new(),
        link: None,
    }
}

#[test]
fn carousel_requires_two_slides() {
    assert!(Carousel::new(0).is_none());
    assert!(Carousel::new(1).is_none());
    assert_eq!(Carousel::new(2).map(|c| c.len()), Some(2));
}

#[test]
fn carousel_for_single_image_list_is_none() {
    assert!(Carousel::for_item(&work_with_images(Some(vec!["a.png"]))).is_none());
    assert!(Carousel::for_item(&work_with_images(None)).is_none());
}

#[test]
fn carousel_for_multi_image_work_starts_at_zero() {
    let carousel = Carousel::for_item(&work_with_images(Some(vec!["a", "b", "c"]))).unwrap();
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.len(), 3);
    assert_eq!(carousel.counter_label(), "1/3");
}

#[test]
fn carousel_step_wraps_both_ways() {
    let mut carousel = Carousel::new(3).unwrap();
    carousel.step(Direction::Prev);
    assert_eq!(carousel.index(), 2);
    carousel.step(Direction::Next);
    assert_eq!(carousel.index(), 0);
}

#[test]
fn carousel_full_cycle_returns_to_start() {
    let mut carousel = Carousel::new(5).unwrap();
    carousel.go_to(3);
    for _ in 0..5 {
        carousel.step(Direction::Next);
    }
    assert_eq!(carousel.index(), 3);
}

#[test]
fn carousel_go_to_marks_active_dot() {
    let mut carousel = Carousel::new(4).unwrap();
    carousel.go_to(2);
    assert!(carousel.is_active(2));
    assert!(!carousel.is_active(0));
    assert_eq!(carousel.counter_label(), "3/4");
    carousel.go_to(9);
    assert_eq!(carousel.index(), 1);
}
