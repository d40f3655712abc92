use super::*;

#[test]
fn idle_swap_has_no_inline_style() {
    assert_eq!(swap_style(SwapPhase::Idle), "");
}

#[test]
fn swap_out_parks_content_on_the_incoming_side() {
    let next = swap_style(SwapPhase::Out(Direction::Next));
    assert!(next.contains("translateX(30px)"), "{next}");
    assert!(next.contains("opacity: 0"));
    let prev = swap_style(SwapPhase::Out(Direction::Prev));
    assert!(prev.contains("translateX(-30px)"), "{prev}");
}

#[test]
fn swap_in_animates_back_to_origin() {
    let style = swap_style(SwapPhase::In(Direction::Next));
    assert!(style.contains("translateX(0)"));
    assert!(style.contains("300ms"));
}

#[test]
fn carousel_swipes_use_the_shorter_threshold() {
    assert_eq!(swipe_threshold(HitRegion::Carousel), 40.0);
    assert_eq!(swipe_threshold(HitRegion::Body), 60.0);
}
