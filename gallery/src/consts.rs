//! Shared numeric constants for the gallery crate.

// ── Grid ────────────────────────────────────────────────────────

/// Cards revealed per "load more" page.
pub const PAGE_SIZE: usize = 12;

/// Characters of the description shown on a card before truncation.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 80;

/// Delay between successive card entrance animations.
pub const CARD_STAGGER_MS: u32 = 80;

/// Fade-out time for the old grid before a filter change re-renders.
pub const FILTER_FADE_MS: u32 = 200;

/// Fallback color for categories without a known style.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6366f1";

// ── Gestures ────────────────────────────────────────────────────

/// Horizontal swipe distance (px) that advances a carousel.
pub const CAROUSEL_SWIPE_THRESHOLD_PX: f64 = 40.0;

/// Horizontal swipe distance (px) that navigates the lightbox.
pub const LIGHTBOX_SWIPE_THRESHOLD_PX: f64 = 60.0;

// ── Lightbox timings ────────────────────────────────────────────

/// Slide-out duration before the next item renders.
pub const LIGHTBOX_SWAP_OUT_MS: u32 = 150;

/// Slide-in duration of the newly rendered item.
pub const LIGHTBOX_SWAP_IN_MS: u32 = 300;

/// Offset (px) of the directional slide transition.
pub const LIGHTBOX_SWAP_OFFSET_PX: f64 = 30.0;

/// Close transition; the overlay is removed afterwards.
pub const LIGHTBOX_CLOSE_MS: u32 = 400;

// ── Page motion ─────────────────────────────────────────────────

/// Preloader stays visible this long after mount.
pub const PRELOADER_HIDE_MS: u32 = 800;

/// Scroll offset (px) past which the header switches to its compact style.
pub const HEADER_SCROLLED_PX: f64 = 50.0;

/// Elements reveal once their top is this far (px) inside the viewport.
pub const REVEAL_MARGIN_PX: f64 = 100.0;

/// Frame interval used by timer-driven animations.
pub const FRAME_MS: u32 = 16;

/// Duration of the stats count-up.
pub const COUNT_UP_MS: u32 = 2000;

/// Per-frame easing factor of the cursor dot.
pub const CURSOR_EASE: f64 = 0.2;

/// Per-frame easing factor of the trailing cursor ring.
pub const FOLLOWER_EASE: f64 = 0.1;

/// Divisor converting pointer offset (px) to card tilt (degrees).
pub const TILT_DIVISOR: f64 = 25.0;

/// Fraction of the pointer offset applied to magnetic buttons.
pub const MAGNETIC_STRENGTH: f64 = 0.3;

/// Delay before the first hero title line reveals.
pub const TITLE_REVEAL_BASE_MS: u32 = 300;

/// Additional delay per hero title line.
pub const TITLE_REVEAL_STEP_MS: u32 = 200;

// ── Notifications ───────────────────────────────────────────────

/// Toasts hide automatically after this long.
pub const NOTICE_HIDE_MS: u32 = 5000;
