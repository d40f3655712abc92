//! Portfolio gallery state and projection engine.
//!
//! This crate holds every piece of the portfolio page that can be expressed
//! without a DOM: the work catalog and its fallback data, the filter and
//! pagination view, card projection, image carousels, the lightbox state
//! machine, input mapping (keys, swipes, click targets) and the small amount of
//! motion math behind the page's scroll and cursor effects. The `client` crate
//! owns rendering and wires browser events into these types.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`work`] | `WorkItem`, ids, categories and their label/color lookup |
//! | [`catalog`] | Loaded work list, fetch-or-fallback resolution, built-in demo works |
//! | [`view`] | Active filter, pagination and the filtered/visible slices |
//! | [`card`] | Pure card projection and click-target classification |
//! | [`carousel`] | Cyclic image index shared by cards and the lightbox |
//! | [`lightbox`] | Closed/Open/Closing state machine over the filtered list |
//! | [`input`] | Directions, keyboard commands, swipe tracking, hit regions |
//! | [`motion`] | Stagger, count-up, cursor easing, tilt, scroll math |
//! | [`forms`] | Contact and admin form models with validation |
//! | [`error`] | Load and form error types |
//! | [`consts`] | Shared numeric constants (page size, thresholds, timings) |

pub mod card;
pub mod carousel;
pub mod catalog;
pub mod consts;
pub mod error;
pub mod forms;
pub mod input;
pub mod lightbox;
pub mod motion;
pub mod view;
pub mod work;
