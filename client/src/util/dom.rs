//! Thin `web-sys` wrappers used by components.
//!
//! Everything that reads layout or touches `document` directly goes through
//! here, so components stay declarative and SSR gets neutral values.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use gallery::card::ClickTarget;

/// Window scroll measurements: `(scroll_y, document_height, viewport_height)`.
pub fn scroll_metrics() -> Option<(f64, f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let scroll_y = window.scroll_y().ok()?;
        let viewport = window.inner_height().ok()?.as_f64()?;
        let document_height = window.document()?.document_element()?.scroll_height();
        Some((scroll_y, f64::from(document_height), viewport))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Viewport height in CSS pixels.
pub fn viewport_height() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_height().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Lock or restore page scrolling via `body` overflow.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if locked { style.set_property("overflow", "hidden") } else { style.remove_property("overflow").map(|_| ()) };
        if result.is_err() {
            log::warn!("body overflow could not be updated");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Element id targeted by an in-page anchor `href`, e.g. `#works` → `works`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scroll to the section an in-page `href` points at.
///
/// Returns `false` when `href` is not an in-page anchor or its target is missing.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_id(href) else {
        return false;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(target) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Open `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                log::warn!("could not open {url}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Ask for a line of text with the native prompt. Blank answers are `None`.
pub fn prompt(message: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let answer = web_sys::window()?.prompt_with_message(message).ok().flatten()?;
        (!answer.is_empty()).then_some(answer)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        None
    }
}

/// Classify what a card click landed on from its `closest` matches.
pub fn click_target(in_carousel_control: bool, in_external_link: bool) -> ClickTarget {
    if in_external_link {
        ClickTarget::ExternalLink
    } else if in_carousel_control {
        ClickTarget::CarouselControl
    } else {
        ClickTarget::Body
    }
}

/// Classify a click event on a card by walking up from its target.
#[cfg(feature = "hydrate")]
pub fn classify_card_click(ev: &web_sys::MouseEvent) -> ClickTarget {
    use gallery::card::{CAROUSEL_CONTROL_SELECTOR, EXTERNAL_LINK_SELECTOR};
    use wasm_bindgen::JsCast;

    let Some(element) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return ClickTarget::Body;
    };
    let inside = |selector: &str| element.closest(selector).ok().flatten().is_some();
    click_target(inside(CAROUSEL_CONTROL_SELECTOR), inside(EXTERNAL_LINK_SELECTOR))
}

/// Horizontal position of the first changed touch.
#[cfg(feature = "hydrate")]
pub fn touch_x(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| f64::from(t.screen_x()))
}

/// Top edge of an element relative to the viewport.
#[cfg(feature = "hydrate")]
pub fn element_top(element: &web_sys::Element) -> f64 {
    element.get_bounding_client_rect().top()
}
