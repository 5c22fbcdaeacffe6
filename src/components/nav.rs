use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::observe;

const NAV_LINK_CLASS: &str = "nav__link";

/// Delegation filter: only clicks whose target itself carries the link
/// marker class trigger smooth scrolling, not arbitrary clicks bubbling up
/// from the container.
pub fn is_nav_link(class_attr: &str) -> bool {
    class_attr.split_whitespace().any(|c| c == NAV_LINK_CLASS)
}

/// Document overflow value for a given mobile-nav state. Scroll-lock is on
/// exactly while the nav panel is open.
pub fn scroll_overflow(nav_open: bool) -> &'static str {
    if nav_open {
        "hidden"
    } else {
        "visible"
    }
}

/// Animates the viewport to the first element matching `selector`. An href
/// that resolves to nothing is logged and otherwise ignored.
pub fn smooth_scroll_to(selector: &str) {
    let document = web_sys::window()
        .expect("no window")
        .document()
        .expect("no document");
    match document.query_selector(selector).ok().flatten() {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("scroll target {selector} not found"),
    }
}

fn apply_scroll_lock(nav_open: bool) {
    let root: HtmlElement = web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
        .document_element()
        .expect("no root element")
        .dyn_into()
        .expect("root element is not an HtmlElement");
    let _ = root
        .style()
        .set_property("overflow", scroll_overflow(nav_open));
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let nav_open = use_state(|| false);
    let nav_ref = use_node_ref();

    // Sticky: observe the header sentinel, with the nav's own rendered
    // height as a negative margin so the bar attaches one nav-height before
    // the header's bottom edge leaves the viewport.
    {
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window()
                    .expect("no window")
                    .document()
                    .expect("no document");
                let nav: Element = nav_ref.cast().expect("nav not mounted");
                let header = document
                    .query_selector(".header")
                    .expect("invalid selector")
                    .expect("header element missing");
                let nav_height = nav.get_bounding_client_rect().height();

                observe::observe_all(
                    &[header],
                    0.0,
                    &format!("-{nav_height}px"),
                    move |entry, _| {
                        let _ = if entry.is_intersecting() {
                            nav.class_list().remove_1("sticky")
                        } else {
                            nav.class_list().add_1("sticky")
                        };
                    },
                );
                || ()
            },
            (),
        );
    }

    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_: MouseEvent| {
            let open = !*nav_open;
            nav_open.set(open);
            apply_scroll_lock(open);
        })
    };

    // One delegated handler on the links panel: smooth-scroll when the click
    // landed on a nav link, and unconditionally close the mobile panel.
    let on_links_click = {
        let nav_open = nav_open.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                if is_nav_link(&target.class_name()) {
                    e.prevent_default();
                    if let Some(href) = target.get_attribute("href") {
                        smooth_scroll_to(&href);
                    }
                }
            }
            if *nav_open {
                nav_open.set(false);
            }
            apply_scroll_lock(false);
        })
    };

    html! {
        <nav class="nav" ref={nav_ref}>
            <a class="nav__logo" href="#">{"meridian"}</a>
            <button class="nav__toggle" onclick={toggle_nav}>
                <span></span>
                <span></span>
                <span></span>
            </button>
            <ul
                class={classes!("nav__links", (*nav_open).then(|| "nav__open"))}
                onclick={on_links_click}
            >
                <li class="nav__item">
                    <a class="nav__link" href="#section--1">{"Features"}</a>
                </li>
                <li class="nav__item">
                    <a class="nav__link" href="#section--2">{"How it works"}</a>
                </li>
                <li class="nav__item">
                    <a class="nav__link" href="#section--3">{"Testimonials"}</a>
                </li>
                <li class="nav__item">
                    <a class="nav__link" href="#section--4">{"Get started"}</a>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_class_matches_whole_tokens_only() {
        assert!(is_nav_link("nav__link"));
        assert!(is_nav_link("nav__link nav__link--btn"));
        assert!(is_nav_link("some-other nav__link"));
        assert!(!is_nav_link("nav__links"));
        assert!(!is_nav_link("nav__item"));
        assert!(!is_nav_link(""));
    }

    #[test]
    fn scroll_lock_mirrors_nav_state() {
        assert_eq!(scroll_overflow(true), "hidden");
        assert_eq!(scroll_overflow(false), "visible");
    }
}
