use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Registers an `IntersectionObserver` over `targets` against the viewport.
///
/// The browser invokes `on_entry` once per reported entry, both on every
/// intersection change and once immediately after registration. The observer
/// handle is passed back in so one-shot controllers can unobserve a target
/// from inside their own transition. The wrapped closure is forgotten: every
/// observer on this page lives as long as the document does.
pub fn observe_all<F>(
    targets: &[Element],
    threshold: f64,
    root_margin: &str,
    mut on_entry: F,
) -> IntersectionObserver
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .expect("failed to construct IntersectionObserver");

    for target in targets {
        observer.observe(target);
    }
    callback.forget();
    observer
}

/// Resolves a selector to every matching element, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = document
        .query_selector_all(selector)
        .expect("invalid selector");
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
