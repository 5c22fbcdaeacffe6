use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlImageElement, MouseEvent};
use yew::prelude::*;

use crate::components::cookie_notice::CookieNotice;
use crate::components::modal::Modal;
use crate::components::nav::{smooth_scroll_to, Nav};
use crate::components::observe;
use crate::components::reveal::{Reveal, LAZY_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::components::slider::Slider;

/// Marks every content section hidden and reveals each one the first time
/// enough of it scrolls into the viewport. One observer per section, so the
/// one-shot state lives in the section's own callback and deregistration
/// happens right where the transition fires.
fn wire_section_reveal(document: &web_sys::Document) {
    let sections = observe::query_all(document, ".section");
    info!("observing {} sections for reveal", sections.len());
    for section in sections {
        let _ = section.class_list().add_1("section--hidden");
        let mut state = Reveal::Hidden;
        let sec = section.clone();
        observe::observe_all(&[section], REVEAL_THRESHOLD, "0px", move |entry, observer| {
            if state.on_intersection(entry.is_intersecting()) {
                let _ = sec.class_list().remove_1("section--hidden");
                observer.unobserve(&sec);
            }
        });
    }
}

/// Swaps each deferred image's staged source in shortly before it scrolls
/// into view; the blur placeholder only comes off once the real bytes have
/// loaded.
fn wire_lazy_images(document: &web_sys::Document) {
    let images = observe::query_all(document, "img[data-src]");
    info!("observing {} lazy images", images.len());
    observe::observe_all(&images, 0.0, LAZY_ROOT_MARGIN, |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let img: HtmlImageElement = entry.target().unchecked_into();
        if let Some(src) = img.dataset().get("src") {
            img.set_src(&src);
        }

        let loaded = img.clone();
        let on_load = Closure::wrap(Box::new(move || {
            let _ = loaded.class_list().remove_1("lazy-img");
        }) as Box<dyn FnMut()>);
        let opts = AddEventListenerOptions::new();
        opts.set_once(true);
        img.add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            on_load.as_ref().unchecked_ref(),
            &opts,
        )
        .expect("failed to attach load listener");
        on_load.forget();

        observer.unobserve(&img);
    });
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);

    // Observer wiring runs once, against the committed DOM.
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window()
                .expect("no window")
                .document()
                .expect("no document");
            wire_section_reveal(&document);
            wire_lazy_images(&document);
            || ()
        },
        (),
    );

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            modal_open.set(true);
        })
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };
    let scroll_to_features =
        Callback::from(move |_: MouseEvent| smooth_scroll_to("#section--1"));

    html! {
        <div class="landing-page">
            <header class="header">
                <Nav />
                <div class="header__title">
                    <h1>
                        {"Banking without "}
                        <span class="highlight">{"the noise"}</span>
                    </h1>
                    <h4>{"One account. One card. A fee page short enough to read."}</h4>
                    <div class="header__cta-group">
                        <a class="btn--show-modal btn" href="#" onclick={open_modal.clone()}>
                            {"Open account"}
                        </a>
                        <button class="btn--scroll-to btn--text" onclick={scroll_to_features}>
                            {"Learn more ↓"}
                        </button>
                    </div>
                    <img
                        src="/assets/hero-lazy.jpg"
                        data-src="/assets/hero.jpg"
                        alt="Minimalist items on a desk"
                        class="header__img lazy-img"
                    />
                </div>
            </header>

            <section class="section" id="section--1">
                <div class="section__title">
                    <h2 class="section__description">{"Features"}</h2>
                    <h3 class="section__header">
                        {"Everything you need in a modern bank and nothing you don't."}
                    </h3>
                </div>
                <div class="features">
                    <img
                        src="/assets/digital-lazy.jpg"
                        data-src="/assets/digital.jpg"
                        alt="Computer showing the Meridian dashboard"
                        class="features__img lazy-img"
                    />
                    <div class="features__feature">
                        <h5 class="features__header">{"100% digital bank"}</h5>
                        <p>
                            {"Open your account from your phone and run it from \
                              anywhere. No branches, no queues, no opening hours."}
                        </p>
                    </div>
                    <div class="features__feature">
                        <h5 class="features__header">{"Instant transfers, zero fees"}</h5>
                        <p>
                            {"Move money the moment you decide to. Transfers inside \
                              Meridian settle in seconds and cost nothing."}
                        </p>
                    </div>
                    <img
                        src="/assets/card-lazy.jpg"
                        data-src="/assets/card.jpg"
                        alt="The Meridian debit card"
                        class="features__img lazy-img"
                    />
                </div>
            </section>

            <section class="section" id="section--2">
                <div class="section__title">
                    <h2 class="section__description">{"How it works"}</h2>
                    <h3 class="section__header">
                        {"Three steps between you and a calmer account."}
                    </h3>
                </div>
                <div class="steps">
                    <div class="step">
                        <span class="step__number">{"01"}</span>
                        <h5>{"Tell us about yourself"}</h5>
                        <p>{"Five fields and an ID photo. That is the whole form."}</p>
                    </div>
                    <div class="step">
                        <span class="step__number">{"02"}</span>
                        <h5>{"Top up from any bank"}</h5>
                        <p>{"Pull your balance over with a single transfer reference."}</p>
                    </div>
                    <div class="step">
                        <span class="step__number">{"03"}</span>
                        <h5>{"Spend, save, relax"}</h5>
                        <p>{"Your card ships the same week. The app stays quiet."}</p>
                    </div>
                </div>
            </section>

            <section class="section" id="section--3">
                <div class="section__title">
                    <h2 class="section__description">{"Not sure yet?"}</h2>
                    <h3 class="section__header">
                        {"Millions are already making their lives simpler."}
                    </h3>
                </div>
                <Slider />
            </section>

            <section class="section section--sign-up" id="section--4">
                <div class="section__title">
                    <h3 class="section__header">
                        {"The best day to join was one year ago. The second best is today!"}
                    </h3>
                </div>
                <a class="btn--show-modal btn btn--large" href="#" onclick={open_modal}>
                    {"Open your free account today!"}
                </a>
            </section>

            <footer class="footer">
                <p class="footer__copyright">
                    {"© Meridian. A fictional bank for a very real landing page."}
                </p>
            </footer>

            <Modal open={*modal_open} on_close={close_modal} />
            <CookieNotice />
        </div>
    }
}
