use web_sys::MouseEvent;
use yew::prelude::*;

/// Cookie banner, dismissed once per page load. Dismissal hides the banner
/// and slides it below the viewport; there is no persistence, so it comes
/// back on the next load.
#[function_component(CookieNotice)]
pub fn cookie_notice() -> Html {
    let dismissed = use_state(|| false);

    let on_close = {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| dismissed.set(true))
    };

    let style = (*dismissed).then(|| "bottom: -12rem;");

    html! {
        <div class={classes!("cookie", (*dismissed).then(|| "hidden"))} {style}>
            <p class="cookie__text">
                {"We use cookies for improved functionality and analytics."}
            </p>
            <button class="cookie__close btn btn--small" onclick={on_close}>
                {"Got it!"}
            </button>
        </div>
    }
}
