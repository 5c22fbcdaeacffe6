use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

/// Escape only closes when the dialog is actually open; pressing it against
/// a closed dialog must be a no-op.
pub fn escape_closes(key: &str, open: bool) -> bool {
    open && key == "Escape"
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Account-opening dialog. The overlay and the dialog body render from the
/// same flag, so their hidden markers can never diverge.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Document-level Escape handler, reinstalled whenever the open state
    // flips so the closure always sees the current state.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let open = *open;
                let document = web_sys::window()
                    .expect("no window")
                    .document()
                    .expect("no document");

                let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if escape_closes(&e.key(), open) {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                document
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .expect("failed to attach keydown listener");

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .expect("failed to detach keydown listener");
                }
            },
            props.open,
        );
    }

    let hidden = (!props.open).then(|| "hidden");

    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <div class={classes!("modal", hidden.clone())}>
                <button class="btn--close-modal" onclick={close_click}>{"×"}</button>
                <h2 class="modal__header">
                    {"Open your free account "}
                    <span class="highlight">{"in 5 minutes"}</span>
                </h2>
                <form class="modal__form">
                    <label>{"First name"}</label>
                    <input type="text" />
                    <label>{"Last name"}</label>
                    <input type="text" />
                    <label>{"Email address"}</label>
                    <input type="email" />
                    <button class="btn">{"Next step →"}</button>
                </form>
            </div>
            <div class={classes!("overlay", hidden)} onclick={overlay_click}></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_is_a_noop_when_closed() {
        assert!(!escape_closes("Escape", false));
    }

    #[test]
    fn escape_closes_only_when_open() {
        assert!(escape_closes("Escape", true));
    }

    #[test]
    fn other_keys_never_close() {
        assert!(!escape_closes("Enter", true));
        assert!(!escape_closes("a", true));
        assert!(!escape_closes("Esc", false));
    }
}
