use log::{info, Level};
use yew::prelude::*;

mod pages {
    pub mod landing;
}

mod components {
    pub mod cookie_notice;
    pub mod modal;
    pub mod nav;
    pub mod observe;
    pub mod reveal;
    pub mod slider;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Meridian landing page");
    yew::Renderer::<App>::new().render();
}
