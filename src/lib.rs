use log::info;
use yew::prelude::*;

pub mod config;
pub mod contact;
pub mod content;
pub mod motion;
pub mod shader;
pub mod components;
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use motion::ScrollProvider;
use pages::landing::Landing;

#[function_component]
pub fn App() -> Html {
    info!("Rendering landing page");

    html! {
        <ScrollProvider>
            <Nav />
            <Landing />
        </ScrollProvider>
    }
}
