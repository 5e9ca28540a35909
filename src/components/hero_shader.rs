use log::error;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::shader;

/// Canvas running the raymarched terrain behind the hero.
///
/// If WebGL is unavailable or the programs fail to build, the failure is
/// logged and the canvas simply stays blank.
#[function_component(HeroShader)]
pub fn hero_shader() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let running = match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => match shader::mount(canvas) {
                        Ok(frame_loop) => Some(frame_loop),
                        Err(e) => {
                            error!("hero shader disabled: {}", e);
                            None
                        }
                    },
                    None => {
                        error!("hero shader canvas was not mounted");
                        None
                    }
                };
                // Dropping the loop cancels the pending frame.
                move || drop(running)
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="hero-shader" />
    }
}
