use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use super::icons::{Icon, SvgIcon};
use crate::content::Project;

const OVERVIEW_FALLBACK: &str = "Project details classified. Please contact for full mission report.";
const CHALLENGE_FALLBACK: &str = "Overcoming digital obstacles to secure the client's objective.";
const SOLUTION_FALLBACK: &str = "Deploying advanced frameworks and creative strategies.";

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(fallback)
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Case-study overlay. Closes on backdrop click, the close button or Escape,
/// and locks page scroll while open.
#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let ProjectModalProps { project, on_close } = props;

    {
        let on_close = on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    use_effect_with_deps(
        |_| {
            set_body_overflow("hidden");
            || set_body_overflow("")
        },
        (),
    );

    let close = {
        let on_close = on_close.clone();
        let id = project.id.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("closing project {}", id);
            on_close.emit(());
        })
    };

    html! {
        <div class="project-modal">
            <style>
                {r#"
                    .project-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .project-modal .backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(12px);
                        animation: backdrop-in 0.3s ease-out;
                    }
                    .project-modal .panel {
                        position: relative;
                        width: 100%;
                        max-width: 64rem;
                        max-height: 90vh;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                        background: #050000;
                        border: 1px solid rgba(255, 51, 102, 0.2);
                        border-radius: 2px;
                        box-shadow: 0 0 50px rgba(0, 0, 0, 0.8);
                        animation: modal-in 0.35s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    @media (min-width: 768px) {
                        .project-modal { padding: 2rem; }
                        .project-modal .panel { flex-direction: row; }
                        .project-modal .media, .project-modal .copy { width: 50%; }
                        .project-modal .media { height: auto; }
                    }
                    .project-modal .close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 20;
                        padding: 0.5rem;
                        display: flex;
                        border-radius: 50%;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.5);
                        color: #fff;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .project-modal .close:hover { background: #ff3366; }
                    .project-modal .media {
                        position: relative;
                        height: 16rem;
                        overflow: hidden;
                    }
                    .project-modal .media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .project-modal .media::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        opacity: 0.6;
                        background: linear-gradient(to top, #050000, transparent);
                    }
                    .project-modal .copy {
                        position: relative;
                        padding: 2rem;
                        overflow-y: auto;
                    }
                    .project-modal .eyebrow {
                        display: block;
                        margin-bottom: 1rem;
                        color: #ff3366;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                    }
                    .project-modal h2 {
                        margin-bottom: 1.5rem;
                        font-size: 2.5rem;
                        line-height: 1.1;
                        color: #fff;
                    }
                    .project-modal h3 {
                        margin-bottom: 0.75rem;
                        padding-left: 0.75rem;
                        border-left: 2px solid #ffb6c1;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #fff;
                    }
                    .project-modal h3.primary { border-left-color: #ff3366; }
                    .project-modal section { margin-bottom: 2rem; }
                    .project-modal p {
                        color: #9ca3af;
                        line-height: 1.7;
                        font-weight: 300;
                    }
                    .project-modal .chips {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .project-modal .chip {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: #d1d5db;
                        font-size: 0.75rem;
                    }
                    .project-modal .launch {
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        background: #ff3366;
                        color: #fff;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        cursor: pointer;
                        box-shadow: 0 0 20px rgba(255, 51, 102, 0.2);
                    }
                    .project-modal .launch:hover { background: #cc1f4b; }
                    @keyframes backdrop-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes modal-in {
                        from { opacity: 0; transform: translateY(20px) scale(0.9); }
                        to { opacity: 1; transform: none; }
                    }
                "#}
            </style>
            <div class="backdrop" onclick={close.clone()} />
            <div class="panel" role="dialog" aria-modal="true">
                <button class="close" onclick={close} aria-label="Close">
                    <SvgIcon icon={Icon::Close} size={20} />
                </button>

                <div class="media">
                    <img src={project.image.clone()} alt={project.title.clone()} />
                </div>

                <div class="copy">
                    <span class="eyebrow">{ format!("Mission Report: {}", project.category) }</span>
                    <h2 class="text-glow">{ &project.title }</h2>

                    <section>
                        <h3 class="primary">{"Overview"}</h3>
                        <p>{ or_fallback(&project.description, OVERVIEW_FALLBACK) }</p>
                    </section>
                    <section>
                        <h3>{"The Challenge"}</h3>
                        <p>{ or_fallback(&project.challenge, CHALLENGE_FALLBACK) }</p>
                    </section>
                    <section>
                        <h3>{"The Solution"}</h3>
                        <p>{ or_fallback(&project.solution, SOLUTION_FALLBACK) }</p>
                    </section>

                    if let Some(technologies) = &project.technologies {
                        <section>
                            <h3>{"Tech Stack"}</h3>
                            <div class="chips">
                                { for technologies.iter().map(|t| html! { <span class="chip">{ t }</span> }) }
                            </div>
                        </section>
                    }

                    <div class="launch-row">
                        if let Some(link) = &project.link {
                            <a href={link.clone()} target="_blank" rel="noopener noreferrer">
                                <button class="launch">{"Launch Live Preview"}</button>
                            </a>
                        } else {
                            <button class="launch">{"Launch Live Preview"}</button>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_copy_uses_fallback() {
        assert_eq!(or_fallback(&None, OVERVIEW_FALLBACK), OVERVIEW_FALLBACK);
        assert_eq!(or_fallback(&Some(String::new()), SOLUTION_FALLBACK), SOLUTION_FALLBACK);
        assert_eq!(or_fallback(&Some("Built it".into()), SOLUTION_FALLBACK), "Built it");
    }
}
