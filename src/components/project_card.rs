use yew::prelude::*;

use super::icons::{Icon, SvgIcon};
use crate::content::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
    /// Receives the project id.
    pub on_select: Callback<String>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let ProjectCardProps { project, index, on_select } = props;

    let onclick = {
        let on_select = on_select.clone();
        let id = project.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    html! {
        <div
            class="project-card reveal"
            style={format!("animation-delay: {:.1}s;", *index as f64 * 0.1)}
            {onclick}
        >
            <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
            <div class="project-shade" />
            <div class="project-caption">
                <div class="project-slide">
                    <span class="project-category">{ &project.category }</span>
                    <h3 class="text-glow">{ &project.title }</h3>
                    <div class="project-more">
                        {"View Mission Details"}
                        <SvgIcon icon={Icon::ExternalLink} size={12} />
                    </div>
                </div>
            </div>
        </div>
    }
}
