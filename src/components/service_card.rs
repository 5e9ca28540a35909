use yew::prelude::*;

use super::icons::{Icon, SvgIcon};
use crate::content::Service;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub index: usize,
    pub on_details: Callback<String>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let ServiceCardProps { service, index, on_details } = props;

    let on_click = {
        let on_details = on_details.clone();
        let title = service.title.clone();
        Callback::from(move |_: MouseEvent| on_details.emit(title.clone()))
    };

    html! {
        <div class="matte-card service-card reveal" style={format!("animation-delay: {:.1}s;", *index as f64 * 0.1)}>
            <div class="service-glow" />
            <div class="service-watermark">
                <SvgIcon icon={service.icon} size={120} stroke_width={1.0} />
            </div>
            <div class="service-body">
                <div class="service-icon">
                    <SvgIcon icon={service.icon} size={28} />
                </div>
                <h3>{ &service.title }</h3>
                <p>{ &service.description }</p>
                <div class="service-footer">
                    <span class="service-price">{ &service.price_start }</span>
                    <button class="service-details" onclick={on_click}>
                        {"Details"}
                        <SvgIcon icon={Icon::ArrowRight} size={14} class="accent" />
                    </button>
                </div>
            </div>
        </div>
    }
}
