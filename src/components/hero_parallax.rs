use yew::prelude::*;

use super::hero_effects::scatter;
use crate::motion::{use_scroll_signal, HeroLayers};

const STAR_SEED: u64 = 0xF4_0015;

/// Four depth layers behind the hero copy, offset by raw scroll pixels.
#[function_component(HeroParallax)]
pub fn hero_parallax() -> Html {
    let scroll = use_scroll_signal();
    let layers = HeroLayers::at(scroll.y);
    let stars = use_memo(|_| scatter(STAR_SEED, 15), ());

    html! {
        <div class="hero-parallax">
            <style>
                {r#"
                    .hero-parallax {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                        z-index: 0;
                    }
                    .hero-parallax .layer {
                        position: absolute;
                        inset: 0;
                        will-change: transform;
                    }
                    .hero-parallax .star {
                        position: absolute;
                        background: #fff;
                        border-radius: 50%;
                    }
                    .hero-parallax .ring {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(1px);
                    }
                    .hero-parallax .speed-line {
                        position: absolute;
                        filter: blur(2px);
                    }
                "#}
            </style>

            // Far: stars, drift down with the page
            <div class="layer" style={format!("{} opacity: 0.4;", layers.far.style())}>
                { for stars.iter().map(|s| html! {
                    <div
                        class="star"
                        style={format!(
                            "width: {0:.1}px; height: {0:.1}px; top: {1:.1}%; left: {2:.1}%; opacity: {3:.2};",
                            s.size, s.top, s.left, s.opacity
                        )}
                    />
                }) }
            </div>

            // Mid: abstract city shapes, slow and turning
            <div class="layer" style={format!("{} opacity: 0.2;", layers.mid.style())}>
                <div class="ring" style="top: 20%; left: 10%; width: 8rem; height: 8rem; border: 1px solid rgba(255, 51, 102, 0.3);" />
                <div class="ring" style="bottom: 30%; right: 15%; width: 12rem; height: 12rem; border: 1px solid rgba(255, 255, 255, 0.1);" />
                <div style="position: absolute; top: 60%; left: 20%; width: 5rem; height: 5rem; border-radius: 0.5rem; transform: rotate(45deg); background: linear-gradient(to top right, rgba(255, 51, 102, 0.1), transparent);" />
                <div style="position: absolute; bottom: 0; left: 0; width: 100%; height: 33%; opacity: 0.5; background: linear-gradient(to top, #000, transparent);" />
            </div>

            // Near: web strands outrun the scroll
            <div class="layer" style={format!("{} opacity: 0.6;", layers.near.style())}>
                <svg style="position: absolute; width: 100%; height: 100%;" viewBox="0 0 100 100" preserveAspectRatio="none">
                    <path d="M-10,10 Q50,60 110,10" stroke="url(#web-gradient-para)" stroke-width="0.15" fill="none">
                        <animate attributeName="d" dur="6s" repeatCount="indefinite"
                            values="M-10,10 Q50,60 110,10;M-10,10 Q50,65 110,10;M-10,10 Q50,60 110,10" />
                    </path>
                    <path d="M-10,90 Q50,40 110,90" stroke="url(#web-gradient-para)" stroke-width="0.15" fill="none">
                        <animate attributeName="d" dur="7s" repeatCount="indefinite"
                            values="M-10,90 Q50,40 110,90;M-10,90 Q50,35 110,90;M-10,90 Q50,40 110,90" />
                    </path>
                    <path d="M20,-10 Q40,50 80,110" stroke="url(#web-gradient-para)" stroke-width="0.1" fill="none" />
                    <defs>
                        <linearGradient id="web-gradient-para" x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color="transparent" />
                            <stop offset="20%" stop-color="#ff3366" />
                            <stop offset="80%" stop-color="#ffb6c1" />
                            <stop offset="100%" stop-color="transparent" />
                        </linearGradient>
                    </defs>
                </svg>
            </div>

            // Very near: speed lines
            <div class="layer" style={layers.very_near.style()}>
                <div class="speed-line" style="top: 40%; right: 5%; width: 2px; height: 8rem; background: linear-gradient(to bottom, transparent, rgba(255, 51, 102, 0.4), transparent);" />
                <div class="speed-line" style="bottom: 20%; left: 8%; width: 2px; height: 12rem; background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.2), transparent);" />
                <div class="speed-line" style="top: 10%; left: 50%; width: 1px; height: 6rem; filter: blur(1px); background: linear-gradient(to bottom, transparent, rgba(255, 182, 193, 0.3), transparent);" />
            </div>
        </div>
    }
}
