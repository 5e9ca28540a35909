use yew::prelude::*;

use crate::motion::{use_scroll_signal, StickerLayers};

/// Page-wide fixed decoration: city silhouettes, structural shapes, speed
/// lines and comic stickers, each layer travelling with page progress.
#[function_component(ComicStickers)]
pub fn comic_stickers() -> Html {
    let scroll = use_scroll_signal();
    let layers = StickerLayers::at(scroll.progress);

    html! {
        <div class="comic-stickers">
            <style>
                {r#"
                    .comic-stickers {
                        position: fixed;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        pointer-events: none;
                        overflow: hidden;
                        z-index: 0;
                    }
                    .comic-stickers > div {
                        position: absolute;
                        will-change: transform;
                    }
                    .comic-stickers .speed-lines {
                        inset: 0;
                        top: -25%;
                        height: 150%;
                    }
                    .comic-stickers .speed-lines span {
                        position: absolute;
                        width: 1px;
                    }
                    @media (max-width: 768px) {
                        .comic-stickers .sticker-mask {
                            width: 6rem !important;
                            height: 6rem !important;
                        }
                    }
                "#}
            </style>

            // Far: distant buildings
            <div style={format!("{} top: 5%; left: 5%; width: 12rem; height: 800px; filter: blur(64px); background: linear-gradient(to bottom, rgba(26, 5, 38, 0), rgba(26, 5, 38, 0.2), rgba(26, 5, 38, 0));", layers.city_far.style())} />
            <div style={format!("{} top: 15%; right: 10%; width: 16rem; height: 900px; filter: blur(64px); background: linear-gradient(to bottom, rgba(61, 0, 10, 0), rgba(61, 0, 10, 0.2), rgba(61, 0, 10, 0));", layers.city_far.style())} />

            // Mid: structure
            <div style={format!("{} top: 30%; left: 12%; width: 10rem; height: 10rem; border: 1px solid rgba(255, 51, 102, 0.05); border-radius: 0.5rem; filter: blur(2px);", layers.city_mid_slow.style())} />
            <div style={format!("{} top: 60%; right: 5%; width: 14rem; height: 14rem; border: 1px solid rgba(102, 0, 204, 0.05); border-radius: 50%; filter: blur(2px);", layers.city_mid_fast.style())} />
            <div style={format!("{} top: 20%; right: 25%; width: 0.5rem; height: 500px; filter: blur(4px); background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.05), transparent);", layers.city_mid.style())} />

            // Speed lines
            <div class="speed-lines" style={layers.speed_lines.style()}>
                <span style="left: 8%; top: 10%; height: 150px; background: linear-gradient(to bottom, transparent, rgba(255, 51, 102, 0.2), transparent);" />
                <span style="left: 25%; top: 50%; height: 100px; background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.1), transparent);" />
                <span style="right: 12%; top: 30%; height: 250px; background: linear-gradient(to bottom, transparent, rgba(102, 0, 204, 0.2), transparent);" />
                <span style="right: 35%; top: 70%; height: 120px; background: linear-gradient(to bottom, transparent, rgba(255, 182, 193, 0.1), transparent);" />
                <span style="left: 50%; top: 85%; height: 100px; background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.05), transparent);" />
            </div>

            // Close: stickers
            <div class="sticker-mask" style={format!("{} top: 15%; right: 8%; width: 10rem; height: 10rem; opacity: 0.2; filter: drop-shadow(0 0 15px rgba(255, 51, 102, 0.4));", layers.close_slow.style())}>
                <svg viewBox="0 0 24 24" fill="none" stroke="#ff3366" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M12 2c-5.52 0-10 4.48-10 10s4.48 10 10 10 10-4.48 10-10-4.48-10-10-10z" />
                    <path d="M7 11c0-1.5 1.5-3 2.5-3s2.5 1.5 2.5 3" />
                    <path d="M12 11c0-1.5 1.5-3 2.5-3s2.5 1.5 2.5 3" />
                    <path d="M12 16s-1-1.5-2.5-1.5" />
                    <path d="M12 16s1-1.5 2.5-1.5" />
                </svg>
            </div>
            <div style={format!("{} bottom: 10%; left: 5%; width: 16rem; height: 16rem; opacity: 0.1;", layers.close_fast.style())}>
                <svg viewBox="0 0 100 100" fill="none" stroke="white" stroke-width="0.8">
                    <path d="M0 100 Q50 50 100 0" />
                    <path d="M20 100 Q50 60 80 0" />
                    <path d="M0 80 Q40 50 100 20" />
                    <circle cx="0" cy="100" r="20" />
                    <circle cx="0" cy="100" r="40" />
                </svg>
            </div>
            <div style={format!("{} top: 25%; left: 8%; width: 4rem; height: 4rem; opacity: 0.15;", layers.close_fast.style())}>
                <svg viewBox="0 0 24 24" fill="#ff3366" stroke="none">
                    <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
                </svg>
            </div>
        </div>
    }
}
