use yew::prelude::*;

const GRAIN: &str = "data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.65' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E%3C/svg%3E";

#[function_component(FluidBackground)]
pub fn fluid_background() -> Html {
    html! {
        <div class="fluid-background">
            <style>
                {r#"
                    .fluid-background {
                        position: fixed;
                        inset: 0;
                        z-index: -10;
                        overflow: hidden;
                        background: #020001;
                    }
                    .fluid-background .blob {
                        position: absolute;
                        border-radius: 50%;
                        mix-blend-mode: screen;
                        will-change: transform;
                        animation-timing-function: linear;
                        animation-iteration-count: infinite;
                    }
                    .fluid-background .crimson {
                        top: -20%;
                        left: -20%;
                        width: 100vw;
                        height: 100vw;
                        background: #3d000a;
                        filter: blur(120px);
                        opacity: 0.4;
                        animation-name: crimson-drift;
                        animation-duration: 15s;
                    }
                    .fluid-background .violet {
                        bottom: -20%;
                        right: -10%;
                        width: 90vw;
                        height: 90vw;
                        background: #1a0526;
                        filter: blur(100px);
                        opacity: 0.3;
                        animation-name: violet-drift;
                        animation-duration: 20s;
                    }
                    @keyframes crimson-drift {
                        0%, 100% { transform: translate(0, 0) scale(1); opacity: 0.3; }
                        50% { transform: translate(20px, -20px) scale(1.1); opacity: 0.4; }
                    }
                    @keyframes violet-drift {
                        0%, 100% { transform: translate(0, 0) scale(1); }
                        50% { transform: translate(-30px, 20px) scale(1.2); }
                    }
                    .fluid-background .smoke {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        mix-blend-mode: overlay;
                        background: radial-gradient(circle at 50% 50%, #800020 0%, transparent 60%);
                    }
                    .fluid-background .grain {
                        position: absolute;
                        inset: 0;
                        opacity: 0.05;
                    }
                    .fluid-background .vignette {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at center, transparent 0%, #000 90%);
                    }
                "#}
            </style>
            <div class="blob crimson" />
            <div class="blob violet" />
            <div class="smoke" />
            <div class="grain" style={format!("background-image: url(\"{}\");", GRAIN)} />
            <svg style="position: absolute; inset: 0; width: 100%; height: 100%; opacity: 0.15;" xmlns="http://www.w3.org/2000/svg">
                <defs>
                    <linearGradient id="fluid-web" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="#ffb6c1" stop-opacity="0" />
                        <stop offset="50%" stop-color="#ffb6c1" stop-opacity="1" />
                        <stop offset="100%" stop-color="#ffb6c1" stop-opacity="0" />
                    </linearGradient>
                </defs>
                <line x1="0" y1="0" x2="100%" y2="100%" stroke="url(#fluid-web)" stroke-width="0.5" />
                <line x1="100%" y1="0" x2="0" y2="100%" stroke="url(#fluid-web)" stroke-width="0.5" />
            </svg>
            <div class="vignette" />
        </div>
    }
}
