use yew::prelude::*;

/// A decorative dot placed by [`scatter`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Speck {
    /// Horizontal position, percent of the container.
    pub left: f64,
    /// Vertical position, percent of the container.
    pub top: f64,
    /// Diameter in pixels.
    pub size: f64,
    pub opacity: f64,
    /// Animation period in seconds.
    pub duration: f64,
    /// Animation start delay in seconds.
    pub delay: f64,
}

/// Seeded scatter so decorative layouts are identical on every render.
pub fn scatter(seed: u64, count: usize) -> Vec<Speck> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| Speck {
            left: rng.f64() * 100.0,
            top: rng.f64() * 100.0,
            size: rng.f64() * 2.0 + 1.0,
            opacity: rng.f64() * 0.5 + 0.3,
            duration: rng.f64() * 10.0 + 10.0,
            delay: rng.f64() * 10.0,
        })
        .collect()
}

const PARTICLE_SEED: u64 = 0x5EED_0F_5917;

/// Pink motes drifting up through the hero.
#[function_component(FloatingParticles)]
pub fn floating_particles() -> Html {
    let specks = use_memo(|_| scatter(PARTICLE_SEED, 20), ());

    html! {
        <div class="floating-particles">
            <style>
                {r#"
                    .floating-particles {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        overflow: hidden;
                    }
                    .floating-particles .mote {
                        position: absolute;
                        top: 100%;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: #ff3366;
                        opacity: 0;
                        animation-name: mote-rise;
                        animation-timing-function: linear;
                        animation-iteration-count: infinite;
                    }
                    @keyframes mote-rise {
                        0% { top: 100%; opacity: 0; transform: scale(0.5); }
                        50% { opacity: 0.6; transform: scale(1.5); }
                        100% { top: -20%; opacity: 0; transform: scale(0.5); }
                    }
                "#}
            </style>
            { for specks.iter().map(|s| html! {
                <div
                    class="mote"
                    style={format!(
                        "left: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                        s.left, s.duration, s.delay
                    )}
                />
            }) }
        </div>
    }
}

/// Three web strands that slowly breathe across the hero.
#[function_component(GlowingWebStrands)]
pub fn glowing_web_strands() -> Html {
    html! {
        <div class="web-strands">
            <style>
                {r#"
                    .web-strands {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        z-index: 0;
                    }
                    .web-strands svg {
                        position: absolute;
                        width: 100%;
                        height: 100%;
                        opacity: 0.4;
                    }
                "#}
            </style>
            <svg viewBox="0 0 100 100" preserveAspectRatio="none">
                <path d="M0,0 Q50,50 100,100" stroke="url(#web-gradient)" stroke-width="0.2" fill="none">
                    <animate attributeName="d" dur="8s" repeatCount="indefinite"
                        values="M0,0 Q50,45 100,100;M0,0 Q55,50 100,100;M0,0 Q50,45 100,100" />
                    <animate attributeName="stroke-width" dur="8s" repeatCount="indefinite" values="0.1;0.3;0.1" />
                    <animate attributeName="stroke-opacity" dur="8s" repeatCount="indefinite" values="0.3;0.8;0.3" />
                </path>
                <path d="M100,0 Q50,50 0,100" stroke="url(#web-gradient)" stroke-width="0.2" fill="none">
                    <animate attributeName="d" dur="10s" repeatCount="indefinite"
                        values="M100,0 Q55,50 0,100;M100,0 Q45,50 0,100;M100,0 Q55,50 0,100" />
                    <animate attributeName="stroke-width" dur="10s" repeatCount="indefinite" values="0.1;0.3;0.1" />
                    <animate attributeName="stroke-opacity" dur="10s" repeatCount="indefinite" values="0.3;0.8;0.3" />
                </path>
                <path d="M20,0 Q50,80 80,0" stroke="url(#web-gradient)" stroke-width="0.1" fill="none">
                    <animate attributeName="stroke-width" dur="6s" repeatCount="indefinite" values="0.05;0.15;0.05" />
                    <animate attributeName="stroke-opacity" dur="6s" repeatCount="indefinite" values="0.1;0.5;0.1" />
                </path>
                <defs>
                    <linearGradient id="web-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="transparent" />
                        <stop offset="20%" stop-color="#ff3366" />
                        <stop offset="50%" stop-color="#ffb6c1" />
                        <stop offset="80%" stop-color="#ff3366" />
                        <stop offset="100%" stop-color="transparent" />
                    </linearGradient>
                </defs>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_is_deterministic_per_seed() {
        assert_eq!(scatter(7, 15), scatter(7, 15));
        assert_ne!(scatter(7, 15), scatter(8, 15));
    }

    #[test]
    fn specks_stay_in_their_ranges() {
        for s in scatter(42, 200) {
            assert!((0.0..100.0).contains(&s.left));
            assert!((0.0..100.0).contains(&s.top));
            assert!((1.0..3.0).contains(&s.size));
            assert!((0.3..0.8).contains(&s.opacity));
            assert!((10.0..20.0).contains(&s.duration));
            assert!((0.0..10.0).contains(&s.delay));
        }
    }
}
