use log::debug;
use yew::prelude::*;

use crate::components::{
    comic_stickers::ComicStickers,
    contact_form::ContactForm,
    fluid_background::FluidBackground,
    hero_effects::{FloatingParticles, GlowingWebStrands},
    hero_parallax::HeroParallax,
    hero_shader::HeroShader,
    icons::{Icon, SvgIcon},
    nav::scroll_to_section,
    project_card::ProjectCard,
    project_modal::ProjectModal,
    service_card::ServiceCard,
    whatsapp_button::WhatsAppButton,
};
use crate::config::{chat_url, PRIMARY_PHONE, SECONDARY_PHONE};
use crate::content::{self, PricingTier, TeamMember};

const HERO_IMAGE: &str = "https://images.hdqwalls.com/wallpapers/spider-gwen-4k-artwork-j0.jpg";

/// pravatar ids of the client faces in the stats banner.
const CLIENT_AVATARS: [u32; 3] = [26, 27, 28];

fn scroll_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

fn pricing_tier(tier: &PricingTier, index: usize) -> Html {
    html! {
        <div
            key={tier.id.clone()}
            class={classes!("tier", "reveal", tier.recommended.then_some("recommended"))}
            style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
        >
            if tier.recommended {
                <div class="tier-badge">{"Most Powerful"}</div>
            }
            <h3>{ &tier.name }</h3>
            <div class="tier-price">{ &tier.price }</div>
            <ul>
                { for tier.features.iter().map(|feature| html! {
                    <li><span class="dot" />{ feature }</li>
                }) }
            </ul>
            <button class="tier-select" onclick={scroll_to("contact")}>
                { format!("Select {}", tier.name) }
            </button>
        </div>
    }
}

fn team_member(member: &TeamMember, index: usize) -> Html {
    html! {
        <div
            key={member.name.clone()}
            class="member reveal"
            style={format!("animation-delay: {:.1}s;", index as f64 * 0.2)}
        >
            <h3>{ &member.name }</h3>
            <span class="member-role">{ &member.role }</span>
            <p>{ &member.description }</p>
            <div class="member-meta">
                <div>
                    <SvgIcon icon={Icon::Zap} size={14} class="accent" />
                    { &member.speciality }
                </div>
                <div>
                    <SvgIcon icon={Icon::Smartphone} size={14} class="accent" />
                    <a href={format!("tel:{}", member.phone)}>{ &member.phone }</a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let site = content::site();
    let selected = use_state(|| None::<String>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: String| {
            debug!("opening project {}", id);
            selected.set(Some(id));
        })
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let on_details = Callback::from(|title: String| {
        debug!("details requested for {}", title);
        scroll_to_section("contact");
    });

    html! {
        <div class="landing">
            <style>
                {r#"
                    *, *::before, *::after { box-sizing: border-box; }
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        background: #050000;
                        color: #e0e0e0;
                        font-family: 'Inter', sans-serif;
                        overflow-x: hidden;
                    }
                    ::selection { background: #ff3366; color: #fff; }
                    h1, h2, h3 { font-family: 'Space Grotesk', 'Inter', sans-serif; margin: 0; }
                    .accent { color: #ff3366; }
                    .landing { position: relative; min-height: 100vh; overflow-x: hidden; }
                    .text-glow { text-shadow: 0 0 20px rgba(255, 51, 102, 0.5); }
                    .matte-card {
                        background: rgba(10, 5, 5, 0.7);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(12px);
                    }
                    .reveal { opacity: 0; animation: fade-in 0.6s ease-out forwards; }
                    @keyframes fade-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .container { position: relative; z-index: 10; max-width: 80rem; margin: 0 auto; }
                    .landing > section { position: relative; padding: 8rem 1.5rem; }
                    @media (min-width: 768px) {
                        .landing > section { padding: 8rem 5rem; }
                    }
                    .eyebrow {
                        color: #ff3366;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                    }
                    .section-title { font-size: clamp(2.25rem, 6vw, 3.75rem); font-weight: 700; color: #fff; }
                    .gradient-text {
                        background: linear-gradient(to right, #ff3366, #ffb6c1);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .centered-heading {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 5rem;
                        text-align: center;
                    }
                    .rule {
                        width: 6rem;
                        height: 1px;
                        background: linear-gradient(to right, transparent, #ff3366, transparent);
                    }
                    .grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
                    @media (min-width: 768px) {
                        .grid.two { grid-template-columns: repeat(2, 1fr); gap: 3rem; }
                        .grid.three { grid-template-columns: repeat(3, 1fr); }
                    }
                    .btn {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        padding: 1rem 2.5rem;
                        border: 1px solid transparent;
                        border-radius: 2px;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        text-decoration: none;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .btn.primary { background: #ff3366; color: #fff; box-shadow: 0 0 20px rgba(255, 51, 102, 0.4); }
                    .btn.primary:hover { background: #cc1f4b; transform: translateY(-4px); }
                    .btn.ghost { background: transparent; border-color: rgba(255, 255, 255, 0.2); color: #fff; }
                    .btn.ghost:hover { border-color: rgba(255, 255, 255, 0.5); background: rgba(255, 255, 255, 0.05); }
                    .btn.light { background: #fff; color: #000; }
                    .btn.light:hover { background: #e5e7eb; }
                    .btn.chat { background: #25D366; color: #fff; box-shadow: 0 0 20px rgba(37, 211, 102, 0.3); }
                    .btn.chat:hover { background: #20bd5a; }

                    .hanging-web {
                        position: fixed;
                        top: 0;
                        z-index: 0;
                        display: none;
                        width: 1px;
                        background: linear-gradient(to bottom, rgba(255, 255, 255, 0.2), transparent);
                        transform-origin: top center;
                        animation: web-sway 6s ease-in-out infinite;
                    }
                    .hanging-web.left { left: 2rem; height: 16rem; }
                    .hanging-web.right { right: 3rem; height: 24rem; animation-delay: -2s; }
                    .hanging-web .knot { position: absolute; bottom: 0; left: -4px; width: 9px; height: 9px; }
                    .hanging-web.left .knot { border: 1px solid #ff3366; transform: rotate(45deg); }
                    .hanging-web.right .knot { border-radius: 50%; background: rgba(255, 51, 102, 0.5); }
                    @media (min-width: 768px) { .hanging-web { display: block; } }
                    @keyframes web-sway {
                        0%, 100% { transform: rotate(-2deg); }
                        50% { transform: rotate(2deg); }
                    }

                    #hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding-top: 5rem;
                        overflow: hidden;
                    }
                    .hero-backdrop { position: absolute; inset: 0; z-index: 0; }
                    .hero-backdrop img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: center 20%;
                        opacity: 0.8;
                    }
                    .hero-backdrop .shade { position: absolute; inset: 0; }
                    .hero-backdrop .shade.vertical { background: linear-gradient(to bottom, #050000, transparent, #050000); }
                    .hero-backdrop .shade.horizontal { background: linear-gradient(to right, #050000, rgba(5, 0, 0, 0.4), #050000); }
                    .hero-backdrop .shade.tint { background: #3d000a; mix-blend-mode: overlay; opacity: 0.4; }
                    .hero-shader {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.35;
                        mix-blend-mode: screen;
                        pointer-events: none;
                    }
                    .hero-copy { animation: fade-in 0.8s ease-out both; }
                    .hero-tag {
                        display: inline-block;
                        margin-bottom: 2rem;
                        padding: 0.25rem 1rem;
                        border: 1px solid rgba(255, 51, 102, 0.5);
                        background: rgba(0, 0, 0, 0.5);
                        color: #ffb6c1;
                        font-size: 10px;
                        font-weight: 700;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        box-shadow: 0 0 15px rgba(255, 51, 102, 0.2);
                    }
                    .hero-copy h1 {
                        margin-bottom: 2rem;
                        color: #fff;
                        font-size: clamp(3rem, 9vw, 7rem);
                        line-height: 0.9;
                        letter-spacing: -0.05em;
                    }
                    .hero-copy h1 .mj {
                        padding-right: 1rem;
                        font-style: italic;
                        background: linear-gradient(to right, #ff3366, #ffb6c1, #fff);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-bar { width: 100px; height: 4px; margin-bottom: 2rem; background: #ff3366; box-shadow: 0 0 10px #ff3366; }
                    .hero-copy p { margin: 0 0 3rem; color: #fff; font-size: 1.5rem; font-weight: 300; letter-spacing: 0.05em; }
                    .hero-actions { display: flex; flex-wrap: wrap; gap: 1.5rem; }
                    .scroll-cue {
                        position: absolute;
                        bottom: 3rem;
                        left: 50%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        transform: translateX(-50%);
                        opacity: 0;
                        animation: fade-in 1s ease-out 2s forwards;
                    }
                    .scroll-cue span { color: #ff3366; font-size: 10px; letter-spacing: 0.3em; text-transform: uppercase; }
                    .scroll-cue .line { width: 1px; height: 3rem; background: linear-gradient(to bottom, #ff3366, transparent); }

                    .landing > section.stats {
                        padding: 4rem 1.5rem;
                        background: #000;
                        border-top: 1px solid rgba(255, 51, 102, 0.1);
                        border-bottom: 1px solid rgba(255, 51, 102, 0.1);
                        overflow: hidden;
                    }
                    .stats .glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at center, #3d000a 0%, transparent 70%);
                        opacity: 0.3;
                    }
                    .stats-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 3rem; }
                    @media (min-width: 768px) { .stats-grid { grid-template-columns: repeat(4, 1fr); } }
                    .stat { padding-left: 1.5rem; border-left: 1px solid rgba(255, 51, 102, 0.2); }
                    .stat-value { margin-bottom: 0.5rem; color: #fff; font-size: 3rem; font-weight: 700; }
                    .stat-label { color: #ffb6c1; font-size: 0.75rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; }
                    .avatars { display: flex; align-items: center; padding-left: 1.5rem; }
                    .avatar {
                        width: 3rem;
                        height: 3rem;
                        margin-left: -1rem;
                        border: 1px solid #ff3366;
                        border-radius: 50%;
                        background: #000;
                        overflow: hidden;
                    }
                    .avatar:first-child { margin-left: 0; }
                    .avatar img { width: 100%; height: 100%; object-fit: cover; filter: grayscale(1); transition: filter 0.5s; }
                    .avatar:hover img { filter: none; }
                    .avatar.more {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #ff3366;
                        font-size: 0.75rem;
                        font-weight: 700;
                    }

                    #services { background: #050000; }
                    .services-head {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        gap: 2rem;
                        margin-bottom: 5rem;
                    }
                    @media (min-width: 768px) { .services-head { flex-direction: row; align-items: flex-end; } }
                    .services-head p {
                        max-width: 28rem;
                        padding-left: 1.5rem;
                        border-left: 1px solid rgba(255, 255, 255, 0.1);
                        color: #9ca3af;
                        font-weight: 300;
                        line-height: 1.6;
                    }
                    .service-card { position: relative; padding: 2rem; overflow: hidden; transition: border-color 0.5s, transform 0.5s; }
                    .service-card:hover { border-color: rgba(255, 51, 102, 0.3); transform: translateY(-8px); }
                    .service-glow {
                        position: absolute;
                        top: -5rem;
                        right: -5rem;
                        width: 10rem;
                        height: 10rem;
                        border-radius: 50%;
                        background: rgba(255, 51, 102, 0.1);
                        filter: blur(60px);
                        opacity: 0;
                        transition: opacity 0.5s;
                    }
                    .service-card:hover .service-glow { opacity: 1; }
                    .service-watermark { position: absolute; right: -1rem; bottom: -1rem; color: rgba(255, 255, 255, 0.03); }
                    .service-body { position: relative; z-index: 1; display: flex; flex-direction: column; height: 100%; }
                    .service-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        margin-bottom: 2rem;
                        border: 1px solid rgba(255, 51, 102, 0.3);
                        background: rgba(255, 51, 102, 0.1);
                        color: #ff3366;
                    }
                    .service-body h3 { margin-bottom: 1rem; color: #fff; font-size: 1.5rem; }
                    .service-body p { flex: 1; margin: 0 0 2rem; color: #9ca3af; line-height: 1.6; }
                    .service-footer {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .service-price { color: #fff; font-weight: 700; }
                    .service-details {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: none;
                        border: none;
                        color: #9ca3af;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        cursor: pointer;
                    }
                    .service-details:hover { color: #fff; }

                    #work, #team { background: #080203; border-top: 1px solid rgba(255, 255, 255, 0.05); }
                    .project-card {
                        position: relative;
                        aspect-ratio: 4 / 5;
                        overflow: hidden;
                        border-radius: 2px;
                        background: #0a0505;
                        cursor: pointer;
                    }
                    .project-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(0.5);
                        transition: transform 0.7s, filter 0.7s;
                    }
                    .project-card:hover img { transform: scale(1.1); filter: none; }
                    .project-shade { position: absolute; inset: 0; background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.2), transparent); }
                    .project-caption { position: absolute; left: 0; right: 0; bottom: 0; padding: 2rem; }
                    .project-slide { transform: translateY(1rem); transition: transform 0.5s; }
                    .project-card:hover .project-slide { transform: translateY(0); }
                    .project-category {
                        display: block;
                        margin-bottom: 0.5rem;
                        color: #ff3366;
                        font-size: 10px;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                    }
                    .project-slide h3 { margin-bottom: 1rem; color: #fff; font-size: 1.5rem; }
                    .project-more {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #d1d5db;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        opacity: 0;
                        transition: opacity 0.5s;
                    }
                    .project-card:hover .project-more { opacity: 1; }
                    .work-more { margin-top: 5rem; text-align: center; }
                    .btn.outline { border-color: rgba(255, 51, 102, 0.3); background: transparent; color: #ff3366; font-size: 0.75rem; }
                    .btn.outline:hover { background: #ff3366; color: #fff; box-shadow: 0 0 20px #ff3366; }

                    #pricing { background: #050000; overflow: hidden; }
                    .pricing-head { margin-bottom: 5rem; text-align: center; }
                    .pricing-head p { max-width: 36rem; margin: 1rem auto 0; color: #9ca3af; font-weight: 300; }
                    .tier {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        padding: 2.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 2px;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(12px);
                        transition: transform 0.5s;
                    }
                    .tier:hover { transform: translateY(-8px); }
                    .tier.recommended { border-color: #ff3366; background: linear-gradient(to bottom, rgba(255, 51, 102, 0.1), #000); }
                    .tier-badge {
                        position: absolute;
                        top: -0.75rem;
                        left: 50%;
                        padding: 0.25rem 1rem;
                        background: #ff3366;
                        color: #fff;
                        font-size: 10px;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        transform: translateX(-50%);
                        box-shadow: 0 0 15px #ff3366;
                    }
                    .tier h3 { margin-bottom: 0.5rem; color: #d1d5db; font-size: 1.125rem; letter-spacing: 0.05em; text-transform: uppercase; }
                    .tier-price { margin-bottom: 2rem; color: #fff; font-size: 3rem; font-weight: 700; }
                    .tier ul { flex: 1; margin: 0 0 2.5rem; padding: 0; list-style: none; }
                    .tier li { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; color: #9ca3af; font-size: 0.875rem; }
                    .tier .dot { width: 4px; height: 4px; border-radius: 50%; background: rgba(255, 255, 255, 0.3); }
                    .tier.recommended .dot { background: #ff3366; box-shadow: 0 0 5px #ff3366; }
                    .tier-select {
                        width: 100%;
                        padding: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 2px;
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .tier-select:hover { background: rgba(255, 255, 255, 0.1); border-color: rgba(255, 255, 255, 0.3); }
                    .tier.recommended .tier-select { border: none; background: #ff3366; box-shadow: 0 0 20px rgba(255, 51, 102, 0.3); }
                    .tier.recommended .tier-select:hover { background: #cc1f4b; }

                    .member {
                        display: flex;
                        flex-direction: column;
                        padding: 2rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 2px;
                        background: #0a0505;
                        transition: border-color 0.5s;
                    }
                    .member:hover { border-color: rgba(255, 51, 102, 0.3); }
                    .member h3 { margin-bottom: 0.25rem; color: #fff; font-size: 1.5rem; }
                    .member-role { color: #ff3366; font-size: 0.75rem; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; }
                    .member p {
                        margin: 1rem 0 1.5rem;
                        padding-left: 1rem;
                        border-left: 2px solid rgba(255, 51, 102, 0.2);
                        color: #9ca3af;
                        font-size: 0.875rem;
                        line-height: 1.6;
                    }
                    .member-meta div {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-top: 0.75rem;
                        color: #d1d5db;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .member-meta a { color: inherit; text-decoration: none; }
                    .member-meta a:hover { color: #ff3366; }

                    #contact { background: #000; overflow: hidden; }
                    #contact .glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at bottom, #3d000a 0%, transparent 60%);
                        opacity: 0.4;
                    }
                    .contact-card {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-color: rgba(255, 51, 102, 0.2);
                        text-align: center;
                        overflow: hidden;
                    }
                    @media (min-width: 768px) { .contact-card { padding: 6rem; } }
                    .contact-card .orb { position: absolute; width: 24rem; height: 24rem; border-radius: 50%; filter: blur(100px); }
                    .contact-card .orb.crimson { top: 0; right: 0; background: rgba(255, 51, 102, 0.1); }
                    .contact-card .orb.violet { bottom: 0; left: 0; background: rgba(102, 0, 204, 0.1); }
                    .contact-card h2 { position: relative; z-index: 10; margin-bottom: 2rem; color: #fff; font-size: clamp(2.25rem, 7vw, 4.5rem); }
                    .contact-card > p { position: relative; z-index: 10; max-width: 36rem; margin: 0 auto; color: #9ca3af; font-size: 1.125rem; font-weight: 300; }
                    .direct-lines {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-top: 3rem;
                        padding-top: 3rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    @media (min-width: 768px) { .direct-lines { flex-direction: row; } }

                    .falling-web {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        height: 300px;
                        margin-top: -10rem;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .falling-web .wave { position: absolute; left: 0; bottom: 0; width: 100%; height: 100%; color: rgba(255, 51, 102, 0.1); }
                    .falling-web .strand { position: absolute; top: 0; right: 5rem; opacity: 0.3; animation: web-sway 6s ease-in-out infinite; }

                    footer {
                        position: relative;
                        z-index: 20;
                        padding: 4rem 1.5rem;
                        background: #020001;
                        border-top: 1px solid rgba(255, 51, 102, 0.1);
                    }
                    .footer-row {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2.5rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    @media (min-width: 768px) { .footer-row { flex-direction: row; } }
                    .footer-brand { display: flex; align-items: center; gap: 0.75rem; font-size: 1.25rem; font-weight: 700; letter-spacing: 0.1em; }
                    .footer-brand .mark {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border: 1px solid #ff3366;
                        background: rgba(255, 51, 102, 0.1);
                        color: #fff;
                        font-size: 0.75rem;
                    }
                    .footer-links { display: flex; gap: 2.5rem; }
                    .footer-links a, .socials a { color: #6b7280; text-decoration: none; transition: color 0.2s, border-color 0.2s; }
                    .footer-links a {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .footer-links a:hover { color: #ff3366; }
                    .socials { display: flex; gap: 1rem; }
                    .socials a {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #e0e0e0;
                    }
                    .socials a.instagram:hover { border-color: #ff3366; color: #ff3366; }
                    .socials a.linkedin:hover { border-color: #0077b5; color: #0077b5; }
                    .copyright {
                        margin-top: 2.5rem;
                        color: #374151;
                        font-size: 10px;
                        letter-spacing: 0.1em;
                        text-align: center;
                        text-transform: uppercase;
                    }
                "#}
            </style>

            <FluidBackground />
            <ComicStickers />
            <WhatsAppButton />

            if let Some(project) = selected.as_deref().and_then(|id| site.project(id)).cloned() {
                <ProjectModal {project} on_close={on_close} />
            }

            <div class="hanging-web left"><div class="knot" /></div>
            <div class="hanging-web right"><div class="knot" /></div>

            <section id="hero">
                <div class="hero-backdrop">
                    <img src={HERO_IMAGE} alt="Spider Gwen Theme" />
                    <div class="shade vertical" />
                    <div class="shade horizontal" />
                    <div class="shade tint" />
                </div>
                <HeroShader />
                <HeroParallax />
                <FloatingParticles />
                <GlowingWebStrands />

                <div class="container hero-copy">
                    <span class="hero-tag">{"The Multiverse Awaits"}</span>
                    <h1>
                        {"BECAUSE ALL DON'T"}<br />
                        {"HAVE "}<span class="mj text-glow">{"MJ"}</span>{" IN"}<br />
                        {"THEIR LIFE..."}
                    </h1>
                    <div class="hero-bar" />
                    <p>{"WE WILL BE THERE FOR YOU."}</p>
                    <div class="hero-actions">
                        <button class="btn primary" onclick={scroll_to("work")}>{"Start Mission"}</button>
                        <button class="btn ghost" onclick={scroll_to("pricing")}>{"Identify Targets"}</button>
                    </div>
                </div>

                <div class="scroll-cue">
                    <span>{"Scroll"}</span>
                    <div class="line" />
                </div>
            </section>

            <section class="stats">
                <div class="glow" />
                <div class="container stats-grid">
                    { for site.stats.iter().enumerate().map(|(i, stat)| html! {
                        <div class="stat reveal" style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}>
                            <div class="stat-value">{ &stat.value }</div>
                            <div class="stat-label">{ &stat.label }</div>
                        </div>
                    }) }
                    <div class="avatars">
                        { for CLIENT_AVATARS.iter().map(|id| html! {
                            <div class="avatar">
                                <img src={format!("https://i.pravatar.cc/150?img={}", id)} alt="client" />
                            </div>
                        }) }
                        <div class="avatar more">{"+20"}</div>
                    </div>
                </div>
            </section>

            <section id="services">
                <div class="container">
                    <div class="services-head">
                        <div>
                            <span class="eyebrow">{"Our Abilities"}</span>
                            <h2 class="section-title">
                                {"SUPERNATURAL"}<br />
                                <span class="gradient-text">{"SOLUTIONS"}</span>
                            </h2>
                        </div>
                        <p>{"We weave the digital strands that connect your brand to the world. Precision, agility, and power in every pixel."}</p>
                    </div>
                    <div class="grid three">
                        { for site.services.iter().enumerate().map(|(i, service)| html! {
                            <ServiceCard
                                key={service.id.clone()}
                                service={service.clone()}
                                index={i}
                                on_details={on_details.clone()}
                            />
                        }) }
                    </div>
                </div>
            </section>

            <section id="work">
                <div class="container">
                    <div class="centered-heading">
                        <span class="eyebrow">{"Battle Records"}</span>
                        <h2 class="section-title">{"SELECTED MISSIONS"}</h2>
                        <div class="rule" />
                    </div>
                    <div class="grid three">
                        { for site.projects.iter().enumerate().map(|(i, project)| html! {
                            <ProjectCard
                                key={project.id.clone()}
                                project={project.clone()}
                                index={i}
                                on_select={on_select.clone()}
                            />
                        }) }
                    </div>
                    <div class="work-more">
                        <button class="btn outline">{"View All Case Studies"}</button>
                    </div>
                </div>
            </section>

            <section id="pricing">
                <div class="container">
                    <div class="pricing-head">
                        <h2 class="section-title">{"ALLIANCE TIERS"}</h2>
                        <p>{"Choose the power level that suits your mission objectives."}</p>
                    </div>
                    <div class="grid three">
                        { for site.pricing.iter().enumerate().map(|(i, tier)| pricing_tier(tier, i)) }
                    </div>
                </div>
            </section>

            <section id="team">
                <div class="container">
                    <div class="centered-heading">
                        <span class="eyebrow">{"Core Squad"}</span>
                        <h2 class="section-title">{"THE ARCHITECTS"}</h2>
                        <div class="rule" />
                    </div>
                    <div class="grid two">
                        { for site.team.iter().enumerate().map(|(i, member)| team_member(member, i)) }
                    </div>
                </div>
            </section>

            <section id="contact">
                <div class="glow" />
                <div class="matte-card contact-card">
                    <div class="orb crimson" />
                    <div class="orb violet" />
                    <h2>{"NEED A "}<span class="accent text-glow">{"PARTNER?"}</span></h2>
                    <p>{"The city needs saving. Let's turn your vision into reality. Book a secure line, transmit your request below, or chat directly."}</p>

                    <ContactForm />

                    <div class="direct-lines">
                        <a class="btn light" href={chat_url(PRIMARY_PHONE)} target="_blank" rel="noreferrer">
                            <SvgIcon icon={Icon::Smartphone} size={18} />
                            {"Call Sandeep"}
                        </a>
                        <a class="btn chat" href={chat_url(SECONDARY_PHONE)} target="_blank" rel="noreferrer">
                            <SvgIcon icon={Icon::MessageCircle} size={18} />
                            {"Chat with Ram"}
                        </a>
                    </div>
                </div>
            </section>

            <div class="falling-web">
                <svg class="wave" viewBox="0 0 1440 320" preserveAspectRatio="none">
                    <path fill="currentColor" d="M0,160L48,170.7C96,181,192,203,288,197.3C384,192,480,160,576,149.3C672,139,768,149,864,170.7C960,192,1056,224,1152,218.7C1248,213,1344,171,1392,149.3L1440,128L1440,320L0,320Z" />
                </svg>
                <div class="strand">
                    <svg width="200" height="400" viewBox="0 0 100 200">
                        <path d="M50,0 Q60,100 50,200" stroke="#ff3366" stroke-width="1" fill="none" />
                        <path d="M20,50 L80,50 M30,100 L70,100 M40,150 L60,150" stroke="#ff3366" stroke-width="0.5" fill="none" opacity="0.5" />
                    </svg>
                </div>
            </div>

            <footer>
                <div class="footer-row">
                    <div class="footer-brand">
                        <span class="mark">{"M"}</span>
                        <span>{"MJ"}<span class="accent">{"FORYOU"}</span></span>
                    </div>
                    <div class="footer-links">
                        <a href="#">{"Privacy"}</a>
                        <a href="#">{"Terms"}</a>
                        <a href="#">{"Sitemap"}</a>
                    </div>
                    <div class="socials">
                        <a href="#" class="instagram" aria-label="Instagram"><SvgIcon icon={Icon::Instagram} size={16} /></a>
                        <a href="#" class="linkedin" aria-label="LinkedIn"><SvgIcon icon={Icon::Linkedin} size={16} /></a>
                    </div>
                </div>
                <div class="copyright">{"© 2025 MJ For You Agency. All Rights Reserved."}</div>
            </footer>
        </div>
    }
}
