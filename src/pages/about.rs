use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};
use yew::prelude::*;

use crate::motion::ease::Ease;
use crate::motion::marquee::{MarqueeController, LOOP_SECONDS};
use crate::motion::reveal::{RevealSpec, TriggerZone};
use crate::motion::stage::Stage;
use crate::motion::timeline::{At, Prop, PropSpan, Repeat, Timeline};
use crate::pages::content::{Presentation, TeamHover, TEAM_MEMBERS, TECHNOLOGIES, WORKFLOW_STEPS};

const REVEAL_SECONDS: f64 = 1.0;
const REVEAL_STAGGER_SECONDS: f64 = 0.2;
const LIFT_SECONDS: f64 = 0.4;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Preview,
}

fn presentation_for(variant: Variant) -> Presentation {
    match variant {
        Variant::Primary => Presentation::primary(),
        Variant::Preview => Presentation::preview(),
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub variant: Variant,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let presentation = presentation_for(props.variant);
    let stage = use_state(Stage::new);

    {
        let stage = (*stage).clone();
        use_effect_with_deps(
            move |variant| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                // Measure trigger zones one tick after the first paint.
                let mount = Timeout::new(0, {
                    let stage = stage.clone();
                    let variant = *variant;
                    move || build_rig(&stage, variant)
                });
                move || {
                    drop(mount);
                    stage.stop();
                }
            },
            props.variant,
        );
    }

    let headline: Html = presentation
        .headline
        .chars()
        .map(|c| {
            let glyph = if c == ' ' { '\u{a0}' } else { c };
            html! { <span class="hero-char">{ glyph.to_string() }</span> }
        })
        .collect();

    let workflow_cards: Html = WORKFLOW_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let onmouseenter = {
                let stage = (*stage).clone();
                Callback::from(move |_: MouseEvent| stage.flip_enter(i))
            };
            let onmouseleave = {
                let stage = (*stage).clone();
                Callback::from(move |_: MouseEvent| stage.flip_leave(i))
            };
            html! {
                <div
                    class="flip-card reveal-item"
                    data-workflow={i.to_string()}
                    {onmouseenter}
                    {onmouseleave}
                >
                    <div class="card-face card-front">
                        <div class="card-icon">{ step.icon }</div>
                        <h3 class="card-title">{ step.title }</h3>
                        <div class="card-hint">{ "Hover to learn more" }</div>
                        <div class="card-overlay"></div>
                    </div>
                    <div class="card-face card-back">
                        <p class="card-detail">{ step.detail }</p>
                    </div>
                </div>
            }
        })
        .collect();

    let team_cards: Html = TEAM_MEMBERS
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let avatar = format!(
                "/assets/team/{}{}.png",
                member.avatar, presentation.avatar_suffix
            );
            match presentation.team_hover {
                TeamHover::Flip => {
                    // Team flips share the flip list with the workflow cards.
                    let flip_index = WORKFLOW_STEPS.len() + i;
                    let onmouseenter = {
                        let stage = (*stage).clone();
                        Callback::from(move |_: MouseEvent| stage.flip_enter(flip_index))
                    };
                    let onmouseleave = {
                        let stage = (*stage).clone();
                        Callback::from(move |_: MouseEvent| stage.flip_leave(flip_index))
                    };
                    html! {
                        <div class="team-card flip-card reveal-item" data-team-card={i.to_string()} {onmouseenter} {onmouseleave}>
                            <div class="card-face team-front">
                                <div class="avatar-frame">
                                    <img class="avatar-img" src={avatar} alt={member.name} />
                                </div>
                                <h3 class="member-name">{ member.name }</h3>
                                <p class="member-role">{ member.role }</p>
                                <div class="card-hint">{ "Hover to meet them" }</div>
                            </div>
                            <div class="card-face card-back team-back">
                                <p class="member-note">{ member.note }</p>
                            </div>
                        </div>
                    }
                }
                TeamHover::Lift => {
                    let onmouseenter = {
                        let stage = (*stage).clone();
                        Callback::from(move |_: MouseEvent| stage.hover_enter(i))
                    };
                    let onmouseleave = {
                        let stage = (*stage).clone();
                        Callback::from(move |_: MouseEvent| stage.hover_leave(i))
                    };
                    html! {
                        <div class="team-card lift-card reveal-item" data-team-card={i.to_string()} {onmouseenter} {onmouseleave}>
                            <div class="avatar-frame">
                                <img class="avatar-img" src={avatar} alt={member.name} />
                            </div>
                            <h3 class="member-name">{ member.name }</h3>
                            <p class="member-role">{ member.role }</p>
                            <div class="card-overlay"></div>
                        </div>
                    }
                }
            }
        })
        .collect();

    let tech_tiles: Html = TECHNOLOGIES
        .iter()
        .chain(TECHNOLOGIES.iter())
        .map(|tech| html! { <div class="tech-tile">{ *tech }</div> })
        .collect();

    let on_ticker_enter = {
        let stage = (*stage).clone();
        Callback::from(move |_: MouseEvent| stage.marquee_pause())
    };
    let on_ticker_leave = {
        let stage = (*stage).clone();
        Callback::from(move |_: MouseEvent| stage.marquee_resume())
    };

    html! {
        <div class="about-page">
            <section id="hero" class="hero">
                <div class="hero-glow"></div>
                <div class="hero-grid"></div>
                <div class="hero-inner">
                    <h1 class="hero-title">{ headline }</h1>
                    <div class="hero-underline"></div>
                    <p class="hero-description">{ presentation.description }</p>
                </div>
            </section>

            <section id="workflow" class="workflow-section">
                <div class="section-inner">
                    <h2 class="section-heading workflow-heading reveal-item">{ presentation.workflow_heading }</h2>
                    <div class="workflow-grid">
                        { workflow_cards }
                    </div>
                </div>
            </section>

            <section id="team" class="team-section">
                <div class="section-inner">
                    <div class="team-intro">
                        <h2 class="section-heading team-heading reveal-item">{ presentation.team_heading }</h2>
                        <p class="team-tagline">{ presentation.team_tagline }</p>
                        <div class="team-badges">
                            <span class="team-badge">{ presentation.team_badges[0] }</span>
                            <span class="team-badge team-badge-accent">{ presentation.team_badges[1] }</span>
                        </div>
                        <div class="team-divider"></div>
                    </div>
                    <div class="team-grid">
                        { team_cards }
                    </div>
                </div>
            </section>

            <section id="stack" class="stack-section">
                <h2 class="section-heading stack-heading reveal-item">{ presentation.stack_heading }</h2>
                <div class="tech-ticker" onmouseenter={on_ticker_enter} onmouseleave={on_ticker_leave}>
                    <div class="tech-fade"></div>
                    <div class="tech-track">
                        { tech_tiles }
                    </div>
                </div>
            </section>

            <section id="cta" class="cta-section">
                <div class="section-inner">
                    <h2 class="section-heading cta-heading reveal-item">{ presentation.cta_heading }</h2>
                    <button class="cta-button">{ presentation.cta_label }</button>
                </div>
            </section>

            <style>
                {r#"
                    .about-page {
                        min-height: 100vh;
                        background: #000;
                        color: #fff;
                        overflow-x: hidden;
                    }

                    .about-page section {
                        padding: 5rem 1rem;
                    }

                    .section-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                    }

                    .section-heading {
                        font-size: 2.5rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .reveal-item {
                        opacity: 0;
                        transform: translateY(100px);
                    }

                    /* Hero */

                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 40%, rgba(255,255,255,0.1), #000 60%);
                        pointer-events: none;
                    }

                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        pointer-events: none;
                        background-image: url("data:image/svg+xml;utf8,<svg width='30' height='30' viewBox='0 0 30 30' fill='none' xmlns='http://www.w3.org/2000/svg'><path d='M1.5 0H0V1.5M28.5 0H30V1.5M1.5 30H0V28.5M28.5 30H30V28.5' stroke='rgba(255,255,255,0.1)'/></svg>");
                        background-repeat: repeat;
                    }

                    .hero-inner {
                        position: relative;
                        max-width: 72rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .hero-title {
                        opacity: 0;
                        font-size: 4rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                        perspective: 600px;
                    }

                    .hero-char {
                        display: inline-block;
                        opacity: 0;
                        will-change: transform, opacity;
                    }

                    .hero-underline {
                        opacity: 0;
                        height: 4px;
                        width: 6rem;
                        margin: 1rem auto 0;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #00aaff, #22d3ee);
                    }

                    .hero-description {
                        opacity: 0;
                        font-size: 1.25rem;
                        line-height: 1.7;
                        color: rgba(255,255,255,0.8);
                        max-width: 48rem;
                        margin: 1.5rem auto 0;
                    }

                    /* Workflow */

                    .workflow-section {
                        background: #09090b;
                    }

                    .workflow-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }

                    .flip-card {
                        position: relative;
                        height: 20rem;
                        perspective: 1000px;
                        cursor: pointer;
                    }

                    .card-face {
                        position: absolute;
                        inset: 0;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: rgba(24, 24, 27, 0.8);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(255,255,255,0.2);
                        box-shadow: 0 0 30px rgba(255,255,255,0.05);
                        backface-visibility: hidden;
                        -webkit-backface-visibility: hidden;
                        will-change: transform;
                    }

                    .card-back {
                        transform: rotateY(180deg);
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }

                    .card-icon {
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }

                    .card-title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .card-hint {
                        font-size: 0.875rem;
                        color: rgba(255,255,255,0.6);
                    }

                    .card-detail {
                        font-size: 1.125rem;
                        font-weight: 500;
                        line-height: 1.7;
                        color: rgba(255,255,255,0.9);
                    }

                    .card-overlay {
                        position: absolute;
                        inset: 0;
                        border-radius: 0.5rem;
                        background: linear-gradient(135deg, rgba(255,255,255,0.1), transparent);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                        pointer-events: none;
                    }

                    .flip-card:hover .card-overlay,
                    .lift-card:hover .card-overlay {
                        opacity: 1;
                    }

                    /* Team */

                    .team-section {
                        background: linear-gradient(180deg, #000, #09090b);
                    }

                    .team-intro {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .team-intro .section-heading {
                        margin-bottom: 1rem;
                    }

                    .team-tagline {
                        color: #a1a1aa;
                        max-width: 42rem;
                        margin: 0 auto 1.5rem;
                    }

                    .team-badges {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-bottom: 2rem;
                    }

                    .team-badge {
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        color: #d4d4d8;
                        background: rgba(39, 39, 42, 0.5);
                        border: 1px solid rgba(63, 63, 70, 0.5);
                    }

                    .team-badge-accent {
                        color: #60a5fa;
                        background: rgba(0, 170, 255, 0.1);
                        border-color: rgba(0, 170, 255, 0.2);
                    }

                    .team-divider {
                        width: 8rem;
                        height: 4px;
                        margin: 0 auto;
                        background: linear-gradient(90deg, rgba(0,170,255,0), rgba(0,170,255,0.5), rgba(0,170,255,0));
                    }

                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .team-card {
                        border-radius: 0.75rem;
                    }

                    .team-card .card-face {
                        border-radius: 0.75rem;
                        border-color: #27272a;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }

                    .lift-card {
                        position: relative;
                        padding: 1.5rem;
                        background: rgba(24, 24, 27, 0.8);
                        backdrop-filter: blur(4px);
                        border: 1px solid #27272a;
                        box-shadow: 0 15px 35px rgba(0, 170, 255, 0.1);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        cursor: pointer;
                        will-change: transform;
                    }

                    .avatar-frame {
                        width: 6rem;
                        height: 6rem;
                        border-radius: 9999px;
                        overflow: hidden;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(180deg, rgba(0,170,255,0.2), rgba(0,170,255,0.1));
                        box-shadow: 0 0 25px #00aaff;
                    }

                    .avatar-img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.3s ease, filter 0.3s ease;
                        filter: brightness(1.05) contrast(1.05);
                    }

                    .team-card:hover .avatar-img {
                        transform: scale(1.1);
                        filter: brightness(1.1);
                    }

                    .member-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }

                    .member-role {
                        color: #60a5fa;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 1rem;
                    }

                    .member-note {
                        font-size: 1.05rem;
                        line-height: 1.7;
                        color: rgba(255,255,255,0.9);
                        text-align: center;
                    }

                    /* Tech ticker */

                    .stack-section {
                        background: #09090b;
                        overflow: hidden;
                        padding-left: 0;
                        padding-right: 0;
                    }

                    .tech-ticker {
                        position: relative;
                    }

                    .tech-fade {
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        pointer-events: none;
                        background: linear-gradient(90deg, #09090b, transparent 15%, transparent 85%, #09090b);
                    }

                    .tech-track {
                        display: flex;
                        gap: 2rem;
                        width: max-content;
                        padding: 2rem 0;
                        white-space: nowrap;
                        will-change: transform;
                    }

                    .tech-tile {
                        padding: 0.75rem 1.5rem;
                        font-weight: 500;
                        border-radius: 0.5rem;
                        filter: drop-shadow(0 0 10px rgba(255,255,255,0.1));
                        transition: background 0.3s ease, filter 0.3s ease;
                    }

                    .tech-tile:hover {
                        background: rgba(255,255,255,0.05);
                        filter: drop-shadow(0 0 20px rgba(255,255,255,0.2));
                    }

                    /* CTA */

                    .cta-section {
                        background: #000;
                        text-align: center;
                    }

                    .cta-button {
                        padding: 1.25rem 2.5rem;
                        background: #fff;
                        color: #000;
                        border: none;
                        border-radius: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        cursor: pointer;
                        box-shadow: 0 0 30px rgba(255,255,255,0.2);
                        transition: background 0.3s ease;
                    }

                    .cta-button:hover {
                        background: #f4f4f5;
                    }

                    @media (max-width: 1024px) {
                        .workflow-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .team-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 768px) {
                        .hero-title {
                            font-size: 2.5rem;
                        }

                        .section-heading {
                            font-size: 2rem;
                        }

                        .workflow-grid,
                        .team-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

fn find(document: &Document, selector: &str) -> Element {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing animation target: {selector}"))
}

fn find_in(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing animation target: {selector}"))
}

/// Document-space top and bottom of an element at the current layout.
fn document_bounds(element: &Element, scroll_y: f64) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    let top = rect.top() + scroll_y;
    (top, top + rect.height())
}

fn build_rig(stage: &Stage, variant: Variant) {
    let presentation = presentation_for(variant);
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let viewport_h = window.inner_height().unwrap().as_f64().unwrap();
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    // Hero entrance: one timeline, steps in declared order with overlaps.
    let title_id = stage.track(find(&document, ".hero-title"));
    let mut hero = Timeline::new();
    hero.set(title_id, Prop::Opacity, 1.0, At::Abs(0.0));
    let chars = document.query_selector_all(".hero-char").unwrap();
    for i in 0..chars.length() {
        let span: Element = chars.item(i).unwrap().dyn_into().unwrap();
        let id = stage.track(span);
        hero.tween(
            id,
            vec![
                PropSpan::new(Prop::Opacity, 0.0, 1.0),
                PropSpan::new(Prop::Scale, 0.0, 1.0),
                PropSpan::new(Prop::TranslateY, 50.0, 0.0),
                PropSpan::new(Prop::RotateX, -90.0, 0.0),
            ],
            0.8,
            Ease::BackOut(1.7),
            At::Abs(i as f64 * 0.02),
        );
    }
    let underline_id = stage.track(find(&document, ".hero-underline"));
    hero.tween(
        underline_id,
        vec![PropSpan::new(Prop::Opacity, 0.0, 1.0)],
        1.0,
        Ease::PowerOut(3),
        At::Offset(-0.2),
    );
    let description_id = stage.track(find(&document, ".hero-description"));
    hero.tween(
        description_id,
        vec![
            PropSpan::new(Prop::Opacity, 0.0, 1.0),
            PropSpan::new(Prop::TranslateY, 40.0, 0.0),
        ],
        1.2,
        Ease::PowerOut(4),
        At::Offset(-0.4),
    );
    stage.add_timeline(hero);

    // Section headings reveal on their own trigger, at 80% viewport height.
    for selector in [".workflow-heading", ".team-heading", ".stack-heading", ".cta-heading"] {
        let heading = find(&document, selector);
        let (top, bottom) = document_bounds(&heading, scroll_y);
        let id = stage.track(heading);
        stage.add_reveal(RevealSpec {
            target: id,
            zone: TriggerZone::new(top - viewport_h * 0.8, bottom - viewport_h * 0.2),
            initial: vec![(Prop::TranslateY, 100.0), (Prop::Opacity, 0.0)],
            duration: REVEAL_SECONDS,
            delay: 0.0,
            ease: Ease::PowerOut(2),
        });
    }

    // Workflow cards share the section trigger and stagger by index.
    let workflow_section = find(&document, "#workflow");
    let (workflow_top, workflow_bottom) = document_bounds(&workflow_section, scroll_y);
    let workflow_zone = TriggerZone::new(workflow_top - viewport_h, workflow_bottom);
    let workflow_cards = document.query_selector_all("[data-workflow]").unwrap();
    for i in 0..workflow_cards.length() {
        let card: Element = workflow_cards.item(i).unwrap().dyn_into().unwrap();
        let front_id = stage.track(find_in(&card, ".card-front"));
        let back_id = stage.track(find_in(&card, ".card-back"));
        let card_id = stage.track(card);
        stage.add_reveal(RevealSpec {
            target: card_id,
            zone: workflow_zone,
            initial: vec![(Prop::TranslateY, 100.0), (Prop::Opacity, 0.0)],
            duration: REVEAL_SECONDS,
            delay: i as f64 * REVEAL_STAGGER_SECONDS,
            ease: Ease::PowerOut(4),
        });
        stage.add_flip(front_id, back_id);
    }

    // Team cards: same reveal contract, hover wired per variant.
    let team_section = find(&document, "#team");
    let (team_top, team_bottom) = document_bounds(&team_section, scroll_y);
    let team_zone = TriggerZone::new(team_top - viewport_h, team_bottom);
    let team_cards = document.query_selector_all("[data-team-card]").unwrap();
    for i in 0..team_cards.length() {
        let card: Element = team_cards.item(i).unwrap().dyn_into().unwrap();
        let card_id = stage.track(card.clone());
        match presentation.team_hover {
            TeamHover::Flip => {
                let front_id = stage.track(find_in(&card, ".team-front"));
                let back_id = stage.track(find_in(&card, ".team-back"));
                stage.add_flip(front_id, back_id);
            }
            TeamHover::Lift => {
                let avatar_id = stage.track(find_in(&card, ".avatar-frame"));
                stage.set_glow(card_id, |v| {
                    format!(
                        "0 {:.1}px {:.1}px rgba(0, 170, 255, {:.3})",
                        15.0 + 10.0 * v,
                        35.0 + 15.0 * v,
                        0.1 + 0.05 * v
                    )
                });
                stage.set_glow(avatar_id, |v| format!("0 0 {:.1}px #00aaff", 25.0 + 10.0 * v));
                let mut lift = Timeline::new();
                lift.tween(
                    card_id,
                    vec![
                        PropSpan::new(Prop::Scale, 1.0, 1.02),
                        PropSpan::new(Prop::RotateX, 0.0, 5.0),
                        PropSpan::new(Prop::RotateY, 0.0, 5.0),
                        PropSpan::new(Prop::Glow, 0.0, 1.0),
                    ],
                    LIFT_SECONDS,
                    Ease::PowerOut(3),
                    At::Abs(0.0),
                );
                lift.tween(
                    avatar_id,
                    vec![PropSpan::new(Prop::Glow, 0.0, 1.0)],
                    LIFT_SECONDS,
                    Ease::PowerOut(3),
                    At::Abs(0.0),
                );
                stage.add_hover(lift);
            }
        }
        stage.add_reveal(RevealSpec {
            target: card_id,
            zone: team_zone,
            initial: vec![(Prop::TranslateY, 100.0), (Prop::Opacity, 0.0)],
            duration: REVEAL_SECONDS,
            delay: i as f64 * REVEAL_STAGGER_SECONDS,
            ease: Ease::PowerOut(4),
        });
    }

    // Ticker track, duplicated content wrapping at half its own width.
    let track_id = stage.track(find(&document, ".tech-track"));
    stage.use_percent_x(track_id);
    stage.set_marquee(track_id, MarqueeController::new(LOOP_SECONDS));

    // CTA glow breathes indefinitely.
    let cta_id = stage.track(find(&document, ".cta-button"));
    stage.set_glow(cta_id, |v| {
        format!("0 0 30px rgba(255, 255, 255, 0.2), 0 0 {:.1}px #ff5e00", 30.0 * v)
    });
    let mut pulse = Timeline::new();
    pulse.tween(
        cta_id,
        vec![PropSpan::new(Prop::Glow, 0.0, 1.0)],
        1.5,
        Ease::PowerInOut(2),
        At::Abs(0.0),
    );
    pulse.set_repeat(Repeat::Yoyo);
    stage.add_timeline(pulse);

    stage.start();
    info!("motion rig armed");
}
