//! DOM binding for the motion controllers. The stage tracks the elements a
//! view registered, runs the animation-frame loop, owns the scroll listener,
//! and flushes sampled property values into inline styles. `stop` removes
//! the listener, cancels the pending frame and drops every registration, so
//! nothing keeps mutating detached elements after teardown.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};

use super::flip::{FlipCard, HoverTween};
use super::marquee::MarqueeController;
use super::reveal::{RevealSpec, ScrollRevealController};
use super::timeline::{Prop, StyleUpdate, TargetId, Timeline};

type GlowFormat = Box<dyn Fn(f64) -> String>;

#[derive(Clone, Copy, PartialEq, Default)]
struct Visual {
    opacity: Option<f64>,
    translate_x: Option<f64>,
    translate_y: Option<f64>,
    scale: Option<f64>,
    rotate_x: Option<f64>,
    rotate_y: Option<f64>,
    glow: Option<f64>,
}

impl Visual {
    fn transform_parts(&self) -> (Option<f64>, Option<f64>, Option<f64>, Option<f64>, Option<f64>) {
        (self.translate_x, self.translate_y, self.scale, self.rotate_x, self.rotate_y)
    }
}

struct Tracked {
    element: HtmlElement,
    glow_format: Option<GlowFormat>,
    percent_x: bool,
    pending: Visual,
    applied: Visual,
}

struct StageInner {
    targets: Vec<Tracked>,
    reveals: ScrollRevealController,
    flips: Vec<FlipCard>,
    hovers: Vec<HoverTween>,
    timelines: Vec<Timeline>,
    marquee: Option<(TargetId, MarqueeController)>,
    raf: Option<AnimationFrame>,
    last_frame_ms: Option<f64>,
    scroll_callback: Option<Closure<dyn FnMut()>>,
    scratch: Vec<StyleUpdate>,
    running: bool,
}

impl StageInner {
    fn new() -> Self {
        Self {
            targets: Vec::new(),
            reveals: ScrollRevealController::new(),
            flips: Vec::new(),
            hovers: Vec::new(),
            timelines: Vec::new(),
            marquee: None,
            raf: None,
            last_frame_ms: None,
            scroll_callback: None,
            scratch: Vec::new(),
            running: false,
        }
    }

    fn apply(&mut self, update: StyleUpdate) {
        let visual = &mut self.targets[update.target].pending;
        match update.prop {
            Prop::Opacity => visual.opacity = Some(update.value),
            Prop::TranslateX => visual.translate_x = Some(update.value),
            Prop::TranslateY => visual.translate_y = Some(update.value),
            Prop::Scale => visual.scale = Some(update.value),
            Prop::RotateX => visual.rotate_x = Some(update.value),
            Prop::RotateY => visual.rotate_y = Some(update.value),
            Prop::Glow => visual.glow = Some(update.value),
        }
    }

    fn flush(&mut self) {
        for tracked in &mut self.targets {
            if tracked.pending == tracked.applied {
                continue;
            }
            let style = tracked.element.style();
            if tracked.pending.opacity != tracked.applied.opacity {
                if let Some(opacity) = tracked.pending.opacity {
                    style.set_property("opacity", &format!("{opacity:.4}")).unwrap();
                }
            }
            if tracked.pending.transform_parts() != tracked.applied.transform_parts() {
                let mut parts = Vec::new();
                if let Some(x) = tracked.pending.translate_x {
                    if tracked.percent_x {
                        parts.push(format!("translateX({x:.4}%)"));
                    } else {
                        parts.push(format!("translateX({x:.3}px)"));
                    }
                }
                if let Some(y) = tracked.pending.translate_y {
                    parts.push(format!("translateY({y:.3}px)"));
                }
                if let Some(scale) = tracked.pending.scale {
                    parts.push(format!("scale({scale:.4})"));
                }
                if let Some(deg) = tracked.pending.rotate_x {
                    parts.push(format!("rotateX({deg:.3}deg)"));
                }
                if let Some(deg) = tracked.pending.rotate_y {
                    parts.push(format!("rotateY({deg:.3}deg)"));
                }
                style.set_property("transform", &parts.join(" ")).unwrap();
            }
            if tracked.pending.glow != tracked.applied.glow {
                if let (Some(value), Some(format_glow)) =
                    (tracked.pending.glow, tracked.glow_format.as_ref())
                {
                    style.set_property("box-shadow", &format_glow(value)).unwrap();
                }
            }
            tracked.applied = tracked.pending;
        }
    }

    fn step(&mut self, dt: f64) {
        let mut updates = std::mem::take(&mut self.scratch);
        updates.clear();
        self.reveals.tick(dt, &mut updates);
        for flip in &mut self.flips {
            flip.tick(dt, &mut updates);
        }
        for hover in &mut self.hovers {
            hover.tick(dt, &mut updates);
        }
        for timeline in &mut self.timelines {
            timeline.tick(dt, &mut updates);
        }
        if let Some((target, marquee)) = &mut self.marquee {
            let offset = marquee.tick(dt);
            updates.push(StyleUpdate { target: *target, prop: Prop::TranslateX, value: offset });
        }
        for update in &updates {
            self.apply(*update);
        }
        self.flush();
        self.scratch = updates;
    }

    fn teardown(&mut self) {
        self.running = false;
        self.raf = None;
        self.last_frame_ms = None;
        if let Some(callback) = self.scroll_callback.take() {
            if let Some(window) = window() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }
        }
        self.reveals.clear();
        self.flips.clear();
        self.hovers.clear();
        self.timelines.clear();
        self.marquee = None;
        self.targets.clear();
    }
}

/// Cloneable handle to one view's animation rig.
#[derive(Clone)]
pub struct Stage {
    inner: Rc<RefCell<StageInner>>,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    pub fn new() -> Self {
        Self { inner: Rc::new(RefCell::new(StageInner::new())) }
    }

    /// Register an element and get the handle the controllers address it by.
    pub fn track(&self, element: Element) -> TargetId {
        let element: HtmlElement = element
            .dyn_into()
            .unwrap_or_else(|_| panic!("animation target is not an HtmlElement"));
        let mut inner = self.inner.borrow_mut();
        inner.targets.push(Tracked {
            element,
            glow_format: None,
            percent_x: false,
            pending: Visual::default(),
            applied: Visual::default(),
        });
        inner.targets.len() - 1
    }

    /// Map this target's glow intensity to a box-shadow string.
    pub fn set_glow(&self, target: TargetId, format: impl Fn(f64) -> String + 'static) {
        self.inner.borrow_mut().targets[target].glow_format = Some(Box::new(format));
    }

    /// Interpret this target's horizontal translation in percent of its own
    /// width rather than pixels.
    pub fn use_percent_x(&self, target: TargetId) {
        self.inner.borrow_mut().targets[target].percent_x = true;
    }

    pub fn add_reveal(&self, spec: RevealSpec) {
        self.inner.borrow_mut().reveals.register(spec);
    }

    pub fn add_timeline(&self, timeline: Timeline) {
        self.inner.borrow_mut().timelines.push(timeline);
    }

    pub fn add_flip(&self, front: TargetId, back: TargetId) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.flips.push(FlipCard::new(front, back));
        inner.flips.len() - 1
    }

    pub fn flip_enter(&self, index: usize) {
        if let Some(flip) = self.inner.borrow_mut().flips.get_mut(index) {
            flip.pointer_enter();
        }
    }

    pub fn flip_leave(&self, index: usize) {
        if let Some(flip) = self.inner.borrow_mut().flips.get_mut(index) {
            flip.pointer_leave();
        }
    }

    pub fn add_hover(&self, timeline: Timeline) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.hovers.push(HoverTween::new(timeline));
        inner.hovers.len() - 1
    }

    pub fn hover_enter(&self, index: usize) {
        if let Some(hover) = self.inner.borrow_mut().hovers.get_mut(index) {
            hover.enter();
        }
    }

    pub fn hover_leave(&self, index: usize) {
        if let Some(hover) = self.inner.borrow_mut().hovers.get_mut(index) {
            hover.leave();
        }
    }

    pub fn set_marquee(&self, target: TargetId, marquee: MarqueeController) {
        self.inner.borrow_mut().marquee = Some((target, marquee));
    }

    pub fn marquee_pause(&self) {
        if let Some((_, marquee)) = self.inner.borrow_mut().marquee.as_mut() {
            marquee.pause();
        }
    }

    pub fn marquee_resume(&self) {
        if let Some((_, marquee)) = self.inner.borrow_mut().marquee.as_mut() {
            marquee.resume();
        }
    }

    /// Install the scroll listener, deliver the current position and start
    /// the frame loop.
    pub fn start(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.running {
                return;
            }
            inner.running = true;

            let window = window().unwrap();
            let for_scroll = self.inner.clone();
            let callback = Closure::wrap(Box::new(move || {
                let y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                for_scroll.borrow_mut().reveals.on_scroll_position_changed(y);
            }) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                .unwrap();
            inner.scroll_callback = Some(callback);

            let y = window.scroll_y().unwrap_or(0.0);
            inner.reveals.on_scroll_position_changed(y);
        }
        Self::arm(self.inner.clone());
    }

    /// Deterministic teardown of everything `start` installed.
    pub fn stop(&self) {
        self.inner.borrow_mut().teardown();
    }

    fn arm(inner: Rc<RefCell<StageInner>>) {
        let for_frame = inner.clone();
        let handle = request_animation_frame(move |now_ms| {
            Self::frame(&for_frame, now_ms);
        });
        inner.borrow_mut().raf = Some(handle);
    }

    fn frame(inner: &Rc<RefCell<StageInner>>, now_ms: f64) {
        {
            let mut stage = inner.borrow_mut();
            stage.raf.take();
            if !stage.running {
                return;
            }
            let dt = match stage.last_frame_ms {
                Some(prev) => ((now_ms - prev) / 1000.0).clamp(0.0, 0.1),
                None => 0.0,
            };
            stage.last_frame_ms = Some(now_ms);
            stage.step(dt);
        }
        Self::arm(inner.clone());
    }
}
