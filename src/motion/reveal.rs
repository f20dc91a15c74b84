//! Scroll-position driven reveals. Each registered target owns its trigger
//! zone and its own playback, so a view can tear the whole set down without
//! touching any shared registry.

use super::ease::Ease;
use super::timeline::{At, Prop, PropSpan, StyleUpdate, TargetId, Timeline};

/// Document-space bounds within which a reveal is armed. Only the start
/// boundary drives play/reverse; the end bound completes the zone record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerZone {
    pub start: f64,
    pub end: f64,
}

impl TriggerZone {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealing,
    Revealed,
    Reversing,
}

#[derive(Clone, Debug)]
pub struct RevealSpec {
    pub target: TargetId,
    pub zone: TriggerZone,
    /// Property values the element starts from while hidden.
    pub initial: Vec<(Prop, f64)>,
    pub duration: f64,
    /// Stagger lead-in, typically index within the sibling group times a step.
    pub delay: f64,
    pub ease: Ease,
}

struct Entry {
    target: TargetId,
    zone: TriggerZone,
    initial: Vec<(Prop, f64)>,
    delay: f64,
    timeline: Timeline,
    state: RevealState,
}

#[derive(Default)]
pub struct ScrollRevealController {
    entries: Vec<Entry>,
}

impl ScrollRevealController {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn register(&mut self, spec: RevealSpec) {
        let spans = spec
            .initial
            .iter()
            .map(|&(prop, from)| PropSpan::to_resting(prop, from))
            .collect();
        let mut timeline = Timeline::new();
        timeline.tween(spec.target, spans, spec.duration, spec.ease, At::Abs(spec.delay));
        self.entries.push(Entry {
            target: spec.target,
            zone: spec.zone,
            initial: spec.initial,
            delay: spec.delay,
            timeline,
            state: RevealState::Hidden,
        });
    }

    /// Drops the target and cancels whatever playback it had in flight.
    pub fn unregister(&mut self, target: TargetId) {
        self.entries.retain(|e| e.target != target);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn state_of(&self, target: TargetId) -> Option<RevealState> {
        self.entries.iter().find(|e| e.target == target).map(|e| e.state)
    }

    /// Arm or reverse targets whose zone start the viewport has crossed.
    /// Re-delivering a position that leaves a target on its current side of
    /// the boundary is a no-op.
    pub fn on_scroll_position_changed(&mut self, viewport_y: f64) {
        for entry in &mut self.entries {
            let armed = viewport_y >= entry.zone.start;
            match entry.state {
                RevealState::Hidden | RevealState::Reversing if armed => {
                    entry.timeline.play_forward();
                    entry.state = RevealState::Revealing;
                }
                RevealState::Revealed | RevealState::Revealing if !armed => {
                    entry.timeline.play_backward();
                    entry.state = RevealState::Reversing;
                }
                _ => {}
            }
        }
    }

    pub fn tick(&mut self, dt: f64, out: &mut Vec<StyleUpdate>) {
        for entry in &mut self.entries {
            match entry.state {
                RevealState::Hidden => {
                    // Pinned to the registered initial transform until armed.
                    push_initial(entry, out);
                }
                RevealState::Revealed => {
                    entry.timeline.sample_into(out);
                }
                RevealState::Revealing => {
                    entry.timeline.advance(dt);
                    entry.timeline.sample_into(out);
                    if entry.timeline.at_end() {
                        entry.state = RevealState::Revealed;
                    }
                }
                RevealState::Reversing => {
                    entry.timeline.advance(dt);
                    // The stagger lead-in has no visual content on the way
                    // back, so collapse it once values reach the initial
                    // transform.
                    if entry.timeline.elapsed() <= entry.delay {
                        entry.timeline.seek(0.0);
                    }
                    entry.timeline.sample_into(out);
                    if entry.timeline.at_start() {
                        entry.state = RevealState::Hidden;
                        push_initial(entry, out);
                    }
                }
            }
        }
    }
}

fn push_initial(entry: &Entry, out: &mut Vec<StyleUpdate>) {
    for &(prop, value) in &entry.initial {
        out.push(StyleUpdate { target: entry.target, prop, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn card_spec(target: TargetId, zone_start: f64, delay: f64) -> RevealSpec {
        RevealSpec {
            target,
            zone: TriggerZone::new(zone_start, zone_start + 700.0),
            initial: vec![(Prop::TranslateY, 100.0), (Prop::Opacity, 0.0)],
            duration: 1.0,
            delay,
            ease: Ease::PowerOut(4),
        }
    }

    fn value_of(updates: &[StyleUpdate], target: TargetId, prop: Prop) -> Option<f64> {
        updates
            .iter()
            .rev()
            .find(|u| u.target == target && u.prop == prop)
            .map(|u| u.value)
    }

    fn run(ctl: &mut ScrollRevealController, seconds: f64) -> Vec<StyleUpdate> {
        let mut out = Vec::new();
        let frames = (seconds / FRAME).ceil() as usize;
        for _ in 0..frames {
            out.clear();
            ctl.tick(FRAME, &mut out);
        }
        out
    }

    #[test]
    fn crossing_the_zone_start_reveals_within_one_cycle() {
        let mut ctl = ScrollRevealController::new();
        ctl.register(card_spec(0, 700.0, 0.0));

        ctl.on_scroll_position_changed(700.0);
        let out = run(&mut ctl, 1.1);
        assert_eq!(value_of(&out, 0, Prop::Opacity), Some(1.0));
        assert_eq!(value_of(&out, 0, Prop::TranslateY), Some(0.0));
        assert_eq!(ctl.state_of(0), Some(RevealState::Revealed));
    }

    #[test]
    fn scroll_back_restores_the_exact_initial_transform() {
        let mut ctl = ScrollRevealController::new();
        ctl.register(card_spec(0, 700.0, 0.2));

        ctl.on_scroll_position_changed(900.0);
        run(&mut ctl, 2.0);
        ctl.on_scroll_position_changed(300.0);
        let out = run(&mut ctl, 2.0);
        assert_eq!(value_of(&out, 0, Prop::TranslateY), Some(100.0));
        assert_eq!(value_of(&out, 0, Prop::Opacity), Some(0.0));
        assert_eq!(ctl.state_of(0), Some(RevealState::Hidden));
    }

    #[test]
    fn same_position_twice_does_not_retrigger() {
        let mut ctl = ScrollRevealController::new();
        ctl.register(card_spec(0, 700.0, 0.0));

        ctl.on_scroll_position_changed(750.0);
        run(&mut ctl, 1.5);
        assert_eq!(ctl.state_of(0), Some(RevealState::Revealed));

        ctl.on_scroll_position_changed(750.0);
        assert_eq!(ctl.state_of(0), Some(RevealState::Revealed));
        let out = run(&mut ctl, 0.1);
        assert_eq!(value_of(&out, 0, Prop::Opacity), Some(1.0));
    }

    #[test]
    fn reversal_mid_reveal_is_continuous() {
        let mut ctl = ScrollRevealController::new();
        ctl.register(card_spec(0, 700.0, 0.0));

        ctl.on_scroll_position_changed(800.0);
        let out = run(&mut ctl, 0.5);
        let mid = value_of(&out, 0, Prop::Opacity).unwrap();
        assert!(mid > 0.0 && mid < 1.0);

        ctl.on_scroll_position_changed(100.0);
        assert_eq!(ctl.state_of(0), Some(RevealState::Reversing));
        let mut first = Vec::new();
        ctl.tick(FRAME, &mut first);
        let next = value_of(&first, 0, Prop::Opacity).unwrap();
        assert!((next - mid).abs() < 0.1, "reverse jumped from {mid} to {next}");
    }

    #[test]
    fn a_zone_never_entered_stays_at_initial_indefinitely() {
        let mut ctl = ScrollRevealController::new();
        ctl.register(card_spec(0, 5000.0, 0.0));

        ctl.on_scroll_position_changed(2000.0);
        let out = run(&mut ctl, 3.0);
        assert_eq!(value_of(&out, 0, Prop::TranslateY), Some(100.0));
        assert_eq!(value_of(&out, 0, Prop::Opacity), Some(0.0));
        assert_eq!(ctl.state_of(0), Some(RevealState::Hidden));
    }

    #[test]
    fn unregister_cancels_in_flight_playback() {
        let mut ctl = ScrollRevealController::new();
        ctl.register(card_spec(0, 700.0, 0.0));
        ctl.on_scroll_position_changed(800.0);
        run(&mut ctl, 0.3);

        ctl.unregister(0);
        assert!(ctl.is_empty());
        let out = run(&mut ctl, 0.5);
        assert!(out.is_empty());
    }

    #[test]
    fn staggered_siblings_reveal_in_index_order_within_budget() {
        // Four cards over a section at y = 1500..2200, staggered by 0.2s,
        // viewport scrolled to y = 2000. Everything must be at rest within
        // 2.6s of the trigger firing, in index order.
        let mut ctl = ScrollRevealController::new();
        for i in 0..4 {
            ctl.register(card_spec(i, 700.0, i as f64 * 0.2));
        }
        ctl.on_scroll_position_changed(2000.0);

        let mut done_at = [f64::MAX; 4];
        let mut out = Vec::new();
        let mut elapsed = 0.0;
        while elapsed < 2.6 {
            out.clear();
            ctl.tick(FRAME, &mut out);
            elapsed += FRAME;
            for i in 0..4 {
                if done_at[i] == f64::MAX && value_of(&out, i, Prop::Opacity) == Some(1.0) {
                    done_at[i] = elapsed;
                }
            }
        }
        for i in 0..4 {
            assert!(done_at[i] <= 2.6, "card {i} not at rest in time");
        }
        assert!(done_at[0] < done_at[1]);
        assert!(done_at[1] < done_at[2]);
        assert!(done_at[2] < done_at[3]);
    }
}
