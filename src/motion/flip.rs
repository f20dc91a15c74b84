//! Pointer-driven reversible tweens: the generic hover wrapper and the
//! two-faced card flip built on top of it.

use super::ease::Ease;
use super::timeline::{At, Direction, Prop, PropSpan, StyleUpdate, TargetId, Timeline};

pub const FLIP_SECONDS: f64 = 0.6;

/// A timeline that plays toward its end while the pointer is over the
/// element and back toward its start once it leaves. A pointer event that
/// lands mid-transition reverses playback from the current point instead of
/// restarting, so there is never more than one transition in flight.
pub struct HoverTween {
    timeline: Timeline,
    engaged: bool,
}

impl HoverTween {
    pub fn new(mut timeline: Timeline) -> Self {
        timeline.pause();
        Self { timeline, engaged: false }
    }

    pub fn enter(&mut self) {
        self.engaged = true;
        self.timeline.play_forward();
    }

    pub fn leave(&mut self) {
        if self.engaged {
            self.timeline.play_backward();
        }
    }

    pub fn tick(&mut self, dt: f64, out: &mut Vec<StyleUpdate>) {
        if self.engaged {
            self.timeline.tick(dt, out);
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipState {
    Front,
    FlippingToBack,
    Back,
    FlippingToFront,
}

/// Two card faces phase-locked on one shared timeline: the front rotates
/// 0° to 180° while the back rotates 180° to 0°, so their sum stays constant
/// through every frame and the rotation direction never snaps.
pub struct FlipCard {
    hover: HoverTween,
}

impl FlipCard {
    pub fn new(front: TargetId, back: TargetId) -> Self {
        let mut timeline = Timeline::new();
        timeline.tween(
            front,
            vec![PropSpan::new(Prop::RotateY, 0.0, 180.0)],
            FLIP_SECONDS,
            Ease::PowerInOut(3),
            At::Abs(0.0),
        );
        timeline.tween(
            back,
            vec![PropSpan::new(Prop::RotateY, 180.0, 0.0)],
            FLIP_SECONDS,
            Ease::PowerInOut(3),
            At::Abs(0.0),
        );
        Self { hover: HoverTween::new(timeline) }
    }

    pub fn pointer_enter(&mut self) {
        self.hover.enter();
    }

    pub fn pointer_leave(&mut self) {
        self.hover.leave();
    }

    pub fn tick(&mut self, dt: f64, out: &mut Vec<StyleUpdate>) {
        self.hover.tick(dt, out);
    }

    pub fn state(&self) -> FlipState {
        let timeline = self.hover.timeline();
        if timeline.is_paused() {
            return FlipState::Front;
        }
        match timeline.direction() {
            Direction::Forward => {
                if timeline.at_end() {
                    FlipState::Back
                } else {
                    FlipState::FlippingToBack
                }
            }
            Direction::Backward => {
                if timeline.at_start() {
                    FlipState::Front
                } else {
                    FlipState::FlippingToFront
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONT: TargetId = 0;
    const BACK: TargetId = 1;
    const FRAME: f64 = 1.0 / 60.0;

    fn value_of(updates: &[StyleUpdate], target: TargetId) -> Option<f64> {
        updates
            .iter()
            .rev()
            .find(|u| u.target == target && u.prop == Prop::RotateY)
            .map(|u| u.value)
    }

    #[test]
    fn resting_card_shows_the_front_and_emits_nothing() {
        let mut card = FlipCard::new(FRONT, BACK);
        assert_eq!(card.state(), FlipState::Front);
        let mut out = Vec::new();
        card.tick(1.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn enter_flips_to_back_at_nominal_angles() {
        let mut card = FlipCard::new(FRONT, BACK);
        card.pointer_enter();
        assert_eq!(card.state(), FlipState::FlippingToBack);

        let mut out = Vec::new();
        card.tick(FLIP_SECONDS + 0.1, &mut out);
        assert_eq!(card.state(), FlipState::Back);
        assert_eq!(value_of(&out, FRONT), Some(180.0));
        assert_eq!(value_of(&out, BACK), Some(0.0));
    }

    #[test]
    fn faces_stay_phase_locked_every_frame() {
        let mut card = FlipCard::new(FRONT, BACK);
        card.pointer_enter();
        let mut out = Vec::new();
        for _ in 0..30 {
            out.clear();
            card.tick(FRAME, &mut out);
            let front = value_of(&out, FRONT).unwrap();
            let back = value_of(&out, BACK).unwrap();
            assert!((front + back - 180.0).abs() < 1e-9);
        }
    }

    #[test]
    fn leave_mid_flip_reverses_from_the_current_angle_to_rest() {
        let mut card = FlipCard::new(FRONT, BACK);
        card.pointer_enter();
        let mut out = Vec::new();
        card.tick(0.25, &mut out);
        let mid_front = value_of(&out, FRONT).unwrap();
        assert!(mid_front > 0.0 && mid_front < 180.0);

        card.pointer_leave();
        assert_eq!(card.state(), FlipState::FlippingToFront);

        out.clear();
        card.tick(FRAME, &mut out);
        let next_front = value_of(&out, FRONT).unwrap();
        assert!((next_front - mid_front).abs() < 20.0, "flip restarted instead of reversing");

        out.clear();
        card.tick(1.0, &mut out);
        assert_eq!(card.state(), FlipState::Front);
        assert_eq!(value_of(&out, FRONT), Some(0.0));
        assert_eq!(value_of(&out, BACK), Some(180.0));
    }

    #[test]
    fn reenter_during_reverse_flips_forward_again_without_queuing() {
        let mut card = FlipCard::new(FRONT, BACK);
        card.pointer_enter();
        let mut out = Vec::new();
        card.tick(0.4, &mut out);
        card.pointer_leave();
        card.tick(0.1, &mut out);

        out.clear();
        card.tick(FRAME, &mut out);
        let reversing = value_of(&out, FRONT).unwrap();

        card.pointer_enter();
        assert_eq!(card.state(), FlipState::FlippingToBack);
        out.clear();
        card.tick(FRAME, &mut out);
        let resumed = value_of(&out, FRONT).unwrap();
        assert!(resumed >= reversing - 1e-9);

        out.clear();
        card.tick(1.0, &mut out);
        assert_eq!(card.state(), FlipState::Back);
    }

    #[test]
    fn leave_before_any_enter_is_a_no_op() {
        let mut card = FlipCard::new(FRONT, BACK);
        card.pointer_leave();
        assert_eq!(card.state(), FlipState::Front);
        let mut out = Vec::new();
        card.tick(1.0, &mut out);
        assert!(out.is_empty());
    }
}
