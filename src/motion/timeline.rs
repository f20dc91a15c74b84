//! A frame-driven interpolator: ordered segments of
//! (target, property, start value, end value, duration, easing) sampled
//! against an elapsed-time cursor that can play in either direction.

use super::ease::{lerp, Ease};

pub type TargetId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    RotateX,
    RotateY,
    /// Normalized glow intensity, mapped to a shadow by the presentation layer.
    Glow,
}

impl Prop {
    /// The value a property holds when an element is at rest.
    pub fn resting(self) -> f64 {
        match self {
            Prop::Opacity | Prop::Scale => 1.0,
            _ => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PropSpan {
    pub prop: Prop,
    pub from: f64,
    pub to: f64,
}

impl PropSpan {
    pub fn new(prop: Prop, from: f64, to: f64) -> Self {
        Self { prop, from, to }
    }

    pub fn to_resting(prop: Prop, from: f64) -> Self {
        Self { prop, from, to: prop.resting() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleUpdate {
    pub target: TargetId,
    pub prop: Prop,
    pub value: f64,
}

/// Placement of a new segment on the timeline.
#[derive(Clone, Copy, Debug)]
pub enum At {
    /// Immediately after everything added so far.
    Seq,
    /// Relative to the current end; negative values overlap the predecessor.
    Offset(f64),
    /// Absolute time from the timeline start.
    Abs(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    None,
    /// Bounce between start and end indefinitely.
    Yoyo,
}

#[derive(Clone, Debug)]
struct Segment {
    target: TargetId,
    spans: Vec<PropSpan>,
    start: f64,
    duration: f64,
    ease: Ease,
}

#[derive(Clone, Debug)]
pub struct Timeline {
    segments: Vec<Segment>,
    total: f64,
    elapsed: f64,
    direction: Direction,
    repeat: Repeat,
    paused: bool,
    settled: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            total: 0.0,
            elapsed: 0.0,
            direction: Direction::Forward,
            repeat: Repeat::None,
            paused: false,
            settled: false,
        }
    }

    pub fn tween(
        &mut self,
        target: TargetId,
        spans: Vec<PropSpan>,
        duration: f64,
        ease: Ease,
        at: At,
    ) -> &mut Self {
        let start = match at {
            At::Seq => self.total,
            At::Offset(offset) => (self.total + offset).max(0.0),
            At::Abs(time) => time.max(0.0),
        };
        self.total = self.total.max(start + duration);
        self.segments.push(Segment { target, spans, start, duration, ease });
        self
    }

    /// A zero-duration write, applied once the cursor reaches `at`.
    pub fn set(&mut self, target: TargetId, prop: Prop, value: f64, at: At) -> &mut Self {
        self.tween(target, vec![PropSpan::new(prop, value, value)], 0.0, Ease::Linear, at)
    }

    pub fn set_repeat(&mut self, repeat: Repeat) -> &mut Self {
        self.repeat = repeat;
        self
    }

    /// Hold at the current point until a play call resumes the cursor.
    pub fn pause(&mut self) -> &mut Self {
        self.paused = true;
        self
    }

    pub fn play_forward(&mut self) {
        self.direction = Direction::Forward;
        self.paused = false;
        self.settled = false;
    }

    pub fn play_backward(&mut self) {
        self.direction = Direction::Backward;
        self.paused = false;
        self.settled = false;
    }

    pub fn seek(&mut self, time: f64) {
        self.elapsed = time.clamp(0.0, self.total);
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn total_duration(&self) -> f64 {
        self.total
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn at_start(&self) -> bool {
        self.elapsed <= 0.0
    }

    pub fn at_end(&self) -> bool {
        self.elapsed >= self.total
    }

    pub fn advance(&mut self, dt: f64) {
        if self.paused {
            return;
        }
        match self.direction {
            Direction::Forward => self.elapsed += dt,
            Direction::Backward => self.elapsed -= dt,
        }
        match self.repeat {
            Repeat::None => self.elapsed = self.elapsed.clamp(0.0, self.total),
            Repeat::Yoyo => self.elapsed = self.elapsed.max(0.0),
        }
    }

    /// Where the cursor sits inside `[0, total]` after folding yoyo repeats.
    fn effective_time(&self) -> f64 {
        match self.repeat {
            Repeat::None => self.elapsed,
            Repeat::Yoyo => {
                if self.total <= 0.0 {
                    return 0.0;
                }
                let period = 2.0 * self.total;
                let m = self.elapsed.rem_euclid(period);
                if m <= self.total {
                    m
                } else {
                    period - m
                }
            }
        }
    }

    /// Sample every segment the cursor has reached. Segments still ahead of
    /// the cursor emit nothing, so an element keeps its authored style until
    /// its step actually begins.
    pub fn sample_into(&self, out: &mut Vec<StyleUpdate>) {
        let t = self.effective_time();
        for segment in &self.segments {
            if t < segment.start {
                continue;
            }
            let progress = if segment.duration > 0.0 {
                ((t - segment.start) / segment.duration).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let eased = segment.ease.sample(progress);
            for span in &segment.spans {
                out.push(StyleUpdate {
                    target: segment.target,
                    prop: span.prop,
                    value: lerp(span.from, span.to, eased),
                });
            }
        }
    }

    /// Advance and sample in one step. Returns false once the timeline has
    /// settled on a boundary and has nothing further to emit.
    pub fn tick(&mut self, dt: f64, out: &mut Vec<StyleUpdate>) -> bool {
        if self.paused || (self.repeat == Repeat::None && self.settled) {
            return false;
        }
        self.advance(dt);
        self.sample_into(out);
        if self.repeat == Repeat::None {
            self.settled = match self.direction {
                Direction::Forward => self.at_end(),
                Direction::Backward => self.at_start(),
            };
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(updates: &[StyleUpdate], target: TargetId, prop: Prop) -> Option<f64> {
        updates
            .iter()
            .rev()
            .find(|u| u.target == target && u.prop == prop)
            .map(|u| u.value)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn steps_run_in_declared_order_with_overlap() {
        let mut tl = Timeline::new();
        tl.tween(0, vec![PropSpan::new(Prop::Opacity, 0.0, 1.0)], 1.0, Ease::Linear, At::Seq);
        tl.tween(1, vec![PropSpan::new(Prop::Opacity, 0.0, 1.0)], 1.0, Ease::Linear, At::Offset(-0.2));
        tl.tween(2, vec![PropSpan::new(Prop::Opacity, 0.0, 1.0)], 1.0, Ease::Linear, At::Seq);

        // Second step overlaps the first by 0.2s, third starts after it ends.
        assert!(close(tl.total_duration(), 2.8));

        let mut out = Vec::new();
        tl.seek(0.9);
        tl.sample_into(&mut out);
        assert!(close(value_of(&out, 0, Prop::Opacity).unwrap(), 0.9));
        assert!(close(value_of(&out, 1, Prop::Opacity).unwrap(), 0.1));
        assert_eq!(value_of(&out, 2, Prop::Opacity), None);
    }

    #[test]
    fn pending_segments_emit_nothing() {
        let mut tl = Timeline::new();
        tl.tween(0, vec![PropSpan::new(Prop::TranslateY, 50.0, 0.0)], 0.8, Ease::Linear, At::Abs(0.5));
        let mut out = Vec::new();
        tl.sample_into(&mut out);
        assert!(out.is_empty());
        tl.seek(0.5);
        tl.sample_into(&mut out);
        assert!(close(value_of(&out, 0, Prop::TranslateY).unwrap(), 50.0));
    }

    #[test]
    fn set_applies_once_reached() {
        let mut tl = Timeline::new();
        tl.set(3, Prop::Opacity, 1.0, At::Abs(0.0));
        let mut out = Vec::new();
        tl.sample_into(&mut out);
        assert!(close(value_of(&out, 3, Prop::Opacity).unwrap(), 1.0));
    }

    #[test]
    fn reverse_resumes_from_current_point() {
        let mut tl = Timeline::new();
        tl.tween(0, vec![PropSpan::new(Prop::RotateY, 0.0, 180.0)], 0.6, Ease::Linear, At::Seq);
        let mut out = Vec::new();
        assert!(tl.tick(0.3, &mut out));
        assert!(close(value_of(&out, 0, Prop::RotateY).unwrap(), 90.0));

        tl.play_backward();
        out.clear();
        tl.tick(0.15, &mut out);
        assert!(close(value_of(&out, 0, Prop::RotateY).unwrap(), 45.0));
    }

    #[test]
    fn settles_exactly_on_boundaries() {
        let mut tl = Timeline::new();
        tl.tween(0, vec![PropSpan::new(Prop::Opacity, 0.0, 1.0)], 1.0, Ease::PowerOut(4), At::Seq);
        let mut out = Vec::new();
        assert!(tl.tick(5.0, &mut out));
        assert_eq!(value_of(&out, 0, Prop::Opacity), Some(1.0));
        // Settled timelines stop emitting until played again.
        out.clear();
        assert!(!tl.tick(0.016, &mut out));
        assert!(out.is_empty());

        tl.play_backward();
        assert!(tl.tick(5.0, &mut out));
        assert_eq!(value_of(&out, 0, Prop::Opacity), Some(0.0));
    }

    #[test]
    fn yoyo_folds_back_and_never_settles() {
        let mut tl = Timeline::new();
        tl.tween(0, vec![PropSpan::new(Prop::Glow, 0.0, 1.0)], 1.5, Ease::Linear, At::Seq);
        tl.set_repeat(Repeat::Yoyo);

        let mut out = Vec::new();
        assert!(tl.tick(1.5, &mut out));
        assert_eq!(value_of(&out, 0, Prop::Glow), Some(1.0));

        out.clear();
        assert!(tl.tick(0.75, &mut out));
        assert!(close(value_of(&out, 0, Prop::Glow).unwrap(), 0.5));

        out.clear();
        assert!(tl.tick(2.25, &mut out));
        assert!(close(value_of(&out, 0, Prop::Glow).unwrap(), 1.0));
    }

    #[test]
    fn paused_timeline_holds_still() {
        let mut tl = Timeline::new();
        tl.tween(0, vec![PropSpan::new(Prop::Scale, 1.0, 1.02)], 0.4, Ease::Linear, At::Seq);
        tl.pause();
        let mut out = Vec::new();
        assert!(!tl.tick(1.0, &mut out));
        assert!(out.is_empty());
        assert!(tl.at_start());

        tl.play_forward();
        assert!(tl.tick(1.0, &mut out));
        assert_eq!(value_of(&out, 0, Prop::Scale), Some(1.02));
    }
}
