//! Continuous ticker loop. The track renders its tile sequence twice, so
//! translating from 0% to -50% of the track's own width lands on pixels
//! identical to the starting frame and the wrap is seamless.

use super::ease::{lerp, Ease};

/// Offset at which the duplicated content lines up with the original.
pub const WRAP_PERCENT: f64 = 50.0;
/// Seconds for one full pass from 0% to -50% at rate 1.
pub const LOOP_SECONDS: f64 = 30.0;
/// Seconds to ramp the playback rate between 0 and 1.
pub const RAMP_SECONDS: f64 = 0.5;

struct Ramp {
    from: f64,
    to: f64,
    elapsed: f64,
    ease: Ease,
}

pub struct MarqueeController {
    offset: f64,
    rate: f64,
    speed: f64,
    ramp: Option<Ramp>,
}

impl MarqueeController {
    pub fn new(loop_seconds: f64) -> Self {
        Self {
            offset: 0.0,
            rate: 1.0,
            speed: WRAP_PERCENT / loop_seconds,
            ramp: None,
        }
    }

    /// Ramp the playback rate down to zero; starts from the current rate so
    /// a pause during a resume ramp stays smooth.
    pub fn pause(&mut self) {
        self.ramp = Some(Ramp {
            from: self.rate,
            to: 0.0,
            elapsed: 0.0,
            ease: Ease::PowerOut(3),
        });
    }

    pub fn resume(&mut self) {
        self.ramp = Some(Ramp {
            from: self.rate,
            to: 1.0,
            elapsed: 0.0,
            ease: Ease::PowerIn(3),
        });
    }

    /// Advance by `dt` seconds and return the new track offset in percent,
    /// always in `(-WRAP_PERCENT, 0]`.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if let Some(ramp) = &mut self.ramp {
            ramp.elapsed += dt;
            let t = (ramp.elapsed / RAMP_SECONDS).clamp(0.0, 1.0);
            self.rate = lerp(ramp.from, ramp.to, ramp.ease.sample(t));
            if t >= 1.0 {
                self.rate = ramp.to;
                self.ramp = None;
            }
        }
        self.offset -= self.speed * self.rate * dt;
        if self.offset <= -WRAP_PERCENT {
            self.offset += WRAP_PERCENT;
        }
        self.offset
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn is_paused(&self) -> bool {
        self.rate == 0.0 && self.ramp.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn offset_strictly_decreases_modulo_wraparound_while_running() {
        let mut marquee = MarqueeController::new(LOOP_SECONDS);
        let mut prev = marquee.offset();
        for _ in 0..600 {
            let next = marquee.tick(FRAME);
            let wrapped = next > prev;
            if wrapped {
                assert!((next - prev - WRAP_PERCENT).abs() < 1.0);
            } else {
                assert!(next < prev);
            }
            assert!(next <= 0.0 && next > -WRAP_PERCENT);
            prev = next;
        }
    }

    #[test]
    fn wrap_lands_back_inside_the_window() {
        // Long loop: 2000 frames at 30s per pass crosses the wrap point once.
        let mut marquee = MarqueeController::new(LOOP_SECONDS);
        let mut wraps = 0;
        let mut prev = marquee.offset();
        for _ in 0..2000 {
            let next = marquee.tick(FRAME);
            if next > prev {
                wraps += 1;
            }
            prev = next;
        }
        assert_eq!(wraps, 1);
    }

    #[test]
    fn pause_ramps_down_then_holds_constant() {
        let mut marquee = MarqueeController::new(LOOP_SECONDS);
        for _ in 0..60 {
            marquee.tick(FRAME);
        }
        marquee.pause();
        // Still moving during the ramp.
        let before = marquee.offset();
        marquee.tick(FRAME);
        assert!(marquee.offset() < before);
        assert!(!marquee.is_paused());

        for _ in 0..60 {
            marquee.tick(FRAME);
        }
        assert!(marquee.is_paused());
        let held = marquee.offset();
        for _ in 0..120 {
            assert_eq!(marquee.tick(FRAME), held);
        }
    }

    #[test]
    fn resume_ramps_back_to_full_rate() {
        let mut marquee = MarqueeController::new(LOOP_SECONDS);
        marquee.pause();
        for _ in 0..60 {
            marquee.tick(FRAME);
        }
        assert!(marquee.is_paused());

        marquee.resume();
        marquee.tick(FRAME);
        assert!(marquee.rate() > 0.0 && marquee.rate() < 1.0);
        for _ in 0..60 {
            marquee.tick(FRAME);
        }
        assert_eq!(marquee.rate(), 1.0);
    }

    #[test]
    fn pause_mid_resume_keeps_the_rate_continuous() {
        let mut marquee = MarqueeController::new(LOOP_SECONDS);
        marquee.pause();
        for _ in 0..60 {
            marquee.tick(FRAME);
        }
        marquee.resume();
        for _ in 0..10 {
            marquee.tick(FRAME);
        }
        let mid = marquee.rate();
        assert!(mid > 0.0 && mid < 1.0);

        marquee.pause();
        marquee.tick(FRAME);
        assert!((marquee.rate() - mid).abs() < 0.2, "rate jumped on ramp reversal");
    }
}
