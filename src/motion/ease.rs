//! Easing curves evaluated over normalized time in `[0, 1]`.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// Polynomial ease-in of the given degree.
    PowerIn(i32),
    /// Polynomial ease-out of the given degree.
    PowerOut(i32),
    /// Polynomial ease-in-out of the given degree.
    PowerInOut(i32),
    /// Decelerating ease that overshoots the end value before settling.
    BackOut(f64),
}

impl Ease {
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::PowerIn(n) => t.powi(n),
            Ease::PowerOut(n) => 1.0 - (1.0 - t).powi(n),
            Ease::PowerInOut(n) => {
                if t < 0.5 {
                    0.5 * (2.0 * t).powi(n)
                } else {
                    1.0 - 0.5 * (2.0 - 2.0 * t).powi(n)
                }
            }
            Ease::BackOut(overshoot) => {
                let u = t - 1.0;
                u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
            }
        }
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Ease; 6] = [
        Ease::Linear,
        Ease::PowerIn(3),
        Ease::PowerOut(3),
        Ease::PowerInOut(3),
        Ease::PowerOut(4),
        Ease::BackOut(1.7),
    ];

    #[test]
    fn curves_hit_exact_endpoints() {
        for ease in CURVES {
            assert_eq!(ease.sample(0.0), 0.0, "{ease:?} at 0");
            assert_eq!(ease.sample(1.0), 1.0, "{ease:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for ease in CURVES {
            assert_eq!(ease.sample(-2.0), 0.0);
            assert_eq!(ease.sample(3.0), 1.0);
        }
    }

    #[test]
    fn back_out_overshoots_before_settling() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.7).sample(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn power_out_decelerates() {
        let ease = Ease::PowerOut(3);
        let first_half = ease.sample(0.5) - ease.sample(0.0);
        let second_half = ease.sample(1.0) - ease.sample(0.5);
        assert!(first_half > second_half);
    }

    #[test]
    fn lerp_spans_the_interval() {
        assert_eq!(lerp(100.0, 0.0, 0.0), 100.0);
        assert_eq!(lerp(100.0, 0.0, 1.0), 0.0);
        assert_eq!(lerp(0.0, 180.0, 0.5), 90.0);
    }
}
