//! Countdown timers for short-lived visuals

use lumen_math::{clamp, smoothstep};

/// Countdown with a linear fade at the end
///
/// The owner is alive while `remaining > 0`. Alpha stays at 1 until the
/// remaining time drops below `fade_duration`, then falls linearly to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifespan {
    remaining: f64,
    fade_duration: f64,
}

impl Lifespan {
    pub fn new(lifespan: f64, fade_duration: f64) -> Self {
        Self {
            remaining: lifespan,
            fade_duration,
        }
    }

    /// Advance by one frame; returns whether the owner is still alive
    pub fn tick(&mut self, dt: f64) -> bool {
        self.remaining -= dt;
        self.is_alive()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.remaining > 0.0
    }

    #[inline]
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    #[inline]
    pub fn in_fade(&self) -> bool {
        self.remaining < self.fade_duration
    }

    pub fn alpha(&self) -> f64 {
        if self.in_fade() {
            clamp(self.remaining / self.fade_duration, 0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Add time to the countdown
    pub fn extend(&mut self, by: f64) {
        self.remaining += by;
    }
}

/// Grow-in / shrink-out envelope over a fixed lifetime
///
/// The factor eases up over the first `grow` seconds and back down over the
/// last `shrink` seconds, with smoothstep on both edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    age: f64,
    lifespan: f64,
    grow: f64,
    shrink: f64,
}

impl Envelope {
    pub fn new(lifespan: f64, grow: f64, shrink: f64) -> Self {
        Self {
            age: 0.0,
            lifespan,
            grow,
            shrink,
        }
    }

    /// Advance by one frame; returns whether the envelope is still running
    pub fn tick(&mut self, dt: f64) -> bool {
        self.age += dt;
        self.is_alive()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age < self.lifespan
    }

    #[inline]
    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn factor(&self) -> f64 {
        let grow = smoothstep(self.age / self.grow);
        let shrink = smoothstep((self.lifespan - self.age) / self.shrink);
        grow * shrink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn updates_until_expired(lifespan: f64, dt: f64) -> u32 {
        let mut timer = Lifespan::new(lifespan, 0.25);
        let mut updates = 0;
        loop {
            updates += 1;
            if !timer.tick(dt) {
                return updates;
            }
        }
    }

    #[test]
    fn test_expires_after_ceil_updates() {
        assert_eq!(updates_until_expired(1.0, 0.25), 4);
        assert_eq!(updates_until_expired(1.0, 0.3), 4);
        assert_eq!(updates_until_expired(5.0, 0.5), 10);
        assert_eq!(updates_until_expired(0.1, 1.0), 1);
    }

    #[test]
    fn test_alpha_window() {
        let mut timer = Lifespan::new(1.0, 0.5);
        assert_eq!(timer.alpha(), 1.0);
        assert!(!timer.in_fade());

        timer.tick(0.75);
        assert!(timer.in_fade());
        assert_eq!(timer.alpha(), 0.5);

        timer.tick(0.5);
        assert!(!timer.is_alive());
        assert_eq!(timer.alpha(), 0.0);
    }

    #[test]
    fn test_extend() {
        let mut timer = Lifespan::new(0.5, 0.25);
        timer.extend(1.0);
        assert_eq!(timer.remaining(), 1.5);
        assert!(timer.tick(1.0));
    }

    #[test]
    fn test_envelope_shape() {
        let mut env = Envelope::new(2.0, 0.5, 0.5);
        assert_eq!(env.factor(), 0.0);

        env.tick(0.25);
        assert_eq!(env.factor(), 0.5);

        env.tick(0.75);
        assert_eq!(env.factor(), 1.0);

        env.tick(0.75);
        assert_eq!(env.factor(), 0.5);

        assert!(!env.tick(0.25));
        assert_eq!(env.factor(), 0.0);
    }

    proptest! {
        // Binary fractions keep the repeated subtraction exact.
        #[test]
        fn expires_after_exactly_ceil_l_over_d(sixteenths in 1u32..400, shift in 0u32..6) {
            let lifespan = f64::from(sixteenths) / 16.0;
            let dt = 1.0 / f64::from(1u32 << shift);
            let expected = (lifespan / dt).ceil() as u32;
            prop_assert_eq!(updates_until_expired(lifespan, dt), expected);
        }

        #[test]
        fn alpha_never_increases_in_fade(lifespan in 0.1f64..10.0, fade in 0.05f64..2.0, dt in 0.001f64..0.2) {
            let mut timer = Lifespan::new(lifespan, fade);
            let mut last = timer.alpha();
            while timer.tick(dt) {
                let alpha = timer.alpha();
                if timer.in_fade() {
                    prop_assert!(alpha <= last);
                }
                prop_assert!((0.0..=1.0).contains(&alpha));
                last = alpha;
            }
        }
    }
}
