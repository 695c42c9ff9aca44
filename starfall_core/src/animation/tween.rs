use super::Easing;
use crate::config::GlowConfig;

/// One leg of a [`SegmentedTween`]: ease toward `to` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSegment {
    pub to: f32,
    pub duration: f32,
}

impl TweenSegment {
    pub fn new(to: f32, duration: f32) -> Self {
        Self {
            to,
            duration: duration.max(0.0),
        }
    }
}

/// Interruptible multi-segment tween, recomputed from elapsed time on every tick.
///
/// The whole running state is `segment_index`, `elapsed`, `start_value` and
/// `end_value`; [`restart`](Self::restart) overwrites all four at once, so a new
/// trigger discards whatever curve was in flight. Once the last segment ends
/// the value holds at that segment's target.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedTween {
    origin: f32,
    segments: Vec<TweenSegment>,
    easing: Easing,
    segment_index: usize,
    elapsed: f32,
    start_value: f32,
    end_value: f32,
    value: f32,
}

impl SegmentedTween {
    pub fn new(origin: f32, segments: Vec<TweenSegment>, easing: Easing) -> Self {
        let mut tween = Self {
            origin,
            segments,
            easing,
            segment_index: 0,
            elapsed: 0.0,
            start_value: origin,
            end_value: origin,
            value: origin,
        };
        tween.restart();
        tween
    }

    /// Peak → settle → residue decay used by the selection glow.
    pub fn glow_decay(config: &GlowConfig) -> Self {
        Self::new(
            config.peak,
            vec![
                TweenSegment::new(config.settle, config.settle_seconds),
                TweenSegment::new(config.residue, config.residue_seconds),
            ],
            config.easing,
        )
    }

    /// Jumps back to the origin value at the start of the first segment.
    pub fn restart(&mut self) {
        self.segment_index = 0;
        self.elapsed = 0.0;
        self.start_value = self.origin;
        self.end_value = self
            .segments
            .first()
            .map(|segment| segment.to)
            .unwrap_or(self.origin);
        self.value = self.origin;
    }

    /// Advances by `dt` seconds, carrying leftover time into later segments.
    pub fn advance(&mut self, dt: f32) {
        let mut remaining = dt.max(0.0);
        while let Some(segment) = self.segments.get(self.segment_index).copied() {
            let left = segment.duration - self.elapsed;
            if remaining < left {
                self.elapsed += remaining;
                let t = self.easing.apply(self.elapsed / segment.duration);
                self.value = self.start_value + (self.end_value - self.start_value) * t;
                return;
            }

            remaining -= left;
            self.value = segment.to;
            self.start_value = segment.to;
            self.elapsed = 0.0;
            self.segment_index += 1;
            if let Some(next) = self.segments.get(self.segment_index) {
                self.end_value = next.to;
            }
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    /// True once every segment has run to completion.
    pub fn is_settled(&self) -> bool {
        self.segment_index >= self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn decay() -> SegmentedTween {
        SegmentedTween::glow_decay(&GlowConfig::default())
    }

    #[test]
    fn test_starts_at_peak() {
        let tween = decay();
        assert_eq!(tween.value(), 1.0);
        assert_eq!(tween.segment_index(), 0);
        assert!(!tween.is_settled());
    }

    #[test]
    fn test_reaches_segment_targets() {
        let mut tween = decay();
        tween.advance(0.18);
        assert!((tween.value() - 0.9).abs() < EPS);
        tween.advance(0.35);
        assert!((tween.value() - 0.6).abs() < EPS);
        assert!(tween.is_settled());
    }

    #[test]
    fn test_holds_residue() {
        let mut tween = decay();
        tween.advance(1.0);
        assert_eq!(tween.value(), 0.6);
        tween.advance(10.0);
        assert_eq!(tween.value(), 0.6);
    }

    #[test]
    fn test_midpoint_of_first_segment() {
        let mut tween = decay();
        tween.advance(0.09);
        assert!((tween.value() - 0.95).abs() < EPS);
    }

    #[test]
    fn test_non_increasing_at_tick_rate() {
        let mut tween = decay();
        let mut last = tween.value();
        for _ in 0..30 {
            tween.advance(1.0 / 30.0);
            assert!(tween.value() <= last + 1e-6);
            last = tween.value();
        }
        assert!((last - 0.6).abs() < EPS);
    }

    #[test]
    fn test_restart_discards_progress() {
        let mut tween = decay();
        tween.advance(0.3);
        assert_eq!(tween.segment_index(), 1);
        tween.restart();
        assert_eq!(tween.value(), 1.0);
        assert_eq!(tween.segment_index(), 0);
        tween.advance(0.18);
        assert!((tween.value() - 0.9).abs() < EPS);
    }

    #[test]
    fn test_zero_duration_segment_completes_immediately() {
        let mut tween = SegmentedTween::new(
            1.0,
            vec![TweenSegment::new(0.5, 0.0), TweenSegment::new(0.2, 1.0)],
            Easing::Linear,
        );
        tween.advance(0.0);
        assert_eq!(tween.segment_index(), 1);
        assert_eq!(tween.value(), 0.5);
    }

    #[test]
    fn test_ease_out_segment_monotonic() {
        let mut config = GlowConfig::default();
        config.easing = Easing::EaseOutCubic;
        let mut tween = SegmentedTween::glow_decay(&config);
        let mut last = tween.value();
        for _ in 0..60 {
            tween.advance(0.01);
            assert!(tween.value() <= last + 1e-6);
            last = tween.value();
        }
        assert!((tween.value() - 0.6).abs() < EPS);
    }
}
