mod easing;
mod tween;

pub use easing::Easing;
pub use tween::{SegmentedTween, TweenSegment};
