use crate::Scale;

/// Values a [`RateTween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Scale {
    fn lerp(self, to: Self, t: f32) -> Self {
        Scale::lerp(self, to, t)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    /// Samples the curve; `t` is clamped to `[0, 1]`.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// A frame-driven tween whose normalized timer advances by `delta * rate` per tick.
///
/// Unlike a wall-clock tween there is no duration: at `rate = 5.0` the tween completes after
/// 0.2 seconds worth of deltas. Once the timer reaches `1.0` the value is exactly `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateTween<T> {
    pub from: T,
    pub to: T,
    pub rate: f32,
    pub easing: Easing,
    progress: f32,
}

impl<T: Lerp> RateTween<T> {
    pub fn new(from: T, to: T, rate: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            rate,
            easing,
            progress: 0.0,
        }
    }

    /// The normalized timer, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_done(&self) -> bool {
        self.progress >= 1.0
    }

    pub fn value(&self) -> T {
        if self.is_done() {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.sample(self.progress))
    }

    /// Advances the timer and returns the new value.
    ///
    /// A non-positive `rate` completes on the first tick.
    pub fn advance(&mut self, delta: f32) -> T {
        if !(self.rate > 0.0) {
            self.progress = 1.0;
        } else if delta > 0.0 {
            self.progress = (self.progress + delta * self.rate).min(1.0);
        }
        self.value()
    }

    /// Restarts the timer from the current value toward `new_to`.
    pub fn retarget(&mut self, new_to: T) {
        *self = Self::new(self.value(), new_to, self.rate, self.easing);
    }
}

/// How per-item scale animations converge on their target.
///
/// A carousel applies one policy to every item for its whole lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalePolicy {
    /// A [`RateTween`] driven by `scale_transition_speed`, terminating when its timer reaches 1.
    #[default]
    Timed,
    /// Blend `blend` of the remaining distance every tick; settle once within `epsilon`.
    ///
    /// The blend is per tick, not per second, so convergence speed follows the frame rate. A
    /// non-positive `blend` settles on the first tick.
    Converge { blend: f32, epsilon: f32 },
}

impl ScalePolicy {
    /// The blend policy of strips that ease every frame instead of running a timer.
    pub const CONVERGE: Self = Self::Converge {
        blend: 0.1,
        epsilon: 0.001,
    };
}

/// Which animated value an [`AnimationHandle`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationSlot {
    Snap,
    Scale(usize),
}

/// Identifies one started animation.
///
/// Starting another animation for the same slot invalidates the previous handle; see
/// [`crate::Carousel::is_live`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationHandle {
    pub slot: AnimationSlot,
    pub generation: u64,
}

/// The in-flight scale animation of one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ScaleTrack {
    Timed(RateTween<Scale>),
    Converge { to: Scale },
}

impl ScaleTrack {
    pub(crate) fn start(
        from: Scale,
        to: Scale,
        policy: ScalePolicy,
        rate: f32,
        easing: Easing,
    ) -> Self {
        match policy {
            ScalePolicy::Timed => Self::Timed(RateTween::new(from, to, rate, easing)),
            ScalePolicy::Converge { .. } => Self::Converge { to },
        }
    }

    pub(crate) fn target(&self) -> Scale {
        match self {
            Self::Timed(tween) => tween.to,
            Self::Converge { to } => *to,
        }
    }

    /// Advances one tick from `current`; returns the new scale and whether the track finished.
    pub(crate) fn advance(
        &mut self,
        current: Scale,
        delta: f32,
        policy: ScalePolicy,
    ) -> (Scale, bool) {
        match self {
            Self::Timed(tween) => {
                let value = tween.advance(delta);
                (value, tween.is_done())
            }
            Self::Converge { to } => {
                let (blend, epsilon) = match policy {
                    ScalePolicy::Converge { blend, epsilon } => (blend, epsilon),
                    ScalePolicy::Timed => (1.0, 0.0),
                };
                if !(blend > 0.0) {
                    return (*to, true);
                }
                let next = current.lerp(*to, blend.min(1.0));
                let distance = next.max_distance(*to);
                // f32 rounding can stall short of the target; stop once a step makes no progress.
                if distance <= epsilon || distance >= current.max_distance(*to) {
                    (*to, true)
                } else {
                    (next, false)
                }
            }
        }
    }
}

/// A live animation together with the handle it was started under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Live<T> {
    pub(crate) handle: AnimationHandle,
    pub(crate) anim: T,
}
