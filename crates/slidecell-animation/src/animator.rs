//! The single-scalar animatable with explicit animation tokens.

use crate::{AnimationType, Lerp};

/// Identifies one animation start. A token stops being current the moment
/// a newer animation (or a snap) begins, and a stale token's animation
/// never writes the value again.
pub type AnimationToken = u64;

struct ActiveAnimation {
    token: AnimationToken,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
}

/// Owns one scalar offset and at most one in-flight animation toward a
/// target. Drive it with [`OffsetAnimator::tick`] from the host's frame
/// callbacks; read the presented value with [`OffsetAnimator::value`].
pub struct OffsetAnimator {
    current: f32,
    start: f32,
    target: f32,
    velocity: f32,
    active: Option<ActiveAnimation>,
    next_token: AnimationToken,
}

impl OffsetAnimator {
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            start: initial,
            target: initial,
            velocity: 0.0,
            active: None,
            next_token: 0,
        }
    }

    /// The presented value: mid-animation this is the interpolated
    /// position, not the target.
    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The token of the in-flight animation, if any.
    pub fn current_token(&self) -> Option<AnimationToken> {
        self.active.as_ref().map(|a| a.token)
    }

    /// Starts animating from the presented value toward `target`,
    /// superseding any in-flight animation.
    pub fn animate_to(&mut self, target: f32, animation: AnimationType) -> AnimationToken {
        self.next_token += 1;
        let token = self.next_token;

        self.start = self.current;
        self.target = target;
        self.velocity = 0.0;
        self.active = Some(ActiveAnimation {
            token,
            animation_type: animation,
            start_time_nanos: None,
        });
        token
    }

    /// Jumps straight to `value`, cancelling any in-flight animation.
    pub fn snap_to(&mut self, value: f32) {
        self.next_token += 1;
        self.active = None;
        self.current = value;
        self.start = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Stops in place: the presented value is kept, the in-flight
    /// animation (if any) is invalidated.
    pub fn cancel(&mut self) {
        self.next_token += 1;
        self.active = None;
        self.start = self.current;
        self.target = self.current;
        self.velocity = 0.0;
    }

    /// Advances the in-flight animation to `frame_time_nanos`.
    /// Returns true while still running; false once at rest.
    pub fn tick(&mut self, frame_time_nanos: u64) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        match active.animation_type {
            AnimationType::Tween(spec) => {
                let start_time = *active.start_time_nanos.get_or_insert(frame_time_nanos);
                let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
                let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
                let linear_progress =
                    (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
                let progress = spec.easing.transform(linear_progress);

                self.current = self.start.lerp(&self.target, progress);

                if linear_progress >= 1.0 {
                    self.finish();
                    false
                } else {
                    true
                }
            }
            AnimationType::Spring(spec) => {
                let start_time = *active.start_time_nanos.get_or_insert(frame_time_nanos);
                let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
                let dt = elapsed_nanos as f32 / 1_000_000_000.0;
                active.start_time_nanos = Some(frame_time_nanos);

                if dt == 0.0 {
                    return true;
                }

                // Semi-implicit Euler over progress space [0, 1] at a
                // fixed internal timestep for stability.
                let stiffness = spec.stiffness;
                let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
                let span = self.target - self.start;

                let mut prev_time = 0.0f32;
                let timestep: f32 = 0.016;
                while prev_time < dt {
                    let step = timestep.min(dt - prev_time);

                    let progress = if span.abs() < f32::EPSILON {
                        1.0
                    } else {
                        (self.current - self.start) / span
                    };
                    let displacement = progress - 1.0;
                    let spring_force = -stiffness * displacement - damping * self.velocity;

                    self.velocity += spring_force * step;
                    let new_progress = progress + self.velocity * step;
                    self.current = self.start.lerp(&self.target, new_progress.clamp(0.0, 2.0));

                    prev_time += step;
                }

                let at_rest = self.velocity.abs() < spec.velocity_threshold;
                let near_target = (self.current - self.target).abs() < spec.position_threshold;
                if at_rest && near_target {
                    self.finish();
                    false
                } else {
                    true
                }
            }
        }
    }

    fn finish(&mut self) {
        self.current = self.target;
        self.start = self.target;
        self.velocity = 0.0;
        self.active = None;
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
