// PhotoZoom -- Zoom and pan geometry for single-photo gallery views
//
// Copyright (c) 2024-2025 Martin van der Werff <github (at) newinnovations.nl>
//
// This file is part of PhotoZoom.
//
// PhotoZoom is free software: you can redistribute it and/or modify it under the terms of
// the GNU Affero General Public License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR
// IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND
// FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR
// BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
// STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::time::Duration;

pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// A zoom animation the host is running, from one scale to another.
///
/// The host owns the clock. It asks for the scale at a given elapsed time on
/// every frame, recenters with it, and recenters once more when finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransition {
    from_scale: f64,
    to_scale: f64,
    duration: Duration,
}

impl ZoomTransition {
    pub fn new(from_scale: f64, to_scale: f64, duration: Duration) -> Self {
        Self {
            from_scale,
            to_scale,
            duration,
        }
    }

    pub fn from_scale(&self) -> f64 {
        self.from_scale
    }

    pub fn to_scale(&self) -> f64 {
        self.to_scale
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in [0, 1]. A zero duration is finished immediately.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Eased scale at `elapsed`
    pub fn scale_at(&self, elapsed: Duration) -> f64 {
        let t = ease_in_out(self.progress(elapsed));
        self.from_scale + (self.to_scale - self.from_scale) * t
    }
}

fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let transition = ZoomTransition::new(1.0, 3.0, DEFAULT_ANIMATION_DURATION);
        assert_eq!(transition.scale_at(Duration::ZERO), 1.0);
        assert_eq!(transition.scale_at(Duration::from_millis(300)), 3.0);
        assert_eq!(transition.scale_at(Duration::from_secs(5)), 3.0);
        assert!(!transition.is_finished(Duration::from_millis(299)));
        assert!(transition.is_finished(Duration::from_millis(300)));
    }

    #[test]
    fn test_midpoint_and_monotonic() {
        let transition = ZoomTransition::new(3.0, 1.0, Duration::from_millis(200));
        assert!((transition.scale_at(Duration::from_millis(100)) - 2.0).abs() < 1e-9);

        let mut previous = transition.scale_at(Duration::ZERO);
        for ms in (10..=200).step_by(10) {
            let scale = transition.scale_at(Duration::from_millis(ms));
            assert!(scale <= previous);
            previous = scale;
        }
    }

    #[test]
    fn test_zero_duration() {
        let transition = ZoomTransition::new(2.0, 1.0, Duration::ZERO);
        assert_eq!(transition.progress(Duration::ZERO), 1.0);
        assert_eq!(transition.scale_at(Duration::ZERO), 1.0);
        assert!(transition.is_finished(Duration::ZERO));
    }
}
