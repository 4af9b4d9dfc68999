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

use log::debug;

use crate::{
    error::{ZoomError, ZoomResult},
    rect::{InsetsD, PointD, RectD, SizeD},
};

/// Default lower zoom bound, the aspect-fit scale
pub const DEFAULT_MIN_SCALE: f64 = 1.0;
/// Default upper zoom bound
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Floating point comparison epsilon for zoom state detection
const SCALE_EPSILON: f64 = 1.0e-6;

/// Allowed range of the zoom scale, relative to the aspect-fit size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    min_scale: f64,
    max_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}

impl ZoomLimits {
    /// Both bounds must be finite and positive with `min_scale <= max_scale`.
    pub fn new(min_scale: f64, max_scale: f64) -> ZoomResult<Self> {
        let valid = min_scale.is_finite()
            && max_scale.is_finite()
            && min_scale > 0.0
            && min_scale <= max_scale;
        if valid {
            Ok(Self {
                min_scale,
                max_scale,
            })
        } else {
            Err(ZoomError::InvalidLimits {
                min: min_scale,
                max: max_scale,
            })
        }
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Clamps `scale` into the allowed range. NaN maps to the minimum.
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            self.min_scale
        } else {
            scale.clamp(self.min_scale, self.max_scale)
        }
    }
}

/// Current zoom scale together with its limits.
///
/// The stored scale always satisfies `min_scale <= scale <= max_scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f64,
    limits: ZoomLimits,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ZoomState {
    /// Creates a zoom state at the minimum scale
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            scale: limits.min_scale(),
            limits,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_scale(&self) -> f64 {
        self.limits.min_scale()
    }

    pub fn max_scale(&self) -> f64 {
        self.limits.max_scale()
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Stores `scale` clamped to the limits and returns the stored value.
    ///
    /// Pinch gestures may report values past the limits while bouncing; these
    /// are accepted and clamped rather than rejected.
    pub fn set_scale(&mut self, scale: f64) -> f64 {
        self.scale = self.limits.clamp(scale);
        self.scale
    }

    /// Back to the minimum scale
    pub fn reset(&mut self) {
        self.scale = self.limits.min_scale();
    }

    /// True when the scale is above the minimum (epsilon tolerant).
    pub fn is_zoomed_in(&self) -> bool {
        self.scale > self.limits.min_scale() + SCALE_EPSILON
    }
}

/// What a double tap should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomAction {
    /// The tap landed outside the displayed image
    Ignore,
    /// Return to the minimum scale
    ZoomOut,
    /// Zoom so that this rectangle (image view coordinates) fills the viewport
    ZoomIn(RectD),
}

/// Maps a point in container coordinates to image view (content) coordinates.
///
/// The mapping depends on the host's scroll offset and transform, so it is
/// provided by the host at tap time.
pub trait PointConverter {
    fn to_content(&self, point: PointD) -> PointD;
}

impl<F> PointConverter for F
where
    F: Fn(PointD) -> PointD,
{
    fn to_content(&self, point: PointD) -> PointD {
        self(point)
    }
}

/// Aspect-fit size of `image` inside `viewport`.
///
/// Returns `None` when either image dimension is zero, negative or not finite,
/// or when the viewport has no area yet or is not finite. The result fits inside the viewport
/// and matches it exactly on the binding axis.
pub fn effective_size(viewport: SizeD, image: SizeD) -> Option<SizeD> {
    let finite = image.width().is_finite() && image.height().is_finite();
    if !finite || image.is_empty() {
        debug!(
            "no effective size for image {}x{}",
            image.width(),
            image.height()
        );
        return None;
    }
    let finite = viewport.width().is_finite() && viewport.height().is_finite();
    if !finite || viewport.is_empty() {
        return None;
    }

    let scale_x = viewport.width() / image.width();
    let scale_y = viewport.height() / image.height();

    // Pin the binding axis to the viewport so it matches exactly
    Some(if scale_x <= scale_y {
        SizeD::new(viewport.width(), image.height() * scale_x)
    } else {
        SizeD::new(image.width() * scale_y, viewport.height())
    })
}

/// Half of the space left over when `content` is smaller than `viewport`.
fn center_offset(viewport: f64, content: f64) -> f64 {
    if viewport > content {
        (viewport - content) / 2.0
    } else {
        0.0
    }
}

/// Insets that center the zoomed content inside the viewport.
///
/// Each axis is handled independently: content smaller than the viewport gets
/// half of the remainder on both sides, content that fills or overflows the
/// viewport gets none. Negative or NaN scales are treated as zero so an
/// elastic (bouncing) scale still yields a valid result.
pub fn content_inset(viewport: SizeD, effective_size: SizeD, scale: f64) -> InsetsD {
    let scaled = effective_size.scale(scale.max(0.0));
    InsetsD::symmetric(
        center_offset(viewport.width(), scaled.width()),
        center_offset(viewport.height(), scaled.height()),
    )
}

/// Bounding rectangle of the displayed image in container coordinates.
///
/// Uses the plain half-remainder formula, so the origin goes negative once the
/// zoomed image is larger than the viewport. Only used for hit-testing.
pub fn displayed_image_rect(viewport: SizeD, effective_size: SizeD, scale: f64) -> RectD {
    let scaled = effective_size.scale(scale.max(0.0));
    let origin = PointD::new(
        (viewport.width() - scaled.width()) / 2.0,
        (viewport.height() - scaled.height()) / 2.0,
    );
    RectD::from_origin_size(origin, scaled)
}

/// Rectangle to zoom to so that `center` ends up in the middle of the viewport
/// at `max_scale`.
///
/// The size is always `viewport / max_scale`; only the origin is moved to keep
/// the rectangle inside `bounds`.
pub fn zoom_rect(center: PointD, viewport: SizeD, max_scale: f64, bounds: &RectD) -> RectD {
    let size = SizeD::new(viewport.width() / max_scale, viewport.height() / max_scale);
    RectD::centered_at(center, size).clamp_within(bounds)
}

/// Decides what a double tap at `tap` (container coordinates) does.
pub fn resolve_double_tap<C>(
    tap: PointD,
    converter: &C,
    viewport: SizeD,
    effective_size: SizeD,
    zoom: &ZoomState,
) -> ZoomAction
where
    C: PointConverter + ?Sized,
{
    resolve_double_tap_at(tap, converter, viewport, effective_size, zoom.scale(), zoom)
}

/// Like [`resolve_double_tap`], but hit-tests against the image as displayed at
/// `displayed_scale`.
///
/// While a pinch bounces past the limits the host draws the image at a scale
/// the zoom state does not store. The hit-test must follow what is on screen;
/// the zoom in/out decision still uses the clamped state.
pub fn resolve_double_tap_at<C>(
    tap: PointD,
    converter: &C,
    viewport: SizeD,
    effective_size: SizeD,
    displayed_scale: f64,
    zoom: &ZoomState,
) -> ZoomAction
where
    C: PointConverter + ?Sized,
{
    let displayed = displayed_image_rect(viewport, effective_size, displayed_scale);
    if !displayed.contains(tap) {
        return ZoomAction::Ignore;
    }

    if zoom.is_zoomed_in() {
        return ZoomAction::ZoomOut;
    }

    let image_bounds = RectD::new_from_size(effective_size);
    let center = converter.to_content(tap);
    ZoomAction::ZoomIn(zoom_rect(center, viewport, zoom.max_scale(), &image_bounds))
}
