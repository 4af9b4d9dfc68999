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

pub mod zoom;

use log::{debug, warn};

use crate::rect::{InsetsD, PointD, SizeD};

use zoom::{PointConverter, ZoomAction, ZoomLimits, ZoomState};

/// Whether the photo is still on its way or its natural size is known.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum PhotoState {
    #[default]
    Pending,
    Ready(SizeD),
}

/// Geometry the host applies to its scroll container in one go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Frame of the image view at the minimum scale, also the scroll content size
    pub image_frame: SizeD,
    pub content_inset: InsetsD,
    pub scale: f64,
}

/// Value state of one zoom view: viewport, photo and zoom.
#[derive(Debug, Clone)]
pub struct ViewData {
    photo: PhotoState,
    viewport: SizeD,
    zoom: ZoomState,
    effective_size: Option<SizeD>,
    /// Last scale reported by the host, may be outside the limits while bouncing
    reported_scale: f64,
}

impl Default for ViewData {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ViewData {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            photo: PhotoState::Pending,
            viewport: SizeD::default(),
            zoom: ZoomState::new(limits),
            effective_size: None,
            reported_scale: limits.min_scale(),
        }
    }

    pub fn photo(&self) -> PhotoState {
        self.photo
    }

    pub fn image_size(&self) -> Option<SizeD> {
        match self.photo {
            PhotoState::Ready(size) => Some(size),
            PhotoState::Pending => None,
        }
    }

    pub fn viewport(&self) -> SizeD {
        self.viewport
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn reported_scale(&self) -> f64 {
        self.reported_scale
    }

    /// Aspect-fit size of the photo, `None` until photo and viewport are known.
    pub fn effective_size(&self) -> Option<SizeD> {
        self.effective_size
    }

    /// Records the natural size of the photo.
    ///
    /// The size is fixed once set: returns false and keeps the old size when
    /// called a second time. A size without area (or not finite) is rejected
    /// and the photo stays pending.
    pub fn set_image(&mut self, size: SizeD) -> bool {
        let finite = size.width().is_finite() && size.height().is_finite();
        if !finite || size.is_empty() {
            warn!(
                "ignoring unusable image size {}x{}, still pending",
                size.width(),
                size.height()
            );
            return false;
        }
        if let PhotoState::Ready(current) = self.photo {
            warn!(
                "ignoring image size {}x{}, already showing {}x{}",
                size.width(),
                size.height(),
                current.width(),
                current.height()
            );
            return false;
        }
        self.photo = PhotoState::Ready(size);
        self.reset_scale();
        self.recompute_effective_size();
        true
    }

    /// Handles a layout or rotation change from `old` to `new`.
    ///
    /// Returns false, leaving all state untouched, when the size did not
    /// change. Otherwise the scale is reset and the effective size recomputed.
    pub fn on_viewport_changed(&mut self, old: SizeD, new: SizeD) -> bool {
        if old == new {
            return false;
        }
        debug!(
            "viewport {}x{} -> {}x{}",
            old.width(),
            old.height(),
            new.width(),
            new.height()
        );
        self.viewport = new;
        self.reset_scale();
        self.recompute_effective_size();
        true
    }

    /// Records a scale reported by the host. The zoom state keeps the clamped
    /// value; the raw value drives centering so insets follow a bounce.
    pub fn update_scale(&mut self, scale: f64) {
        self.reported_scale = scale;
        self.zoom.set_scale(scale);
    }

    /// Scale the host should settle on when the reported scale is outside the limits.
    pub fn settle_target(&self) -> Option<f64> {
        let clamped = self.zoom.limits().clamp(self.reported_scale);
        if clamped != self.reported_scale {
            Some(clamped)
        } else {
            None
        }
    }

    /// Centering insets for the current (reported) scale.
    pub fn content_inset(&self) -> Option<InsetsD> {
        self.effective_size
            .map(|size| zoom::content_inset(self.viewport, size, self.reported_scale))
    }

    pub fn layout(&self) -> Option<Layout> {
        let image_frame = self.effective_size?;
        Some(Layout {
            image_frame,
            content_inset: zoom::content_inset(self.viewport, image_frame, self.reported_scale),
            scale: self.zoom.scale(),
        })
    }

    /// Double tap at `tap` in container coordinates. Ignored until there is geometry.
    ///
    /// Hit-testing uses the reported scale, the one the image is drawn at.
    pub fn resolve_double_tap<C>(&self, tap: PointD, converter: &C) -> ZoomAction
    where
        C: PointConverter + ?Sized,
    {
        match self.effective_size {
            Some(size) => zoom::resolve_double_tap_at(
                tap,
                converter,
                self.viewport,
                size,
                self.reported_scale,
                &self.zoom,
            ),
            None => ZoomAction::Ignore,
        }
    }

    fn reset_scale(&mut self) {
        self.zoom.reset();
        self.reported_scale = self.zoom.scale();
    }

    fn recompute_effective_size(&mut self) {
        self.effective_size = self
            .image_size()
            .and_then(|image| zoom::effective_size(self.viewport, image));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_view() -> ViewData {
        let mut data = ViewData::default();
        data.set_image(SizeD::new(600.0, 300.0));
        data.on_viewport_changed(SizeD::default(), SizeD::new(300.0, 300.0));
        data
    }

    #[test]
    fn test_pending_has_no_geometry() {
        let mut data = ViewData::default();
        assert_eq!(data.photo(), PhotoState::Pending);
        assert!(data.on_viewport_changed(SizeD::default(), SizeD::new(300.0, 300.0)));
        assert_eq!(data.effective_size(), None);
        assert_eq!(data.content_inset(), None);
        assert_eq!(data.layout(), None);
        assert_eq!(
            data.resolve_double_tap(PointD::new(150.0, 150.0), &|p: PointD| p),
            ZoomAction::Ignore
        );
    }

    #[test]
    fn test_image_before_viewport() {
        let mut data = ViewData::default();
        assert!(data.set_image(SizeD::new(600.0, 300.0)));
        assert_eq!(data.effective_size(), None);

        data.on_viewport_changed(SizeD::default(), SizeD::new(300.0, 300.0));
        assert_eq!(data.effective_size(), Some(SizeD::new(300.0, 150.0)));
    }

    #[test]
    fn test_layout_example() {
        let data = ready_view();
        let layout = data.layout().unwrap();
        assert_eq!(layout.image_frame, SizeD::new(300.0, 150.0));
        assert_eq!(layout.content_inset, InsetsD::new(75.0, 0.0, 75.0, 0.0));
        assert_eq!(layout.scale, 1.0);
    }

    #[test]
    fn test_image_size_is_fixed() {
        let mut data = ready_view();
        assert!(!data.set_image(SizeD::new(100.0, 100.0)));
        assert_eq!(data.image_size(), Some(SizeD::new(600.0, 300.0)));
    }

    #[test]
    fn test_degenerate_image_stays_pending() {
        let mut data = ViewData::default();
        data.on_viewport_changed(SizeD::default(), SizeD::new(300.0, 300.0));

        assert!(!data.set_image(SizeD::new(0.0, 0.0)));
        assert!(!data.set_image(SizeD::new(f64::NAN, 300.0)));
        assert!(!data.set_image(SizeD::new(600.0, f64::INFINITY)));
        assert_eq!(data.photo(), PhotoState::Pending);
        assert_eq!(data.layout(), None);

        assert!(data.set_image(SizeD::new(600.0, 300.0)));
        assert_eq!(data.effective_size(), Some(SizeD::new(300.0, 150.0)));
    }

    #[test]
    fn test_double_tap_during_bounce_hits_displayed_image() {
        let mut data = ViewData::default();
        data.set_image(SizeD::new(300.0, 300.0));
        data.on_viewport_changed(SizeD::default(), SizeD::new(300.0, 300.0));
        data.update_scale(0.8);

        // Image drawn over 30..270, so x = 10 is letterbox
        assert_eq!(
            data.resolve_double_tap(PointD::new(10.0, 150.0), &|p: PointD| p),
            ZoomAction::Ignore
        );
        assert!(matches!(
            data.resolve_double_tap(PointD::new(40.0, 150.0), &|p: PointD| p),
            ZoomAction::ZoomIn(_)
        ));
    }

    #[test]
    fn test_same_viewport_is_noop() {
        let mut data = ready_view();
        data.update_scale(2.0);
        let before = data.clone();

        let viewport = SizeD::new(300.0, 300.0);
        assert!(!data.on_viewport_changed(viewport, viewport));
        assert_eq!(data.zoom(), before.zoom());
        assert_eq!(data.reported_scale(), 2.0);
        assert_eq!(data.content_inset(), before.content_inset());
    }

    #[test]
    fn test_rotation_resets_scale() {
        let mut data = ready_view();
        data.update_scale(2.5);

        assert!(data.on_viewport_changed(SizeD::new(300.0, 300.0), SizeD::new(600.0, 200.0)));
        assert_eq!(data.zoom().scale(), 1.0);
        assert_eq!(data.effective_size(), Some(SizeD::new(400.0, 200.0)));
        assert_eq!(
            data.content_inset(),
            Some(InsetsD::new(0.0, 100.0, 0.0, 100.0))
        );
    }

    #[test]
    fn test_bounce_and_settle() {
        let mut data = ready_view();
        data.update_scale(3.3);
        assert_eq!(data.zoom().scale(), 3.0);
        assert_eq!(data.settle_target(), Some(3.0));

        data.update_scale(0.9);
        assert_eq!(data.zoom().scale(), 1.0);
        assert_eq!(data.settle_target(), Some(1.0));
        // Insets follow the elastic scale
        let inset = data.content_inset().unwrap();
        assert!((inset.left - 15.0).abs() < 1e-9);

        data.update_scale(2.0);
        assert_eq!(data.settle_target(), None);
    }
}
