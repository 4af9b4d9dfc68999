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

pub mod data;
pub mod transition;

use std::time::Duration;

use log::{debug, warn};

use crate::{
    config::{config, ZoomConfig},
    rect::{InsetsD, PointD, RectD, SizeD},
};

use data::{
    zoom::{PointConverter, ZoomAction, ZoomLimits},
    Layout, PhotoState, ViewData,
};
use transition::ZoomTransition;

/// Instruction for the host's scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewUpdate {
    /// Show (true) or hide the loading indicator
    LoadingIndicator(bool),
    /// Size of the image view at the minimum scale, also the scroll content size
    ImageFrame(SizeD),
    ContentInset(InsetsD),
    /// Set the zoom scale without animation
    Scale(f64),
    AnimateToScale { scale: f64, duration: Duration },
    /// Zoom so that `rect` (image view coordinates) fills the viewport
    AnimateToRect { rect: RectD, duration: Duration },
}

/// Controller of a single-photo zoom view.
///
/// Every handler takes a host event and returns the updates the host must
/// apply, in order. An empty list means nothing changed.
#[derive(Debug, Clone)]
pub struct PhotoZoomView {
    data: ViewData,
    transition: Option<ZoomTransition>,
    animation_duration: Duration,
    double_tap_zoom: bool,
}

impl Default for PhotoZoomView {
    fn default() -> Self {
        Self::with_config(&ZoomConfig::default())
    }
}

impl PhotoZoomView {
    /// Creates a view using the process-wide configuration
    pub fn new() -> Self {
        Self::with_config(config())
    }

    pub fn with_config(config: &ZoomConfig) -> Self {
        let limits = config.limits().unwrap_or_else(|err| {
            warn!("{err}, using default zoom limits");
            ZoomLimits::default()
        });
        Self {
            data: ViewData::new(limits),
            transition: None,
            animation_duration: config.animation_duration(),
            double_tap_zoom: config.double_tap_zoom,
        }
    }

    pub fn data(&self) -> &ViewData {
        &self.data
    }

    pub fn transition(&self) -> Option<&ZoomTransition> {
        self.transition.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.data.photo() == PhotoState::Pending
    }

    pub fn layout(&self) -> Option<Layout> {
        self.data.layout()
    }

    /// The photo is still loading.
    pub fn set_image_pending(&mut self) -> Vec<ViewUpdate> {
        if self.is_loading() {
            vec![ViewUpdate::LoadingIndicator(true)]
        } else {
            warn!("photo already available, not showing loading indicator");
            Vec::new()
        }
    }

    /// The photo has arrived with the given natural size.
    pub fn set_image(&mut self, size: SizeD) -> Vec<ViewUpdate> {
        if !self.data.set_image(size) {
            return Vec::new();
        }
        self.transition = None;
        let mut updates = vec![ViewUpdate::LoadingIndicator(false)];
        updates.extend(self.relayout());
        updates
    }

    /// The container went from `old` to `new`, e.g. on rotation.
    pub fn viewport_changed(&mut self, old: SizeD, new: SizeD) -> Vec<ViewUpdate> {
        if !self.data.on_viewport_changed(old, new) {
            return Vec::new();
        }
        if self.transition.take().is_some() {
            debug!("viewport change supersedes running zoom transition");
        }
        self.relayout()
    }

    /// The host's zoom scale changed (pinch, or a frame of a host animation).
    pub fn scale_changed(&mut self, scale: f64) -> Vec<ViewUpdate> {
        self.data.update_scale(scale);
        self.recenter()
    }

    /// After a pinch ends: animate back into the limits when the gesture left
    /// the scale outside them.
    pub fn settle_scale(&mut self) -> Vec<ViewUpdate> {
        match self.data.settle_target() {
            Some(scale) => {
                self.start_transition(scale);
                vec![ViewUpdate::AnimateToScale {
                    scale,
                    duration: self.animation_duration,
                }]
            }
            None => Vec::new(),
        }
    }

    pub fn double_tap<C>(&mut self, tap: PointD, converter: &C) -> Vec<ViewUpdate>
    where
        C: PointConverter + ?Sized,
    {
        if !self.double_tap_zoom {
            return Vec::new();
        }
        match self.data.resolve_double_tap(tap, converter) {
            ZoomAction::Ignore => Vec::new(),
            ZoomAction::ZoomOut => {
                let scale = self.data.zoom().min_scale();
                self.start_transition(scale);
                vec![ViewUpdate::AnimateToScale {
                    scale,
                    duration: self.animation_duration,
                }]
            }
            ZoomAction::ZoomIn(rect) => {
                self.start_transition(self.data.zoom().max_scale());
                vec![ViewUpdate::AnimateToRect {
                    rect,
                    duration: self.animation_duration,
                }]
            }
        }
    }

    /// One frame of the running transition, `elapsed` since it started.
    pub fn transition_frame(&mut self, elapsed: Duration) -> Vec<ViewUpdate> {
        match self.transition {
            Some(transition) => {
                self.data.update_scale(transition.scale_at(elapsed));
                self.recenter()
            }
            None => Vec::new(),
        }
    }

    /// The host finished animating. Safe to call without a running transition.
    pub fn finish_transition(&mut self) -> Vec<ViewUpdate> {
        if let Some(transition) = self.transition.take() {
            self.data.update_scale(transition.to_scale());
        }
        self.recenter()
    }

    fn start_transition(&mut self, to_scale: f64) {
        self.transition = Some(ZoomTransition::new(
            self.data.reported_scale(),
            to_scale,
            self.animation_duration,
        ));
    }

    fn recenter(&self) -> Vec<ViewUpdate> {
        self.data
            .content_inset()
            .map(ViewUpdate::ContentInset)
            .into_iter()
            .collect()
    }

    fn relayout(&self) -> Vec<ViewUpdate> {
        match self.data.layout() {
            Some(layout) => vec![
                ViewUpdate::Scale(layout.scale),
                ViewUpdate::ImageFrame(layout.image_frame),
                ViewUpdate::ContentInset(layout.content_inset),
            ],
            None => Vec::new(),
        }
    }
}
