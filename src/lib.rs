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

//! Zoom and pan geometry for a single-photo view inside a gallery.
//!
//! The host UI toolkit owns the scroll container, the image view and the
//! animations. This crate computes what they should show: the aspect-fit size
//! of the photo, the insets that keep it centered, and what a double tap
//! should do. [`PhotoZoomView`] turns host events into [`ViewUpdate`]s; the
//! pure functions in [`view::data::zoom`] can also be used directly.

pub mod config;
pub mod error;
pub mod rect;
pub mod view;

pub use config::ZoomConfig;
pub use error::{ZoomError, ZoomResult};
pub use view::{
    data::{
        zoom::{PointConverter, ZoomAction, ZoomLimits, ZoomState},
        Layout, PhotoState,
    },
    PhotoZoomView, ViewUpdate,
};
