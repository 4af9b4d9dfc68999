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

use std::{
    fs::{create_dir_all, File},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    sync::OnceLock,
    time::Duration,
};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ZoomError, ZoomResult},
    view::data::zoom::{ZoomLimits, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE},
    view::transition::DEFAULT_ANIMATION_DURATION,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Duration of double-tap and settle animations in milliseconds
    pub animation_ms: u64,
    pub double_tap_zoom: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            animation_ms: DEFAULT_ANIMATION_DURATION.as_millis() as u64,
            double_tap_zoom: true,
        }
    }
}

impl ZoomConfig {
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("photozoom"))
    }

    /// Location of the configuration file, `None` when the platform has no
    /// user configuration directory.
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("photozoom.json"))
    }

    pub fn load_from(path: &Path) -> ZoomResult<Self> {
        let file = File::open(path).map_err(|source| ZoomError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ZoomError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> ZoomResult<()> {
        let io_err = |source| ZoomError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            create_dir_all(dir).map_err(io_err)?;
        }
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| {
            ZoomError::ConfigFormat {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }

    /// Writes the configuration to [`ZoomConfig::config_file`]. Nothing is
    /// written unless this is called.
    pub fn save(&self) -> ZoomResult<()> {
        let path = Self::config_file().ok_or(ZoomError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn limits(&self) -> ZoomResult<ZoomLimits> {
        ZoomLimits::new(self.min_scale, self.max_scale)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

fn read_config(path: Option<&Path>) -> ZoomConfig {
    let Some(path) = path else {
        info!("no configuration directory, using defaults");
        return ZoomConfig::default();
    };
    match ZoomConfig::load_from(path) {
        Ok(config) => {
            info!("loaded configuration from {path:?}");
            config
        }
        Err(ZoomError::ConfigIo { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            info!("no configuration at {path:?}, using defaults");
            ZoomConfig::default()
        }
        Err(err) => {
            warn!("{err}, using defaults");
            ZoomConfig::default()
        }
    }
}

/// Process-wide configuration, read from disk on first use. Never writes.
pub fn config<'a>() -> &'a ZoomConfig {
    static CONFIG: OnceLock<ZoomConfig> = OnceLock::new();
    CONFIG.get_or_init(|| read_config(ZoomConfig::config_file().as_deref()))
}
