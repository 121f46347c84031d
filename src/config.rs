//! Viewer configuration from flags and `MUDMAP_*` environment variables.

use map_canvas::consts::DEFAULT_ZOOM;
use map_canvas::zone::RoomId;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://map.db";
pub const DEFAULT_ROOM_ID: RoomId = 1170;
pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("zoom must be a finite number greater than zero, got {0}")]
    InvalidZoom(f64),
    #[error("viewport must be larger than zero, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}

#[derive(Debug, Clone, clap::Args)]
pub struct ViewerConfig {
    /// Map database to read rooms and exits from.
    #[arg(long, env = "MUDMAP_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Room the view starts centered on.
    #[arg(long, env = "MUDMAP_ROOM_ID", default_value_t = DEFAULT_ROOM_ID)]
    pub room_id: RoomId,

    /// World units per surface unit.
    #[arg(long, env = "MUDMAP_ZOOM", default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    #[arg(long, env = "MUDMAP_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    #[arg(long, env = "MUDMAP_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            room_id: DEFAULT_ROOM_ID,
            zoom: DEFAULT_ZOOM,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl ViewerConfig {
    /// Reject values the projection cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zoom that is not finite and positive, or
    /// a viewport side that is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidViewport { width: self.width, height: self.height });
        }
        Ok(())
    }
}
