//! The `play` subcommand: load both streams and run the viewer.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::dataset::{Dataset, Source};
use crate::player::{self, SessionOptions};

/// Load both CSV files and run the interactive session.
pub fn run(image_path: &Path, radar_path: &Path, options: SessionOptions) -> Result<()> {
    let image =
        Dataset::from_path(Source::Image, image_path).context("loading image detections")?;
    let radar =
        Dataset::from_path(Source::Radar, radar_path).context("loading radar detections")?;

    if image.is_empty() || radar.is_empty() {
        // Playback still runs, it just has nothing to show.
        warn!(
            image = image.len(),
            radar = radar.len(),
            "a stream is empty, the timeline has no frames"
        );
    }

    player::run(&image, &radar, options)
}
