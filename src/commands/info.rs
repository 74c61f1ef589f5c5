//! The `info` subcommand: summarize both streams and the unified timeline.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::dataset::{Dataset, Source};
use crate::timeline::Timeline;

/// Summary of one detection stream.
#[derive(Debug, Serialize)]
pub struct StreamSummary {
    pub records: usize,
    pub first: Option<String>,
    pub last: Option<String>,
}

/// Summary of both streams and the timeline they unify into.
#[derive(Debug, Serialize)]
pub struct InfoSummary {
    pub image: StreamSummary,
    pub radar: StreamSummary,
    /// Number of distinct instants across both streams
    pub frames: usize,
    /// Seconds between the first and last instant on the timeline
    pub span_seconds: Option<f64>,
}

/// Build the summary for two loaded datasets.
pub fn summarize(image: &Dataset, radar: &Dataset) -> InfoSummary {
    let timeline = Timeline::unify(image, radar);
    let span_seconds = match (timeline.instants().first(), timeline.instants().last()) {
        (Some(first), Some(last)) => {
            Some((*last - *first).num_milliseconds() as f64 / 1000.0)
        }
        _ => None,
    };
    InfoSummary {
        image: stream_summary(image),
        radar: stream_summary(radar),
        frames: timeline.frame_count(),
        span_seconds,
    }
}

fn stream_summary(dataset: &Dataset) -> StreamSummary {
    let times = || dataset.records().iter().map(|r| r.time);
    StreamSummary {
        records: dataset.len(),
        first: times().min().map(|t| t.to_string()),
        last: times().max().map(|t| t.to_string()),
    }
}

/// Load both CSV files and print the summary.
pub fn run(image_path: &Path, radar_path: &Path, json: bool) -> Result<()> {
    let image =
        Dataset::from_path(Source::Image, image_path).context("loading image detections")?;
    let radar =
        Dataset::from_path(Source::Radar, radar_path).context("loading radar detections")?;
    let summary = summarize(&image, &radar);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_stream("image", &summary.image);
        print_stream("radar", &summary.radar);
        match summary.span_seconds {
            Some(span) => println!(
                "timeline: {} frames spanning {:.3}s",
                summary.frames, span
            ),
            None => println!("timeline: 0 frames"),
        }
    }
    Ok(())
}

fn print_stream(name: &str, stream: &StreamSummary) {
    match (&stream.first, &stream.last) {
        (Some(first), Some(last)) => {
            println!("{name}: {} records ({first} .. {last})", stream.records)
        }
        _ => println!("{name}: 0 records"),
    }
}
