//! In-memory plotting surface that records every request.
//!
//! Used by tests to observe what the playback core drew, and by any caller
//! that wants to inspect frames without a terminal.

use anyhow::Result;
use ratatui::style::Color;

use super::surface::{Notice, PlaybackStatus, PlotSurface, View};

/// One recorded surface request.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotRequest {
    Clear,
    Status(PlaybackStatus),
    Notice(Option<Notice>),
    Title {
        view: View,
        title: String,
    },
    Scatter {
        view: View,
        points: Vec<(f64, f64)>,
        color: Color,
    },
    Label {
        view: View,
        point: (f64, f64),
        text: String,
        color: Color,
    },
    Redraw,
}

/// A [`PlotSurface`] that appends every request to a log.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    requests: Vec<PlotRequest>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> &[PlotRequest] {
        &self.requests
    }

    /// The step reported by the status of each completed frame, in draw
    /// order. A frame is complete once its `Redraw` arrives.
    pub fn steps_drawn(&self) -> Vec<usize> {
        let mut steps = Vec::new();
        let mut current = None;
        for request in &self.requests {
            match request {
                PlotRequest::Status(status) => current = Some(status.step),
                PlotRequest::Redraw => {
                    if let Some(step) = current {
                        steps.push(step);
                    }
                }
                _ => {}
            }
        }
        steps
    }

    /// Requests belonging to the most recent frame (since the last `Clear`).
    pub fn last_frame(&self) -> &[PlotRequest] {
        let start = self
            .requests
            .iter()
            .rposition(|r| matches!(r, PlotRequest::Clear))
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.requests[start..]
    }

    /// Scatter points queued for `view` in the most recent frame.
    pub fn last_scatter(&self, view: View) -> Vec<(f64, f64)> {
        self.last_frame()
            .iter()
            .filter_map(|r| match r {
                PlotRequest::Scatter {
                    view: v, points, ..
                } if *v == view => Some(points.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Labels queued for `view` in the most recent frame.
    pub fn last_labels(&self, view: View) -> Vec<String> {
        self.last_frame()
            .iter()
            .filter_map(|r| match r {
                PlotRequest::Label { view: v, text, .. } if *v == view => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent notice request, if any was ever set.
    pub fn last_notice(&self) -> Option<&Option<Notice>> {
        self.requests.iter().rev().find_map(|r| match r {
            PlotRequest::Notice(notice) => Some(notice),
            _ => None,
        })
    }
}

impl PlotSurface for RecordingSurface {
    fn clear(&mut self) {
        self.requests.push(PlotRequest::Clear);
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        self.requests.push(PlotRequest::Status(status));
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        self.requests.push(PlotRequest::Notice(notice));
    }

    fn set_title(&mut self, view: View, title: String) {
        self.requests.push(PlotRequest::Title { view, title });
    }

    fn scatter(&mut self, view: View, points: &[(f64, f64)], color: Color) {
        self.requests.push(PlotRequest::Scatter {
            view,
            points: points.to_vec(),
            color,
        });
    }

    fn label(&mut self, view: View, point: (f64, f64), text: String, color: Color) {
        self.requests.push(PlotRequest::Label {
            view,
            point,
            text,
            color,
        });
    }

    fn redraw(&mut self) -> Result<()> {
        self.requests.push(PlotRequest::Redraw);
        Ok(())
    }
}
