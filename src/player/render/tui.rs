//! Ratatui canvas backend for the three scatter views.
//!
//! Buffers scatter/label/title requests per view and flushes them as one
//! terminal frame on `redraw`: three bordered canvases side by side, a
//! notice line, and the status/controls footer.

use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, Paragraph,
    },
    DefaultTerminal, Frame,
};

use super::surface::{Notice, PlaybackStatus, PlotBounds, PlotSurface, View};
use crate::theme::Theme;

/// Vertical guide lines drawn in every view, in plot coordinates.
const GUIDE_XS: [f64; 5] = [0.0, 3.0, 6.0, -3.0, -6.0];

/// Buffered content for one view.
#[derive(Debug, Default)]
struct ViewFrame {
    title: String,
    scatters: Vec<(Vec<(f64, f64)>, Color)>,
    labels: Vec<((f64, f64), String, Color)>,
}

/// Terminal-backed [`PlotSurface`].
pub struct TuiSurface {
    terminal: DefaultTerminal,
    theme: Theme,
    bounds: PlotBounds,
    views: [ViewFrame; 3],
    status: PlaybackStatus,
    notice: Option<Notice>,
}

impl TuiSurface {
    pub fn new(terminal: DefaultTerminal, theme: Theme, bounds: PlotBounds) -> Self {
        Self {
            terminal,
            theme,
            bounds,
            views: Default::default(),
            status: PlaybackStatus::default(),
            notice: None,
        }
    }

    fn view_mut(&mut self, view: View) -> &mut ViewFrame {
        &mut self.views[view_index(view)]
    }
}

fn view_index(view: View) -> usize {
    match view {
        View::Image => 0,
        View::Radar => 1,
        View::Combined => 2,
    }
}

impl PlotSurface for TuiSurface {
    fn clear(&mut self) {
        self.views = Default::default();
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        self.status = status;
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    fn set_title(&mut self, view: View, title: String) {
        self.view_mut(view).title = title;
    }

    fn scatter(&mut self, view: View, points: &[(f64, f64)], color: Color) {
        self.view_mut(view).scatters.push((points.to_vec(), color));
    }

    fn label(&mut self, view: View, point: (f64, f64), text: String, color: Color) {
        self.view_mut(view).labels.push((point, text, color));
    }

    fn redraw(&mut self) -> Result<()> {
        let views = &self.views;
        let status = self.status;
        let notice = &self.notice;
        let theme = &self.theme;
        let bounds = self.bounds;
        self.terminal.draw(|frame| {
            render_frame(frame, views, status, notice, theme, bounds);
        })?;
        Ok(())
    }
}

/// Lay out and draw one full frame.
fn render_frame(
    frame: &mut Frame,
    views: &[ViewFrame; 3],
    status: PlaybackStatus,
    notice: &Option<Notice>,
    theme: &Theme,
    bounds: PlotBounds,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let plots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);

    for (view_frame, area) in views.iter().zip(plots.iter()) {
        render_view(frame, view_frame, *area, theme, bounds);
    }
    render_notice_line(frame, rows[1], notice, theme);
    render_status_bar(frame, rows[2], status, theme);
}

/// Draw one scatter view: border, title, guide lines, points, labels.
fn render_view(frame: &mut Frame, view: &ViewFrame, area: Rect, theme: &Theme, bounds: PlotBounds) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_secondary))
        .title(Span::styled(
            view.title.clone(),
            Style::default().fg(theme.text_primary),
        ));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Dot)
        .x_bounds([bounds.x_min, bounds.x_max])
        .y_bounds([bounds.y_min, bounds.y_max])
        .paint(|ctx| {
            for gx in GUIDE_XS {
                if gx >= bounds.x_min && gx <= bounds.x_max {
                    ctx.draw(&CanvasLine {
                        x1: gx,
                        y1: bounds.y_min,
                        x2: gx,
                        y2: bounds.y_max,
                        color: theme.guide,
                    });
                }
            }
            for (points, color) in &view.scatters {
                ctx.draw(&Points {
                    coords: points,
                    color: *color,
                });
            }
            for ((x, y), text, color) in &view.labels {
                ctx.print(
                    *x,
                    *y,
                    Line::styled(text.clone(), Style::default().fg(*color)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

/// Draw the notice line (go-to prompt echo or diagnostic).
fn render_notice_line(frame: &mut Frame, area: Rect, notice: &Option<Notice>, theme: &Theme) {
    let line = match notice {
        None => Line::default(),
        Some(Notice::Prompt(input)) => Line::from(vec![
            Span::styled(
                " go to step or range (e.g. 5 or 2-8): ",
                Style::default().fg(theme.text_primary),
            ),
            Span::styled(
                format!("{input}\u{2588}"),
                Style::default().fg(theme.accent),
            ),
        ]),
        Some(Notice::Error(message)) => Span::styled(
            format!(" {message}"),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .into(),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status/controls footer.
fn render_status_bar(frame: &mut Frame, area: Rect, status: PlaybackStatus, theme: &Theme) {
    let value = Style::default().fg(theme.text_primary);
    let dim = Style::default().fg(theme.text_secondary);
    let key = Style::default().fg(theme.accent);

    let icon = if status.paused { " \u{23f8} " } else { " \u{25b6} " };
    let last_step = status.frame_count.saturating_sub(1);
    let play_action = if status.paused { ":play " } else { ":pause " };
    let on_off = |flag: bool| if flag { "on" } else { "off" };

    let mut spans = vec![
        Span::styled(icon, value),
        Span::styled(" t:", dim),
        Span::styled(format!("{}/{} ", status.step, last_step), value),
        Span::styled("past:", dim),
        Span::styled(format!("{} ", on_off(status.show_past)), value),
        Span::styled("coords:", dim),
        Span::styled(format!("{} ", on_off(status.show_coords)), value),
    ];
    spans.extend([
        Span::styled("\u{2502} ", dim),
        Span::styled("space", key),
        Span::styled(play_action, dim),
        Span::styled("\u{2190}\u{2192}", key),
        Span::styled(":step ", dim),
        Span::styled("c", key),
        Span::styled(":coords ", dim),
        Span::styled("p", key),
        Span::styled(":past ", dim),
        Span::styled("g", key),
        Span::styled(":goto ", dim),
        Span::styled("q", key),
        Span::styled(":quit", dim),
    ]);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
