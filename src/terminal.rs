// SPDX-License-Identifier: GPL-3.0-only

//! Terminal-based disparity preview
//!
//! Renders colour-mapped disparity frames to the terminal using Unicode
//! half-block characters for improved vertical resolution.

use crate::colormap::RangeMode;
use crate::config::Config;
use crate::constants::PREVIEW_FRAME_INTERVAL;
use crate::frame::{ColorImage, DisparityFrame};
use crate::viewer::{DisparityView, FrameOutcome, ImageSink};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal, backend::CrosstermBackend, buffer::Buffer, layout::Rect, style::Color,
    widgets::Widget,
};
use std::io::{self, stdout};
use tracing::{error, info};

/// Where preview frames come from
#[derive(Debug, Clone)]
pub enum PreviewSource {
    /// A single frame shown until the user quits
    Still(DisparityFrame),
    /// An animated test pattern
    Synthetic,
}

/// Run the terminal preview
pub fn run(source: PreviewSource, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, source, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    source: PreviewSource,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = DisparityView::new(FrameWidget::new(), config.range_mode());
    let mut tick: u32 = 0;
    let mut last_error: Option<String> = None;

    if let PreviewSource::Still(frame) = &source {
        info!(
            width = frame.width,
            height = frame.height,
            "Previewing disparity frame"
        );
        if let FrameOutcome::Skipped(err) = view.handle_frame(frame) {
            error!(%err, "Frame could not be rendered");
            last_error = Some(err.to_string());
        }
    }

    loop {
        if matches!(source, PreviewSource::Synthetic) {
            let frame = synthetic_frame(tick);
            last_error = match view.handle_frame(&frame) {
                FrameOutcome::Shown => None,
                FrameOutcome::Skipped(err) => Some(err.to_string()),
            };
            tick = tick.wrapping_add(1);
        }

        let status = build_status_message(&view, last_error.as_deref());

        terminal.draw(|f| {
            let area = f.area();

            // Reserve bottom line for status
            let image_area = Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height.saturating_sub(1),
            };
            f.render_widget(view.sink(), image_area);

            let status_area = Rect {
                x: area.x,
                y: area.height.saturating_sub(1),
                width: area.width,
                height: 1,
            };
            f.render_widget(StatusBar { message: &status }, status_area);
        })?;

        if event::poll(PREVIEW_FRAME_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('d') => {
                    let range = match view.range() {
                        RangeMode::Dynamic => RangeMode::Fixed {
                            max_range: config.max_range,
                        },
                        RangeMode::Fixed { .. } => RangeMode::Dynamic,
                    };
                    view.set_range(range);
                    if let PreviewSource::Still(frame) = &source {
                        last_error = match view.handle_frame(frame) {
                            FrameOutcome::Shown => None,
                            FrameOutcome::Skipped(err) => Some(err.to_string()),
                        };
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn build_status_message(view: &DisparityView<FrameWidget>, error: Option<&str>) -> String {
    let range = match view.range() {
        RangeMode::Dynamic => "dynamic".to_string(),
        RangeMode::Fixed { max_range } => format!("fixed 0..{max_range}"),
    };
    let stats = view.stats();
    let mut message = format!(
        " q: quit | d: toggle range ({range}) | shown {} skipped {}",
        stats.shown, stats.skipped
    );
    if let Some(error) = error {
        message.push_str(" | ");
        message.push_str(error);
    }
    message
}

/// Animated test pattern: a ramp with a travelling wave, and a periodic
/// "no data" frame to exercise the skip path.
pub fn synthetic_frame(tick: u32) -> DisparityFrame {
    const WIDTH: u32 = 160;
    const HEIGHT: u32 = 96;
    const MAX: f32 = 64.0;

    if tick % 100 == 99 {
        let blank = vec![0.0; (WIDTH * HEIGHT) as usize];
        return DisparityFrame::from_samples(WIDTH, HEIGHT, &blank, 0.0, 0.0);
    }

    let phase = tick as f32 * 0.1;
    let mut samples = Vec::with_capacity((WIDTH * HEIGHT) as usize);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let ramp = x as f32 / (WIDTH - 1) as f32 * MAX;
            let wave = (y as f32 * 0.15 + phase).sin() * 6.0;
            samples.push(ramp + wave);
        }
    }
    DisparityFrame::from_samples(WIDTH, HEIGHT, &samples, 0.0, MAX)
}

/// Widget showing the most recent colour image
struct FrameWidget {
    image: Option<ColorImage>,
}

impl FrameWidget {
    fn new() -> Self {
        Self { image: None }
    }
}

impl ImageSink for FrameWidget {
    fn show(&mut self, image: ColorImage) {
        self.image = Some(image);
    }

    fn clear(&mut self) {
        self.image = None;
    }
}

impl Widget for &FrameWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(image) = self.image.as_ref().filter(|i| i.width > 0 && i.height > 0) else {
            let msg = "Waiting for disparity...";
            let x = area.x + (area.width.saturating_sub(msg.len() as u16)) / 2;
            let y = area.y + area.height / 2;
            if y < area.y + area.height && x < area.x + area.width {
                buf.set_string(x, y, msg, ratatui::style::Style::default());
            }
            return;
        };

        // Each terminal cell displays 2 vertical pixels
        let aspect = image.width as f64 / image.height as f64;
        let term_width = area.width as f64;
        let term_height = (area.height * 2) as f64;

        let (display_width, display_height) = if term_width / term_height > aspect {
            let h = term_height;
            ((h * aspect) as u16, (h / 2.0) as u16)
        } else {
            let w = term_width;
            (w as u16, (w / aspect / 2.0) as u16)
        };
        if display_width == 0 || display_height == 0 {
            return;
        }

        let x_offset = area.x + (area.width.saturating_sub(display_width)) / 2;
        let y_offset = area.y + (area.height.saturating_sub(display_height)) / 2;
        let x_scale = image.width as f64 / display_width as f64;
        let y_scale = image.height as f64 / (display_height * 2) as f64;

        for ty in 0..display_height {
            for tx in 0..display_width {
                let src_x = (tx as f64 * x_scale) as u32;
                let src_top = (ty as f64 * 2.0 * y_scale) as u32;
                let src_bottom = ((ty as f64 * 2.0 + 1.0) * y_scale) as u32;

                if let Some(cell) = buf.cell_mut((x_offset + tx, y_offset + ty)) {
                    cell.set_char('▀');
                    cell.set_fg(sample_pixel(image, src_x, src_top));
                    cell.set_bg(sample_pixel(image, src_x, src_bottom));
                }
            }
        }
    }
}

fn sample_pixel(image: &ColorImage, x: u32, y: u32) -> Color {
    let x = x.min(image.width - 1);
    let y = y.min(image.height - 1);
    match image.pixel(x, y) {
        Some([r, g, b]) => Color::Rgb(r, g, b),
        None => Color::Black,
    }
}

/// Status bar widget
struct StatusBar<'a> {
    message: &'a str,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ');
                cell.set_bg(Color::DarkGray);
            }
        }

        let text: String = self.message.chars().take(area.width as usize).collect();
        buf.set_string(
            area.x,
            area.y,
            text,
            ratatui::style::Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::ColorTable;

    #[test]
    fn test_synthetic_frames_map() {
        let mut view = DisparityView::new(FrameWidget::new(), RangeMode::Dynamic);
        assert_eq!(view.handle_frame(&synthetic_frame(0)), FrameOutcome::Shown);
        assert!(matches!(
            view.handle_frame(&synthetic_frame(99)),
            FrameOutcome::Skipped(ref e) if e.is_degenerate()
        ));
        assert!(view.sink().image.is_some());
    }

    #[test]
    fn test_widget_renders_half_blocks() {
        let mut widget = FrameWidget::new();
        let frame = DisparityFrame::from_samples(2, 2, &[0.0, 0.0, 10.0, 10.0], 0.0, 10.0);
        widget.show(crate::colormap::map_to_color(&frame).unwrap());

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        (&widget).render(area, &mut buf);

        let table = ColorTable::standard();
        let [r0, g0, b0] = table.rgb(0);
        let [r1, g1, b1] = table.rgb(255);
        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(r0, g0, b0));
        assert_eq!(cell.bg, Color::Rgb(r1, g1, b1));
    }

    #[test]
    fn test_placeholder_without_image() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        (&FrameWidget::new()).render(area, &mut buf);
        let row: String = (0..30).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("Waiting for disparity"));
    }
}
