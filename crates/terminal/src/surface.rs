use crate::chart::{self, Cell};
use chrono::Local;
use devplot_config::DisplayConfig;
use devplot_core::{GridSlot, PaneHandle, PlotError, Result, Series, SeriesKind, Surface};
use devplot_theme::Theme;
use std::io::Write;
use std::ops::Range;

/// ANSI "clear screen, cursor home".
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
/// Gap between two panes on the same grid row.
const GUTTER: &str = "   ";

/// A [`Surface`] that renders the pane grid as text on every `refresh`.
///
/// Drawing calls only update in-memory pane state; nothing reaches the
/// writer until [`refresh`](Surface::refresh).
pub struct TextSurface<W: Write> {
    out:          W,
    panes:        Vec<TextPane>,
    width:        usize,
    height:       usize,
    clear_screen: bool,
    theme:        Theme,
    frames:       u64,
}

#[derive(Debug, Clone)]
struct TextPane {
    slot:    GridSlot,
    x_label: String,
    y_label: String,
    series:  Vec<PlottedSeries>,
}

#[derive(Debug, Clone)]
struct PlottedSeries {
    kind:    SeriesKind,
    indices: Range<u64>,
    values:  Vec<f64>,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W, display: &DisplayConfig) -> Self {
        Self {
            out,
            panes: Vec::new(),
            width: display.pane_width.max(1),
            height: display.pane_height.max(1),
            clear_screen: display.clear_screen,
            theme: Theme::from_config(display),
            frames: 0,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Number of refreshes written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Render the whole grid, one string per output line.
    pub fn render(&self) -> Vec<String> {
        let mut order: Vec<&TextPane> = self.panes.iter().collect();
        order.sort_by_key(|p| p.slot.index);

        let mut lines = Vec::new();
        let mut row_start = 0;
        while row_start < order.len() {
            let row = order[row_start].slot.row();
            let row_end = order[row_start..]
                .iter()
                .position(|p| p.slot.row() != row)
                .map_or(order.len(), |n| row_start + n);

            let blocks: Vec<Vec<String>> = order[row_start..row_end]
                .iter()
                .map(|pane| self.render_pane(pane))
                .collect();
            let block_height = blocks.iter().map(Vec::len).max().unwrap_or(0);
            for i in 0..block_height {
                let joined: Vec<&str> = blocks
                    .iter()
                    .map(|b| b.get(i).map_or("", String::as_str))
                    .collect();
                lines.push(joined.join(GUTTER).trim_end().to_string());
            }
            lines.push(String::new());

            row_start = row_end;
        }

        lines
    }

    fn render_pane(&self, pane: &TextPane) -> Vec<String> {
        let width = self.width;
        let mut block = Vec::with_capacity(self.height + 3);

        let title = match (pane.y_label.is_empty(), pane.x_label.is_empty()) {
            (false, false) => format!("{} / {}", pane.y_label, pane.x_label),
            (false, true) => pane.y_label.clone(),
            (true, false) => pane.x_label.clone(),
            (true, true) => format!("pane {}", pane.slot.index),
        };
        block.push(self.theme.paint(self.theme.label, &fit(&title, width + 2)));

        let Some(raw) = pane.series.iter().find(|s| s.kind == SeriesKind::Raw) else {
            block.push(fit("(no data)", width + 2));
            return block;
        };

        let summary = match raw.values.last() {
            Some(last) => format!(
                "[{}..{}] last {last:.4}",
                raw.indices.start,
                raw.indices.end.saturating_sub(1)
            ),
            None => "(empty)".to_string(),
        };
        block.push(fit(&summary, width + 2));

        let drawn: Vec<(SeriesKind, &[f64])> = pane
            .series
            .iter()
            .map(|s| (s.kind, s.values.as_slice()))
            .collect();
        for row in chart::rasterise(&drawn, width, self.height) {
            block.push(format!("|{}|", self.paint_row(&row)));
        }
        block.push(format!("+{}+", "-".repeat(width)));

        block
    }

    /// Render one chart row, colouring each run of identical cells once.
    fn paint_row(&self, row: &[Cell]) -> String {
        let mut out = String::new();
        let mut start = 0;
        while start < row.len() {
            let cell = row[start];
            let len = row[start..].iter().take_while(|c| **c == cell).count();
            let text: String = std::iter::repeat(cell.glyph()).take(len).collect();
            match cell {
                Cell::Empty => out.push_str(&text),
                Cell::Point(SeriesKind::Raw) => out.push_str(&self.theme.paint(self.theme.raw, &text)),
                Cell::Point(SeriesKind::Smoothed) => {
                    out.push_str(&self.theme.paint(self.theme.smoothed, &text));
                }
            }
            start += len;
        }
        out
    }

    fn pane_mut(&mut self, handle: PaneHandle) -> Result<&mut TextPane> {
        self.panes
            .get_mut(handle.0)
            .ok_or_else(|| PlotError::Surface(format!("unknown {handle}")))
    }
}

impl<W: Write> Surface for TextSurface<W> {
    fn add_pane(&mut self, slot: GridSlot) -> Result<PaneHandle> {
        let handle = PaneHandle(self.panes.len());
        self.panes.push(TextPane {
            slot,
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
        });
        Ok(handle)
    }

    fn reposition(&mut self, handle: PaneHandle, slot: GridSlot) -> Result<()> {
        self.pane_mut(handle)?.slot = slot;
        Ok(())
    }

    fn clear(&mut self, handle: PaneHandle) -> Result<()> {
        let pane = self.pane_mut(handle)?;
        pane.series.clear();
        pane.x_label.clear();
        pane.y_label.clear();
        Ok(())
    }

    fn set_labels(&mut self, handle: PaneHandle, x_label: &str, y_label: &str) -> Result<()> {
        let pane = self.pane_mut(handle)?;
        pane.x_label = x_label.to_string();
        pane.y_label = y_label.to_string();
        Ok(())
    }

    fn plot(&mut self, handle: PaneHandle, series: &Series<'_>) -> Result<()> {
        self.pane_mut(handle)?.series.push(PlottedSeries {
            kind:    series.kind,
            indices: series.indices.clone(),
            values:  series.values.to_vec(),
        });
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str(CLEAR_SCREEN);
        }
        let header = format!(
            "devplot  {}  {} pane(s)",
            Local::now().format("%H:%M:%S"),
            self.panes.len()
        );
        frame.push_str(&self.theme.paint(self.theme.label, &header));
        frame.push('\n');
        for line in self.render() {
            frame.push_str(&line);
            frame.push('\n');
        }

        self.out
            .write_all(frame.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| PlotError::Surface(format!("write: {e}")))?;
        self.frames += 1;
        Ok(())
    }
}

/// Truncate or right-pad `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> TextSurface<Vec<u8>> {
        let display = DisplayConfig {
            pane_width: 20,
            pane_height: 3,
            clear_screen: false,
            ..DisplayConfig::default()
        };
        TextSurface::new(Vec::new(), &display).with_theme(Theme::plain())
    }

    fn slot(rows: usize, columns: usize, index: usize) -> GridSlot {
        GridSlot { rows, columns, index }
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abcd");
    }

    #[test]
    fn empty_pane_renders_placeholder() {
        let mut s = surface();
        s.add_pane(slot(1, 1, 0)).unwrap();
        let lines = s.render();
        assert_eq!(lines[0].trim_end(), "pane 0");
        assert_eq!(lines[1].trim_end(), "(no data)");
    }

    #[test]
    fn plotted_pane_renders_chart() {
        let mut s = surface();
        let h = s.add_pane(slot(1, 1, 0)).unwrap();
        s.set_labels(h, "Step", "Loss").unwrap();
        s.plot(
            h,
            &Series { kind: SeriesKind::Raw, indices: 3..5, values: &[0.0, 10.0] },
        )
        .unwrap();

        let lines = s.render();
        assert_eq!(lines[0].trim_end(), "Loss / Step");
        assert_eq!(lines[1].trim_end(), "[3..4] last 10.0000");
        assert_eq!(lines[2], format!("| .{}|", " ".repeat(18)));
        assert_eq!(lines[3], format!("|{}|", " ".repeat(20)));
        assert_eq!(lines[4], format!("|.{}|", " ".repeat(19)));
        assert_eq!(lines[5], format!("+{}+", "-".repeat(20)));
    }

    #[test]
    fn panes_on_one_row_sit_side_by_side() {
        let mut s = surface();
        s.add_pane(slot(1, 2, 0)).unwrap();
        s.add_pane(slot(1, 2, 1)).unwrap();
        let lines = s.render();
        assert_eq!(lines[0], format!("{}{GUTTER}pane 1", fit("pane 0", 22)));
    }

    #[test]
    fn reposition_moves_panes_between_rows() {
        let mut s = surface();
        let a = s.add_pane(slot(1, 1, 0)).unwrap();
        let b = s.add_pane(slot(2, 1, 1)).unwrap();
        s.reposition(a, slot(2, 1, 0)).unwrap();
        s.reposition(b, slot(2, 1, 1)).unwrap();

        let lines = s.render();
        let titles: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|l| l.starts_with("pane"))
            .collect();
        assert_eq!(titles, ["pane 0", "pane 1"]);
    }

    #[test]
    fn refresh_writes_a_frame() {
        let mut s = surface();
        let h = s.add_pane(slot(1, 1, 0)).unwrap();
        s.set_labels(h, "", "Score").unwrap();
        s.refresh().unwrap();
        s.refresh().unwrap();

        assert_eq!(s.frames(), 2);
        let text = String::from_utf8(s.into_writer()).unwrap();
        assert!(text.starts_with("devplot  "));
        assert_eq!(text.matches("Score").count(), 2);
    }

    #[test]
    fn unknown_handle_is_a_surface_error() {
        let mut s = surface();
        assert!(matches!(s.clear(PaneHandle(0)), Err(PlotError::Surface(_))));
    }
}
