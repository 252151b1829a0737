//! Headless session printing every item as plain text.

use super::DashboardSession;
use super::messages::{COLOR_INFO, COLOR_RESET};
use crate::cli_messages::{format_error, format_success, format_warn};
use crate::widgets::{BarChart, LineChart, PieChart, TableView, Widget};
use std::io::{self, Write};

/// Writes the dashboard to any writer, typically stdout.
///
/// Write failures do not interrupt rendering; the first one is kept and
/// returned by [`ConsoleSession::finish`].
pub struct ConsoleSession<W: Write> {
    out: W,
    io_error: Option<io::Error>,
}

impl<W: Write> ConsoleSession<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            io_error: None,
        }
    }

    /// Flushes the writer and reports the first write failure, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.io_error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, text: &str) {
        if self.io_error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", text) {
            self.io_error = Some(err);
        }
    }

    fn pie_lines(chart: &PieChart) -> Vec<String> {
        let width = label_width(chart.slices.iter().map(|(l, _)| l.as_str()));
        chart
            .slices
            .iter()
            .map(|(label, count)| {
                format!(
                    "  {:<width$}  {:>8}  {:>5.1}%",
                    label,
                    count,
                    chart.percent(*count),
                    width = width
                )
            })
            .collect()
    }

    fn line_lines(chart: &LineChart) -> Vec<String> {
        chart
            .points
            .iter()
            .map(|(ts, count)| format!("  {}  {:>8}", ts.format("%Y-%m-%d %H:%M:%S"), count))
            .collect()
    }

    fn bar_lines(chart: &BarChart) -> Vec<String> {
        let width = label_width(chart.bars.iter().map(|b| b.label.as_str()));
        chart
            .bars
            .iter()
            .map(|bar| format!("  {:<width$}  {}", bar.label, bar.text, width = width))
            .collect()
    }

    fn table_lines(table: &TableView) -> Vec<String> {
        let width = label_width(
            table
                .rows
                .iter()
                .map(|(l, _)| l.as_str())
                .chain(std::iter::once(table.header[0].as_str())),
        );
        let mut lines = vec![format!(
            "  {:<width$}  {}",
            table.header[0],
            table.header[1],
            width = width
        )];
        lines.extend(
            table
                .rows
                .iter()
                .map(|(label, count)| format!("  {:<width$}  {}", label, count, width = width)),
        );
        lines
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

impl<W: Write> DashboardSession for ConsoleSession<W> {
    fn heading(&mut self, text: &str) {
        self.emit(&format!("{}=== {} ==={}", COLOR_INFO, text, COLOR_RESET));
    }

    fn subheader(&mut self, text: &str) {
        self.emit(&format!("\n{}", text));
    }

    fn warning(&mut self, text: &str) {
        self.emit(&format_warn(text, ""));
    }

    fn error(&mut self, text: &str) {
        self.emit(&format_error(text, None));
    }

    fn success(&mut self, text: &str) {
        self.emit(&format!("\n{}", format_success(text, "")));
    }

    fn widget(&mut self, widget: Widget) {
        let lines = match &widget {
            Widget::Pie(chart) => Self::pie_lines(chart),
            Widget::Line(chart) => Self::line_lines(chart),
            Widget::Bar(chart) => Self::bar_lines(chart),
            Widget::Table(table) => Self::table_lines(table),
        };
        self.emit(&format!("[{}]", widget.title()));
        for line in lines {
            self.emit(&line);
        }
    }
}
