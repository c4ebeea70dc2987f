//! # Shared Two-Pane Template
//!
//! Every calculator screen has the same layout: an inputs pane on the left and a
//! results pane on the right, with an optional notice beneath. The template
//! owns no domain logic. Screens fill each pane through a render callback and
//! front ends decide how to draw the panes.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::template::TwoPane;
//!
//! let layout = TwoPane::build(
//!     "BMI Calculator",
//!     |inputs| {
//!         inputs.row("Weight", "70 kg");
//!         inputs.row("Height", "175 cm");
//!     },
//!     |results| {
//!         results.highlight("BMI", "22.86");
//!     },
//! );
//! assert_eq!(layout.results.rows.len(), 1);
//! println!("{}", layout.render_text(72));
//! ```

use serde::{Deserialize, Serialize};

/// How a row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowStyle {
    #[default]
    Normal,
    /// Headline value (e.g. the monthly payment)
    Highlight,
    /// Section heading; `value` is empty
    Section,
}

/// A labelled value in a pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub style: RowStyle,
}

/// One side of the layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pane {
    pub heading: String,
    pub rows: Vec<Row>,
}

impl Pane {
    pub fn new(heading: impl Into<String>) -> Self {
        Pane {
            heading: heading.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(label, value, RowStyle::Normal)
    }

    pub fn highlight(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(label, value, RowStyle::Highlight)
    }

    pub fn section(&mut self, title: impl Into<String>) -> &mut Self {
        self.push(title, String::new(), RowStyle::Section)
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = Row>) -> &mut Self {
        self.rows.extend(rows);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn push(&mut self, label: impl Into<String>, value: impl Into<String>, style: RowStyle) -> &mut Self {
        self.rows.push(Row {
            label: label.into(),
            value: value.into(),
            style,
        });
        self
    }
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Transient message shown under the panes (validation errors, export status).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// The full screen layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoPane {
    pub title: String,
    pub inputs: Pane,
    pub results: Pane,
    pub notice: Option<Notice>,
}

impl TwoPane {
    /// Build a layout from two render callbacks.
    pub fn build(
        title: impl Into<String>,
        render_inputs: impl FnOnce(&mut Pane),
        render_results: impl FnOnce(&mut Pane),
    ) -> Self {
        let mut inputs = Pane::new("Inputs");
        let mut results = Pane::new("Results");
        render_inputs(&mut inputs);
        render_results(&mut results);
        TwoPane {
            title: title.into(),
            inputs,
            results,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }

    /// Side-by-side plain-text rendering, `width` characters wide.
    pub fn render_text(&self, width: usize) -> String {
        let width = width.max(40);
        let left_width = (width - 3) / 2;
        let right_width = width - 3 - left_width;

        let left = pane_lines(&self.inputs, left_width);
        let right = pane_lines(&self.results, right_width);

        let mut out = String::new();
        out.push_str(&fit(&self.title, width));
        out.push('\n');
        out.push_str(&"═".repeat(width));
        out.push('\n');

        for i in 0..left.len().max(right.len()) {
            let l = left.get(i).map(String::as_str).unwrap_or("");
            let r = right.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&pad(l, left_width));
            out.push_str(" │ ");
            out.push_str(r.trim_end());
            out.push('\n');
        }

        if let Some(notice) = &self.notice {
            out.push_str(&"─".repeat(width));
            out.push('\n');
            let tag = match notice.level {
                NoticeLevel::Info => "i",
                NoticeLevel::Success => "ok",
                NoticeLevel::Error => "!",
            };
            out.push_str(&fit(&format!("[{}] {}", tag, notice.message), width));
            out.push('\n');
        }
        out
    }
}

fn pane_lines(pane: &Pane, width: usize) -> Vec<String> {
    let mut lines = vec![fit(&pane.heading, width), "─".repeat(width)];
    if pane.rows.is_empty() {
        lines.push(fit("(nothing yet)", width));
        return lines;
    }

    let label_width = pane
        .rows
        .iter()
        .filter(|r| r.style != RowStyle::Section)
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(width / 2);

    for row in &pane.rows {
        let line = match row.style {
            RowStyle::Section => format!("» {}", row.label),
            RowStyle::Normal => format!("{}  {}", pad(&row.label, label_width), row.value),
            RowStyle::Highlight => format!("{}  {} ◀", pad(&row.label, label_width), row.value),
        };
        lines.push(fit(&line, width));
    }
    lines
}

/// Truncate to `width` characters, marking the cut with an ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

fn pad(text: &str, width: usize) -> String {
    let fitted = fit(text, width);
    let len = fitted.chars().count();
    format!("{}{}", fitted, " ".repeat(width - len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TwoPane {
        TwoPane::build(
            "Tip Calculator",
            |inputs| {
                inputs.row("Bill", "$80.00").row("Tip %", "15");
            },
            |results| {
                results.highlight("Total", "$92.00").section("Per person").row("Each", "$23.00");
            },
        )
    }

    #[test]
    fn test_callbacks_fill_panes() {
        let layout = sample();
        assert_eq!(layout.inputs.heading, "Inputs");
        assert_eq!(layout.inputs.rows.len(), 2);
        assert_eq!(layout.results.rows[0].style, RowStyle::Highlight);
        assert_eq!(layout.results.rows[1].style, RowStyle::Section);
        assert!(layout.notice.is_none());
    }

    #[test]
    fn test_render_text_places_panes_side_by_side() {
        let text = sample().render_text(60);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Tip Calculator");
        let bill_line = lines.iter().find(|l| l.contains("Bill")).unwrap();
        assert!(bill_line.contains("│"));
        assert!(bill_line.contains("Total"));
        for line in &lines {
            assert!(line.chars().count() <= 60, "too wide: {:?}", line);
        }
    }

    #[test]
    fn test_render_text_notice_and_empty_pane() {
        let layout = TwoPane::build("Empty", |_| {}, |_| {})
            .with_notice(Some(Notice::error("Denominator cannot be zero")));
        let text = layout.render_text(50);
        assert!(text.contains("(nothing yet)"));
        assert!(text.contains("[!] Denominator cannot be zero"));
    }

    #[test]
    fn test_fit_truncates() {
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abc", 4), "abc");
        assert_eq!(pad("ab", 4), "ab  ");
    }
}
