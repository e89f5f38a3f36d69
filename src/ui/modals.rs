use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::state::{AppState, PriceBucket};
use crate::theme::theme;

/// Title of the filter panel.
pub const FILTER_TITLE: &str = "Filter the price range";

/// What: Render the centered price filter panel.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (for the applied bucket)
/// - `area`: Full screen area used to center the panel
/// - `cursor`: Highlighted row
///
/// Details:
/// - The applied bucket carries a check mark; the highlighted row is inverted.
pub fn render_price_filter(f: &mut Frame, app: &AppState, area: Rect, cursor: usize) {
    let th = theme();
    let rows = u16::try_from(PriceBucket::ALL.len()).unwrap_or(u16::MAX);
    let w = area.width.saturating_sub(4).min(36);
    let h = rows.saturating_add(4).min(area.height);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };

    let mut lines: Vec<Line> = Vec::with_capacity(PriceBucket::ALL.len() + 2);
    for (i, bucket) in PriceBucket::ALL.into_iter().enumerate() {
        let mark = if bucket == app.selection { "✔ " } else { "  " };
        let style = if i == cursor {
            Style::default()
                .fg(th.crust)
                .bg(th.lavender)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{i} "), Style::default().fg(th.overlay1)),
            Span::styled(mark, Style::default().fg(th.green)),
            Span::styled(bucket.label(), style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter apply · Esc close",
        Style::default().fg(th.overlay1),
    )));

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(th.text).bg(th.mantle))
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {FILTER_TITLE} "),
                        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(th.mauve))
                    .style(Style::default().bg(th.mantle)),
            ),
        rect,
    );
}
