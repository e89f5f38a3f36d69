//! Rendering for the pricegrid TUI.
//!
//! Layout, top to bottom: header, product grid (or loading/error panel), detail
//! line, keybind footer. The filter panel and the toast are drawn on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, LoadState};
use crate::theme::theme;
use crate::util::{capitalize_words, truncate_to_width};

mod grid;
mod modals;
mod status;
mod toast;

/// Header caption above the grid.
pub const HEADER_TITLE: &str = "Products displaying in ascending order";

/// What: Draw one full frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (the grid keeps the selection scrolled into view)
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h: u16 = if app.show_keybinds_footer { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(footer_h),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    if let LoadState::Failed(msg) = &app.load {
        status::render_failed(f, msg, chunks[1]);
    } else if app.load.is_loading() {
        status::render_loading(f, app, chunks[1]);
    } else {
        grid::render_grid(f, app, chunks[1]);
    }
    render_detail_line(f, app, chunks[2]);
    if app.show_keybinds_footer {
        render_footer(f, app, chunks[3]);
    }

    if let crate::state::Modal::PriceFilter { cursor } = app.modal {
        modals::render_price_filter(f, app, area, cursor);
    }
    toast::render_toast(f, app, area);
}

/// What: Header with the caption, item count, and the active filter.
fn render_header(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = theme();
    let shown = app.display().len();
    let total = app.catalog().map_or(0, crate::state::Catalog::len);
    let line = Line::from(vec![
        Span::styled(
            HEADER_TITLE,
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Filter: {}", app.selection.label()),
            Style::default().fg(th.sapphire),
        ),
        Span::raw("   "),
        Span::styled(format!("{shown}/{total}"), Style::default().fg(th.overlay1)),
    ]);
    let header = Paragraph::new(line)
        .centered()
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(header, area);
}

/// What: One-line summary of the highlighted product (brand, category, description).
fn render_detail_line(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = theme();
    let list = app.display();
    let Some(p) = list.get(app.selected) else {
        return;
    };
    let mut parts: Vec<String> = Vec::new();
    if let Some(b) = p.brand.as_deref().filter(|b| !b.is_empty()) {
        parts.push(b.to_string());
    }
    if let Some(c) = p.category.as_deref().filter(|c| !c.is_empty()) {
        parts.push(capitalize_words(&c.replace('-', " ")));
    }
    if let Some(d) = p.description.as_deref().filter(|d| !d.is_empty()) {
        parts.push(d.to_string());
    }
    if parts.is_empty() {
        return;
    }
    let text = truncate_to_width(&parts.join(" · "), usize::from(area.width));
    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(th.subtext0))),
        area,
    );
}

/// What: Keybind hints; offers `r` only while the retry is available.
fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = theme();
    let mut hints = vec![("f", "filter"), ("←↑↓→", "move"), ("q", "quit")];
    if matches!(app.load, LoadState::Failed(_)) {
        hints.insert(0, ("r", "retry"));
    }
    let mut spans: Vec<Span> = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {label}  "), Style::default().fg(th.overlay1)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
