use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::logic::ensure_visible;
use crate::state::{AppState, Product};
use crate::theme::theme;
use crate::util::{capitalize_words, format_price, format_rating, truncate_to_width, url_host};

/// Card height in rows, borders included.
pub const CARD_HEIGHT: u16 = 6;

/// What: Render the product grid, `grid_columns` cards per row.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (scroll position follows the selection)
/// - `area`: Grid area
///
/// Details:
/// - Rows that do not fit are scrolled; the highlighted card always stays visible.
/// - An empty display list shows a short hint instead of cards.
pub fn render_grid(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let cols = usize::from(app.grid_columns.max(1));
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    ensure_visible(app, visible_rows);

    let list = app.display();
    if list.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No products priced {}", app.selection.label()),
                Style::default().fg(th.subtext0),
            )),
            Line::from(Span::styled(
                "Press f to choose another range",
                Style::default().fg(th.overlay1),
            )),
        ])
        .centered();
        f.render_widget(hint, area);
        return;
    }

    let row_constraints: Vec<Constraint> = (0..visible_rows)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);
    let col_constraints: Vec<Constraint> = (0..cols)
        .map(|_| Constraint::Ratio(1, u32::from(app.grid_columns.max(1))))
        .collect();

    for (r, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints.clone())
            .split(*row_area);
        for (c, cell) in cells.iter().enumerate() {
            let idx = (app.scroll_row + r) * cols + c;
            let Some(product) = list.get(idx) else {
                return;
            };
            render_card(f, app, product, idx == app.selected, *cell);
        }
    }
}

/// What: Render one product card.
///
/// Details:
/// - Shows the capitalized title, star rating, price, and the thumbnail host as a caption.
fn render_card(f: &mut Frame, app: &AppState, p: &Product, focused: bool, area: Rect) {
    let th = theme();
    let inner_w = usize::from(area.width.saturating_sub(2));
    let title = truncate_to_width(&capitalize_words(&p.title), inner_w);
    let caption = url_host(&p.thumbnail).unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_rating(p.rating),
            Style::default().fg(th.yellow),
        )),
        Line::from(Span::styled(
            format_price(p.price, &app.currency_symbol),
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(caption, inner_w),
            Style::default().fg(th.overlay1),
        )),
    ];
    let border = if focused { th.mauve } else { th.surface2 };
    let card = Paragraph::new(lines)
        .style(Style::default().bg(th.mantle))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(card, area);
}
