use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::theme;

/// Braille spinner frames advanced by the tick worker.
const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// What: Loading indicator shown while the catalog fetch is outstanding.
pub fn render_loading(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let frame = SPINNER[app.spinner_frame % SPINNER.len()];
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(frame, Style::default().fg(th.sapphire)),
            Span::styled(" Loading products…", Style::default().fg(th.text)),
        ]),
        Line::from(Span::styled(
            app.endpoint.clone(),
            Style::default().fg(th.overlay1),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).centered().block(panel_block(th.surface1)),
        area,
    );
}

/// What: Error panel for a failed fetch, with the retry hint.
///
/// Inputs:
/// - `message`: Failure text from the loader
pub fn render_failed(f: &mut Frame, message: &str, area: Rect) {
    let th = theme();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Could not load products",
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(th.subtext0))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(th.overlay1)),
            Span::styled(
                "r",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to retry", Style::default().fg(th.overlay1)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .block(panel_block(th.red)),
        area,
    );
}

/// Rounded panel border in the given color.
fn panel_block(border: ratatui::style::Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}
