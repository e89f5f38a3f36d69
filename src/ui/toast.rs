use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;
use crate::theme::theme;

/// What: Draw the transient toast in the bottom-right corner.
///
/// Details:
/// - Nothing is drawn when no toast is active or the screen is too small to hold it.
pub fn render_toast(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(msg) = app.toast_message.as_deref() else {
        return;
    };
    let th = theme();
    let text_w = u16::try_from(UnicodeWidthStr::width(msg)).unwrap_or(u16::MAX);
    let w = text_w.saturating_add(4).min(area.width);
    let h: u16 = 3;
    if w < 5 || area.height < h + 1 {
        return;
    }
    let rect = Rect {
        x: area.x + area.width - w,
        y: area.y + area.height - h - 1,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(msg.to_string())
            .style(Style::default().fg(th.text).bg(th.mantle))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(th.green)),
            ),
        rect,
    );
}
