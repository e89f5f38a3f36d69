use crate::state::AppState;

/// What: Move the highlighted card by `delta` positions in reading order.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `delta`: Signed step; `±1` moves left/right, `±grid_columns` moves up/down
///
/// Output:
/// - Updates `app.selected` clamped to the display list and keeps it scrolled into view.
pub fn move_selection(app: &mut AppState, delta: isize) {
    let len = app.display().len();
    if len == 0 {
        return;
    }
    let last = len - 1;
    app.selected = if delta.is_negative() {
        app.selected.saturating_sub(delta.unsigned_abs())
    } else {
        app.selected.saturating_add(delta.unsigned_abs()).min(last)
    };
    app.clamp_selection();
}

/// What: Move the highlighted card one row up or down.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `rows`: Signed number of grid rows
pub fn move_rows(app: &mut AppState, rows: isize) {
    let cols = isize::try_from(app.grid_columns.max(1)).unwrap_or(1);
    move_selection(app, rows.saturating_mul(cols));
}

/// What: Keep the selected row inside a viewport of `visible_rows` rows.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `visible_rows`: Number of card rows that fit on screen
///
/// Details:
/// - Called by the renderer once it knows the viewport height.
pub fn ensure_visible(app: &mut AppState, visible_rows: usize) {
    let cols = usize::from(app.grid_columns.max(1));
    let row = app.selected / cols;
    let visible = visible_rows.max(1);
    if row < app.scroll_row {
        app.scroll_row = row;
    } else if row >= app.scroll_row + visible {
        app.scroll_row = row + 1 - visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Catalog, LoadState, Product};

    fn app_with(n: u64) -> AppState {
        let products = (0..n)
            .map(|i| Product {
                id: i,
                title: format!("p{i:02}"),
                price: 20.0,
                rating: 4.0,
                thumbnail: String::new(),
                brand: None,
                category: None,
                description: None,
            })
            .collect();
        AppState {
            load: LoadState::Ready(Catalog::new(products)),
            ..AppState::default()
        }
    }

    #[test]
    /// What: Horizontal moves clamp at both ends of the list
    ///
    /// - Input: 5 cards, move -1 from 0, then +10
    /// - Output: Stays at 0, then clamps to 4
    fn move_selection_clamps() {
        let mut app = app_with(5);
        move_selection(&mut app, -1);
        assert_eq!(app.selected, 0);
        move_selection(&mut app, 10);
        assert_eq!(app.selected, 4);
    }

    #[test]
    /// What: Row moves step by the column count
    ///
    /// - Input: 2 columns, 7 cards, move down twice then up once
    /// - Output: 0 -> 2 -> 4 -> 2
    fn move_rows_steps_by_columns() {
        let mut app = app_with(7);
        move_rows(&mut app, 1);
        assert_eq!(app.selected, 2);
        move_rows(&mut app, 1);
        assert_eq!(app.selected, 4);
        move_rows(&mut app, -1);
        assert_eq!(app.selected, 2);
    }

    #[test]
    /// What: Viewport follows the selection downwards and upwards
    ///
    /// - Input: 2 visible rows, selection on row 3, then row 0
    /// - Output: `scroll_row` 2, then 0
    fn ensure_visible_scrolls() {
        let mut app = app_with(10);
        app.selected = 7;
        ensure_visible(&mut app, 2);
        assert_eq!(app.scroll_row, 2);
        app.selected = 0;
        ensure_visible(&mut app, 2);
        assert_eq!(app.scroll_row, 0);
    }
}
