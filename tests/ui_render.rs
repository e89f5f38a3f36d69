//! Render full frames into a `TestBackend` and check what a user would see.

use pricegrid::logic::select_bucket;
use pricegrid::state::{AppState, Catalog, LoadState, Modal, PriceBucket, Product};
use pricegrid::ui::{HEADER_TITLE, ui};
use ratatui::{Terminal, backend::TestBackend};

fn product(id: u64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        rating: 4.56,
        thumbnail: format!("https://cdn.dummyjson.com/products/{id}/thumbnail.png"),
        brand: Some("Acme".to_string()),
        category: Some("home-decoration".to_string()),
        description: None,
    }
}

/// What: Draw one frame and return it as one string per row.
fn render(app: &mut AppState) -> Vec<String> {
    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).expect("terminal");
    term.draw(|f| ui(f, app)).expect("draw");
    let buf = term.backend().buffer().clone();
    let width = usize::from(buf.area.width);
    buf.content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect()
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|r| r.contains(needle))
}

fn ready_app() -> AppState {
    AppState {
        load: LoadState::Ready(Catalog::new(vec![
            product(1, "zeta lamp", 5.0),
            product(2, "alpha phone", 25.0),
            product(3, "beta chair", 75.0),
        ])),
        ..AppState::default()
    }
}

#[test]
/// What: Loading frame shows the header and a loading panel, no grid
///
/// - Input: Default (loading) state
/// - Output: Header caption and "Loading products" visible
fn renders_loading_state() {
    let mut app = AppState::default();
    let rows = render(&mut app);
    assert!(contains(&rows, HEADER_TITLE));
    assert!(contains(&rows, "Loading products"));
}

#[test]
/// What: Failure frame offers a retry
///
/// - Input: `Failed` load state
/// - Output: Error heading, message, and `[r] retry` in the footer
fn renders_failure_with_retry_hint() {
    let mut app = AppState {
        load: LoadState::Failed("catalog endpoint returned HTTP 503".into()),
        ..AppState::default()
    };
    let rows = render(&mut app);
    assert!(contains(&rows, "Could not load products"));
    assert!(contains(&rows, "HTTP 503"));
    assert!(contains(&rows, "[r]"));
}

#[test]
/// What: Ready frame lists cards in title order with price and caption
///
/// - Input: Three products, `All`
/// - Output: Capitalized titles, price, and the thumbnail host; alpha above zeta
fn renders_sorted_grid() {
    let mut app = ready_app();
    let rows = render(&mut app);
    assert!(contains(&rows, "Alpha Phone"));
    assert!(contains(&rows, "Zeta Lamp"));
    assert!(contains(&rows, "25"));
    assert!(contains(&rows, "cdn.dummyjson.com"));
    let alpha = rows.iter().position(|r| r.contains("Alpha Phone"));
    let zeta = rows.iter().position(|r| r.contains("Zeta Lamp"));
    assert!(alpha <= zeta);
    assert!(!contains(&rows, "[r]"));
}

#[test]
/// What: Open filter panel lists every bucket under its title
///
/// - Input: `Modal::PriceFilter`
/// - Output: Panel title and all five labels
fn renders_filter_panel() {
    let mut app = ready_app();
    app.modal = Modal::price_filter(app.selection);
    let rows = render(&mut app);
    assert!(contains(&rows, "Filter the price range"));
    for bucket in PriceBucket::ALL {
        assert!(contains(&rows, &bucket.label()), "missing {}", bucket.label());
    }
}

#[test]
/// What: Selecting a bucket shows the toast and hides filtered-out cards
///
/// - Input: Select 10-50
/// - Output: Toast text visible, only the 25-priced card remains
fn renders_toast_after_selection() {
    let mut app = ready_app();
    select_bucket(&mut app, PriceBucket::From10To50);
    let rows = render(&mut app);
    assert!(contains(&rows, "Price 10 to 50 has been selected!"));
    assert!(contains(&rows, "Alpha Phone"));
    assert!(!contains(&rows, "Beta Chair"));
}

#[test]
/// What: Empty bucket shows a hint instead of cards
///
/// - Input: Select 500-2000 with no product in range
/// - Output: "No products priced" hint
fn renders_empty_bucket_hint() {
    let mut app = ready_app();
    select_bucket(&mut app, PriceBucket::From500To2000);
    let rows = render(&mut app);
    assert!(contains(&rows, "No products priced"));
}
