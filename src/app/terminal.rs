use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Switch the terminal into raw mode on the alternate screen.
///
/// # Errors
/// - Returns `Err` when raw mode cannot be enabled or the screen cannot be switched
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// What: Undo [`setup_terminal`].
///
/// # Errors
/// - Returns `Err` when raw mode cannot be disabled or the screen cannot be restored
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
