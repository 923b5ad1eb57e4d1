//! Theme commands.

use panther_storefront::error::Result;

use super::Session;

/// Print the current mode and its applied style variables.
pub fn show(session: &Session) {
    println!("Theme: {}", session.theme.mode().as_str());
    if let Some(variables) = session.theme.variables() {
        println!("  --text-primary: {}", variables.text_primary);
        println!("  --primary-dark: {}", variables.surface);
    }
}

/// Flip between dark and light and persist the choice.
pub fn toggle(session: &mut Session) -> Result<()> {
    session.theme.toggle()?;
    show(session);
    Ok(())
}
