//! Text rendering of the current screen.

use storefront_core::screens::{Destination, Navigator};

use crate::app::App;

/// Render the whole screen, consuming the pending status message
pub fn render(app: &mut App) -> String {
    let mut out = String::new();
    let current = app.navigator.current();

    out.push_str(&format!("\n== {} ==\n", current.title()));
    match current {
        Destination::Home => out.push_str("Welcome to the store.\n"),
        Destination::Explore => out.push_str("Search is coming soon.\n"),
        Destination::Cart => out.push_str("Your cart is empty.\n"),
        Destination::User => {
            let view = app.account_view();
            out.push_str(&view.title);
            out.push('\n');
            out.push_str(view.description);
            out.push('\n');
            for (i, action) in view.actions.iter().enumerate() {
                out.push_str(&format!("  {}) {}\n", i + 1, action.label()));
            }
        }
    }

    if let Some(msg) = app.status_message.take() {
        out.push_str(&format!("\n> {}\n", msg));
    }

    out.push('\n');
    out.push_str(&nav_bar(&app.navigator));
    out
}

/// Bottom navigation bar, current destination starred
pub fn nav_bar(navigator: &Navigator) -> String {
    let items: Vec<String> = Destination::all()
        .iter()
        .map(|d| {
            let marker = if *d == navigator.current() { "*" } else { "" };
            format!("[{}] {}{}", d.key(), d.title(), marker)
        })
        .collect();
    format!("{}  [q] Quit", items.join("  "))
}
