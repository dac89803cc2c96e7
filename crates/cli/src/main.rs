use anyhow::Result;
use clap::Parser;

use autosuggest_tui::RunOptions;

/// Terminal demo hosting the autosuggest widgets.
#[derive(Debug, Parser)]
#[command(name = "autosuggest", version, about)]
struct Cli {
    /// Theme name (midnight, ansi256). Overridden by AUTOSUGGEST_THEME.
    #[arg(long)]
    theme: Option<String>,

    /// Option strings offered by both widgets.
    #[arg(long = "item", value_name = "TEXT")]
    items: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let items = if cli.items.is_empty() {
        default_items()
    } else {
        cli.items
    };
    tracing::info!(count = items.len(), theme = ?cli.theme, "launching autosuggest demo");

    autosuggest_tui::run(RunOptions {
        items,
        theme: cli.theme,
    })
}

/// Demo option list used when no --item flags are given.
fn default_items() -> Vec<String> {
    (1..=3).map(|i| format!("This is the option {i}")).collect()
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    // Log to stderr; stdout belongs to the terminal UI.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_items_match_demo_copy() {
        let items = default_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], "This is the option 1");
        assert_eq!(items[2], "This is the option 3");
    }

    #[test]
    fn cli_parses_theme_and_items() {
        let cli = Cli::parse_from(["autosuggest", "--theme", "midnight", "--item", "A", "--item", "B"]);
        assert_eq!(cli.theme.as_deref(), Some("midnight"));
        assert_eq!(cli.items, ["A", "B"]);
    }
}
