//! Terminal rendering module for rich markdown output
//!
//! Markdown from the core display layer is printed through termimad, or as
//! plain text when color is disabled.

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.strikeout.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    ///
    /// Headers keep their hash prefix so the section structure stays visible;
    /// tables are laid out by termimad as a whole.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }

        let mut table = Vec::new();
        for line in markdown.lines() {
            if line.starts_with('|') {
                table.push(line);
                continue;
            }
            if !table.is_empty() {
                self.skin.print_text(&table.join("\n"));
                table.clear();
            }
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        if !table.is_empty() {
            self.skin.print_text(&table.join("\n"));
        }
    }

    /// Print machine-readable output unchanged
    pub fn raw(&self, text: &str) {
        println!("{text}");
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
