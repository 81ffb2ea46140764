//! Console styling for breachwatch using anstyle.
//!
//! Colors are enabled only when stdout is a terminal and `NO_COLOR` is unset,
//! and can be forced off with `--no-color`.

use anstyle::{AnsiColor, Color, Style};

/// Style definitions for the console surface
pub struct Styles {
    pub banner: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub muted: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            banner: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
            success: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
            warning: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
            error: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
            muted: Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))),
        }
    }
}

/// Console formatter that paints text when the environment allows it.
pub struct ConsoleStyle {
    styles: Styles,
    use_colors: bool,
}

impl ConsoleStyle {
    /// Create a formatter, enabling colors based on the environment.
    pub fn new() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: should_use_colors(),
        }
    }

    /// Create a formatter without colors (for non-interactive use).
    pub fn without_colors() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: false,
        }
    }

    pub fn banner(&self, text: &str) -> String {
        self.paint(&self.styles.banner, text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(&self.styles.success, text)
    }

    #[allow(dead_code)]
    pub fn warning(&self, text: &str) -> String {
        self.paint(&self.styles.warning, text)
    }

    #[allow(dead_code)]
    pub fn error(&self, text: &str) -> String {
        self.paint(&self.styles.error, text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(&self.styles.muted, text)
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", style.render(), text, style.render_reset())
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Determine if colors should be used based on environment
fn should_use_colors() -> bool {
    atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_colors_passes_text_through() {
        let style = ConsoleStyle::without_colors();
        assert_eq!(style.success("done"), "done");
        assert_eq!(style.error("boom"), "boom");
    }

    #[test]
    fn painting_wraps_text_in_escape_codes() {
        let style = ConsoleStyle {
            styles: Styles::default(),
            use_colors: true,
        };
        let painted = style.success("done");
        assert!(painted.contains("done"));
        assert!(painted.starts_with('\u{1b}'));
        assert!(painted.len() > "done".len());
    }
}
