//! Plain-text projection of the terminal widget.
//!
//! Rendering proper (layout, color, animation) belongs to the presentation
//! shell. This module only turns interpreter state into width-constrained
//! lines, so any shell — DOM, TUI, or test harness — can show the same
//! content.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::TerminalConfig;
use crate::interpreter::Interpreter;
use crate::session::VisualMode;

const MAX_SHOWN_SUGGESTIONS: usize = 3;

/// Cuts `text` at the last character that still fits in `width` columns.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Truncates and right-pads `text` to exactly `width` columns.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let visible = UnicodeWidthStr::width(truncated.as_str());
    let mut out = truncated;
    out.push_str(&" ".repeat(width.saturating_sub(visible)));
    out
}

/// Scrollback as display lines: `$ `-prefixed inputs with indented output,
/// or the welcome banner while the scrollback is empty.
#[must_use]
pub fn render_scrollback(interpreter: &Interpreter, width: usize) -> Vec<String> {
    let entries = interpreter.scrollback();
    if entries.is_empty() {
        return interpreter
            .config()
            .banner
            .iter()
            .map(|line| truncate_to_width(line, width))
            .collect();
    }

    let mut lines = Vec::new();
    for entry in entries {
        if !entry.input.is_empty() {
            lines.push(truncate_to_width(&format!("$ {}", entry.input), width));
        }
        for output in &entry.output {
            lines.push(truncate_to_width(&format!("  {output}"), width));
        }
    }
    lines
}

/// The one-line suggestion strip below the input, capped at three entries.
#[must_use]
pub fn render_suggestions(suggestions: &[String]) -> Option<String> {
    if suggestions.is_empty() {
        return None;
    }
    let shown: Vec<&str> = suggestions
        .iter()
        .take(MAX_SHOWN_SUGGESTIONS)
        .map(String::as_str)
        .collect();
    Some(format!("Suggestions: {}", shown.join(", ")))
}

/// Window title bar text.
#[must_use]
pub fn render_title(config: &TerminalConfig, mode: VisualMode) -> String {
    format!("{} [{}]", config.prompt, mode.name())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use local_store::MemoryKv;

    use super::{pad_to_width, render_scrollback, render_suggestions, render_title, truncate_to_width};
    use crate::config::TerminalConfig;
    use crate::interpreter::{Host, Interpreter};
    use crate::session::{SiteTheme, VisualMode};

    struct NullHost;

    impl Host for NullHost {
        fn navigate(&mut self, _section: &str) {}
        fn focus_comment_form(&mut self) {}
        fn apply_site_theme(&mut self, _theme: SiteTheme) {}
        fn play_matrix_effect(&mut self) {}
        fn current_section(&self) -> String {
            "/home".to_string()
        }
    }

    fn interpreter() -> Interpreter {
        Interpreter::new(TerminalConfig::default(), Rc::new(MemoryKv::new()))
    }

    #[test]
    fn truncate_counts_display_columns_not_bytes() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 3), "hel");
        // Fullwidth characters occupy two columns each.
        assert_eq!(truncate_to_width("ａｂｃ", 4), "ａｂ");
        assert_eq!(truncate_to_width("ａｂｃ", 5), "ａｂ");
    }

    #[test]
    fn pad_fills_to_exact_width() {
        assert_eq!(pad_to_width("ok", 5), "ok   ");
        assert_eq!(pad_to_width("too long", 4), "too ");
    }

    #[test]
    fn empty_scrollback_shows_the_banner() {
        let interpreter = interpreter();
        let lines = render_scrollback(&interpreter, 80);
        assert_eq!(lines, interpreter.config().banner);
    }

    #[test]
    fn entries_render_prompt_and_indented_output() {
        let mut interpreter = interpreter();
        let mut host = NullHost;
        interpreter.submit("/ls", &mut host);

        let lines = render_scrollback(&interpreter, 80);
        assert_eq!(lines[0], "$ /ls");
        assert_eq!(lines[1], "  Available sections:");
        assert!(lines[2].starts_with("  "));
    }

    #[test]
    fn empty_input_entries_render_no_prompt_line() {
        let mut interpreter = interpreter();
        let mut host = NullHost;
        interpreter.submit("   ", &mut host);

        assert_eq!(interpreter.scrollback().len(), 1);
        assert!(render_scrollback(&interpreter, 80).is_empty());
    }

    #[test]
    fn suggestions_strip_caps_at_three() {
        assert_eq!(render_suggestions(&[]), None);
        let many: Vec<String> = ["/a", "/b", "/c", "/d"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            render_suggestions(&many),
            Some("Suggestions: /a, /b, /c".to_string())
        );
    }

    #[test]
    fn title_includes_prompt_and_visual_mode() {
        let config = TerminalConfig::default();
        assert_eq!(
            render_title(&config, VisualMode::Cyber),
            "guest@portfolio:~$ [cyber]"
        );
    }
}
