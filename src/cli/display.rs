// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the essentia CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Colors are off
//! when `NO_COLOR` is set or the stream is not a TTY, so piped output is plain.
//!
//! # Theme detection order
//!
//! 1. `ESSENTIA_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use essentia::FieldKind;
use std::sync::OnceLock;

/// Width between the two vertical borders of a box.
pub const BOX_WIDTH: usize = 80;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" | "d" => Some(Theme::Dark),
            "light" | "l" => Some(Theme::Light),
            _ => None,
        }
    }

    /// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"). Background 7 and
    /// 9 through 15 are light.
    fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
        Some(if bg == 7 || bg > 8 { Theme::Light } else { Theme::Dark })
    }

    fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &ONE_DARK,
            Theme::Light => &ONE_LIGHT,
        }
    }
}

pub fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(|| {
        std::env::var("ESSENTIA_THEME")
            .ok()
            .and_then(|v| Theme::from_name(&v))
            .or_else(|| std::env::var("COLORFGBG").ok().and_then(|v| Theme::from_colorfgbg(&v)))
            .unwrap_or(Theme::Dark)
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS (true color)
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    BrightGreen,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightCyan,
    Gray,
}

type Rgb = (u8, u8, u8);

struct Palette {
    red: Rgb,
    green: Rgb,
    bright_green: Rgb,
    yellow: Rgb,
    blue: Rgb,
    magenta: Rgb,
    cyan: Rgb,
    bright_cyan: Rgb,
    gray: Rgb,
}

const ONE_DARK: Palette = Palette {
    red: (224, 108, 117),
    green: (152, 195, 121),
    bright_green: (166, 226, 46),
    yellow: (229, 192, 123),
    blue: (97, 175, 239),
    magenta: (198, 120, 221),
    cyan: (86, 182, 194),
    bright_cyan: (102, 217, 239),
    gray: (92, 99, 112),
};

const ONE_LIGHT: Palette = Palette {
    red: (228, 86, 73),
    green: (80, 161, 79),
    bright_green: (68, 140, 39),
    yellow: (193, 132, 1),
    blue: (64, 120, 242),
    magenta: (166, 38, 164),
    cyan: (1, 132, 188),
    bright_cyan: (1, 112, 158),
    gray: (160, 161, 167),
};

impl Palette {
    fn rgb(&self, color: Color) -> Rgb {
        match color {
            Color::Red => self.red,
            Color::Green => self.green,
            Color::BrightGreen => self.bright_green,
            Color::Yellow => self.yellow,
            Color::Blue => self.blue,
            Color::Magenta => self.magenta,
            Color::Cyan => self.cyan,
            Color::BrightCyan => self.bright_cyan,
            Color::Gray => self.gray,
        }
    }
}

/// Foreground escape for `color` in the current theme.
pub fn fg(color: Color) -> String {
    let (r, g, b) = theme().palette().rgb(color);
    format!("\x1b[38;2;{r};{g};{b}m")
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

fn colors_allowed() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    colors_allowed() && atty::is(atty::Stream::Stdout)
}

/// Same check for stderr, where errors and hints go.
pub fn use_colors_stderr() -> bool {
    colors_allowed() && atty::is(atty::Stream::Stderr)
}

/// `text` in `color` with extra SGR `modifiers`, or plain without a TTY.
pub fn themed(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{text}{RESET}", modifiers.concat(), fg(color))
    } else {
        text.to_string()
    }
}

/// Same as [`themed`], decided against stderr.
pub fn themed_stderr(color: Color, text: &str) -> String {
    if use_colors_stderr() {
        format!("{}{text}{RESET}", fg(color))
    } else {
        text.to_string()
    }
}

/// Character count, skipping SGR escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| {
            if c == '\x1b' {
                in_escape = true;
            } else if in_escape {
                in_escape = c != 'm';
            } else {
                return true;
            }
            false
        })
        .count()
}

/// Cut plain text to `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Left-pad a styled string to a visible width.
pub fn pad_left(s: &str, width: usize) -> String {
    format!("{}{s}", " ".repeat(width.saturating_sub(visible_len(s))))
}

/// Right-pad a styled string to a visible width.
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{s}{}", " ".repeat(width.saturating_sub(visible_len(s))))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Border escape and its reset, both empty when colors are off.
fn border(color: Color) -> (String, &'static str) {
    if use_colors() {
        (fg(color), RESET)
    } else {
        (String::new(), "")
    }
}

/// A horizontal rule between corner glyphs, optionally labeled.
fn rule(left: char, right: char, label: Option<&str>) {
    let (b, reset) = border(Color::Gray);
    let label = label
        .map(|l| format!("─ {} ", themed(Color::Cyan, &[BOLD], l)))
        .unwrap_or_default();
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label)));
    println!("{b}{left}{reset}{label}{b}{fill}{right}{reset}");
}

/// │ content          │
pub fn row(content: &str) {
    let (b, reset) = border(Color::Gray);
    println!("{b}│{reset}{}{b}│{reset}", pad_right(content, BOX_WIDTH));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    rule('┌', '┐', Some(label));
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    rule('├', '┤', Some(label));
}

/// └──────────────────┘
pub fn section_bot() {
    rule('└', '┘', None);
}

/// Centered title in a double-line box.
pub fn title(text: &str) {
    let (b, reset) = border(Color::Blue);
    let text = themed(Color::BrightCyan, &[BOLD], text);
    let gap = BOX_WIDTH.saturating_sub(visible_len(&text));
    let bar = "═".repeat(BOX_WIDTH);
    println!("{b}╔{bar}╗{reset}");
    println!(
        "{b}║{reset}{}{text}{}{b}║{reset}",
        " ".repeat(gap / 2),
        " ".repeat(gap - gap / 2)
    );
    println!("{b}╚{bar}╝{reset}");
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Relevance, greener the closer to a perfect name match.
pub fn score_value(score: f64) -> String {
    let color = match score {
        s if s >= 0.9 => Color::BrightGreen,
        s if s >= 0.6 => Color::Green,
        s if s >= 0.3 => Color::Yellow,
        _ => Color::Gray,
    };
    themed(color, &[], &format!("{score:>5.2}"))
}

/// The field that carried a match, colored by weight.
pub fn field_label(field: FieldKind) -> String {
    let color = match field {
        FieldKind::Name => Color::BrightGreen,
        FieldKind::EnglishName => Color::Green,
        FieldKind::Tags => Color::Cyan,
        FieldKind::MainBenefits => Color::Blue,
        FieldKind::Collections => Color::Magenta,
        FieldKind::Description => Color::Gray,
    };
    themed(color, &[], field.label())
}
