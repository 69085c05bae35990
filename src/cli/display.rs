// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the sift CLI.
//!
//! One rounded box per command, true-color when the terminal is one.
//! Dark terminals get OneDark, light ones One Light; `SIFT_THEME` wins
//! over detection, `NO_COLOR` and piped output turn the whole thing off.
//!
//! # Theme detection order
//!
//! 1. `SIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

// =============================================================================
// THEME
// =============================================================================

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn detect() -> Theme {
        if let Ok(value) = std::env::var("SIFT_THEME") {
            match value.to_lowercase().as_str() {
                "light" | "l" => return Theme::Light,
                "dark" | "d" => return Theme::Dark,
                _ => {}
            }
        }

        // COLORFGBG looks like "15;0"; the last field is the background
        // color number. 0-6 are dark backgrounds, 8 is bright black.
        if let Ok(value) = std::env::var("COLORFGBG") {
            let bg = value.rsplit(';').next().and_then(|s| s.parse::<u8>().ok());
            match bg {
                Some(8) => {}
                Some(n) if n >= 7 => return Theme::Light,
                _ => {}
            }
        }

        // The AppleInterfaceStyle key only exists in dark mode; a failed
        // read on macOS means light mode.
        #[cfg(target_os = "macos")]
        {
            if let Ok(output) = std::process::Command::new("defaults")
                .args(["read", "-g", "AppleInterfaceStyle"])
                .output()
            {
                let dark = output.status.success()
                    && String::from_utf8_lossy(&output.stdout).contains("Dark");
                if !dark {
                    return Theme::Light;
                }
            }
        }

        Theme::Dark
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// The detected theme, cached for the life of the process.
pub fn theme() -> Theme {
    *THEME.get_or_init(Theme::detect)
}

// =============================================================================
// PALETTES
// =============================================================================

pub type Rgb = (u8, u8, u8);

/// One theme's worth of true-color values.
pub struct Palette {
    pub red: Rgb,
    pub green: Rgb,
    pub bright_green: Rgb,
    pub yellow: Rgb,
    pub blue: Rgb,
    pub magenta: Rgb,
    pub cyan: Rgb,
    pub bright_cyan: Rgb,
    pub gray: Rgb,
}

/// OneDark (<https://github.com/joshdick/onedark.vim>)
const DARK: Palette = Palette {
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

/// One Light (<https://github.com/sonph/onehalf>)
const LIGHT: Palette = Palette {
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

/// The palette for the detected theme.
pub fn palette() -> &'static Palette {
    match theme() {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

// =============================================================================
// STYLING
// =============================================================================

pub const RESET: &str = "\x1b[0m";
const BOLD_CODE: &str = "\x1b[1m";
const DIM_CODE: &str = "\x1b[2m";

/// True when stdout is a terminal and `NO_COLOR` is unset.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn fg(color: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", color.0, color.1, color.2)
}

fn wrap(code: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// Bold `text` on color terminals, plain otherwise.
pub fn bold(text: &str) -> String {
    wrap(BOLD_CODE, text)
}

/// Dimmed `text` on color terminals, plain otherwise.
pub fn dim(text: &str) -> String {
    wrap(DIM_CODE, text)
}

/// `text` in a palette color.
pub fn paint(color: Rgb, text: &str) -> String {
    wrap(&fg(color), text)
}

/// `text` in a palette color, bold.
pub fn paint_bold(color: Rgb, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", BOLD_CODE, fg(color), text, RESET)
    } else {
        text.to_string()
    }
}

/// Width of `s` as printed: ANSI escape sequences take no columns.
pub fn visible_len(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip to the final byte of the escape sequence.
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

// =============================================================================
// BOX DRAWING
// =============================================================================

// Interior columns between the two border characters.
const WIDTH: usize = 70;

fn edge(text: &str) -> String {
    paint(palette().gray, text)
}

fn labeled_row(left: char, label: &str, right: char, color: Rgb) {
    let fill = WIDTH.saturating_sub(label.chars().count() + 3);
    let lead = edge(&format!("{}─", left));
    let tail = edge(&format!("{}{}", "─".repeat(fill), right));
    println!("{} {} {}", lead, paint_bold(color, label), tail);
}

/// Open a box: `╭─ LABEL ────╮`
pub fn open(label: &str) {
    labeled_row('╭', label, '╮', palette().bright_cyan);
}

/// Start a new section inside the box: `├─ LABEL ────┤`
pub fn divider(label: &str) {
    labeled_row('├', label, '┤', palette().cyan);
}

/// Close the box: `╰────╯`
pub fn close() {
    println!("{}", edge(&format!("╰{}╯", "─".repeat(WIDTH))));
}

/// One content row, padded to the box width.
pub fn line(content: &str) {
    let pad = WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", edge("│"), content, " ".repeat(pad), edge("│"));
}

// =============================================================================
// FORMATTERS
// =============================================================================

/// Left-pad `s` to a visible width; styled strings pad correctly.
pub fn pad_left(s: &str, width: usize) -> String {
    match width.checked_sub(visible_len(s)) {
        Some(n) if n > 0 => format!("{}{}", " ".repeat(n), s),
        _ => s.to_string(),
    }
}

/// Right-pad `s` to a visible width; styled strings pad correctly.
pub fn pad_right(s: &str, width: usize) -> String {
    match width.checked_sub(visible_len(s)) {
        Some(n) if n > 0 => format!("{}{}", s, " ".repeat(n)),
        _ => s.to_string(),
    }
}

/// Byte count with binary units: "512 B", "2.0 KiB", "1.3 MiB".
pub fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let size = bytes as f64;
    if size >= KIB * KIB {
        format!("{:.1} MiB", size / KIB / KIB)
    } else if size >= KIB {
        format!("{:.1} KiB", size / KIB)
    } else {
        format!("{} B", bytes)
    }
}

/// Truncate to `max_len` characters, keeping the tail behind a `...` prefix.
///
/// Counts characters, not bytes: this also runs over article titles, which
/// are routinely non-ASCII.
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let total = path.chars().count();
    if total <= max_len {
        path.to_string()
    } else {
        let tail: String = path.chars().skip(total - max_len + 3).collect();
        format!("...{}", tail)
    }
}

/// Right-aligned score in a color band.
///
/// Bands follow the scoring weights: 15+ is a whole-word title hit, 10+ a
/// title substring, 5+ a tag or bonus-level match, below that excerpt-only.
pub fn score_value(score: u32) -> String {
    let p = palette();
    let color = if score >= 15 {
        p.bright_green
    } else if score >= 10 {
        p.green
    } else if score >= 5 {
        p.yellow
    } else {
        p.gray
    };
    paint(color, &format!("{:>5}", score))
}

/// Channel badge next to a result.
pub fn channel_label(channel: &str) -> String {
    paint(palette().magenta, channel)
}

/// Result url, link-styled.
pub fn url_label(url: &str) -> String {
    paint(palette().blue, url)
}

/// Elapsed milliseconds, colored by how embarrassing they are.
pub fn timing_ms(value: f64) -> String {
    let p = palette();
    let color = if value < 1.0 {
        p.green
    } else if value < 10.0 {
        p.yellow
    } else {
        p.red
    };
    paint(color, &format!("{:>8.3}", value))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_len_ignores_escape_sequences() {
        assert_eq!(visible_len("plain"), 5);
        assert_eq!(visible_len("\x1b[1m\x1b[38;2;1;2;3mbold\x1b[0m"), 4);
        assert_eq!(visible_len(""), 0);
    }

    #[test]
    fn pads_target_visible_width() {
        let styled = "\x1b[32mok\x1b[0m";
        assert_eq!(visible_len(&pad_left(styled, 6)), 6);
        assert_eq!(visible_len(&pad_right(styled, 6)), 6);
        // Already-wide strings pass through untouched.
        assert_eq!(pad_left("abcdef", 3), "abcdef");
    }

    #[test]
    fn palettes_disagree() {
        assert_ne!(DARK.red, LIGHT.red);
        assert_ne!(DARK.green, LIGHT.green);
        assert_ne!(DARK.gray, LIGHT.gray);
    }

    #[test]
    fn sizes_use_binary_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn truncation_keeps_the_tail() {
        assert_eq!(truncate_path("/short", 10), "/short");
        let cut = truncate_path("/very/long/path/to/an/index.json", 12);
        assert_eq!(cut.chars().count(), 12);
        assert!(cut.starts_with("..."));
        assert!(cut.ends_with(".json"));
    }
}
