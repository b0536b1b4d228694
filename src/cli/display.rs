// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the tracuu CLI.
//!
//! OneDark for dark terminals, One Light for light ones. `TRACUU_THEME`
//! (`dark`/`light`) wins, then the background slot of `COLORFGBG`, then dark.
//! Colors are off under `NO_COLOR`, `--plain`, or when stdout is not a TTY.
//!
//! Result cards are boxed to [`BOX_WIDTH`]. Each field is highlighted once as a
//! whole and then wrapped by visible width, so markers never push the right
//! border out and line breaks never change what gets marked.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tracuu::{highlight_with, Marker, Record, ScoredRecord, Section};

/// Width between the `│` borders.
pub const BOX_WIDTH: usize = 80;

/// Room for text inside a row: one space of padding on each side.
const TEXT_WIDTH: usize = BOX_WIDTH - 2;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Plain-mode highlight, visible without colors.
const PLAIN_MARKER: Marker<'static> = Marker {
    open: "[",
    close: "]",
};

static FORCE_PLAIN: AtomicBool = AtomicBool::new(false);

/// Turn colors off regardless of TTY.
pub fn set_plain(plain: bool) {
    FORCE_PLAIN.store(plain, Ordering::Relaxed);
}

/// Whether to emit ANSI escapes at all.
pub fn use_colors() -> bool {
    !FORCE_PLAIN.load(Ordering::Relaxed)
        && std::env::var_os("NO_COLOR").is_none()
        && atty::is(atty::Stream::Stdout)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

type Rgb = (u8, u8, u8);

struct Palette {
    green: Rgb,
    yellow: Rgb,
    blue: Rgb,
    cyan: Rgb,
    gray: Rgb,
    bright_green: Rgb,
    highlight: Rgb,
}

const ONE_DARK: Palette = Palette {
    green: (152, 195, 121),
    yellow: (229, 192, 123),
    blue: (97, 175, 239),
    cyan: (86, 182, 194),
    gray: (92, 99, 112),
    bright_green: (166, 226, 46),
    highlight: (255, 215, 0),
};

const ONE_LIGHT: Palette = Palette {
    green: (80, 161, 79),
    yellow: (193, 132, 1),
    blue: (64, 120, 242),
    cyan: (1, 132, 188),
    gray: (160, 161, 167),
    bright_green: (68, 140, 39),
    highlight: (152, 104, 1),
};

fn palette() -> &'static Palette {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    let light = LIGHT.get_or_init(|| {
        prefers_light(
            std::env::var("TRACUU_THEME").ok(),
            std::env::var("COLORFGBG").ok(),
        )
    });
    if *light {
        &ONE_LIGHT
    } else {
        &ONE_DARK
    }
}

/// Theme decision from the two environment hints.
fn prefers_light(theme: Option<String>, colorfgbg: Option<String>) -> bool {
    match theme.as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("light" | "l") => return true,
        Some("dark" | "d") => return false,
        _ => {}
    }
    // "fg;bg": 7 and up is a light background, except 8 (dark gray)
    colorfgbg
        .as_deref()
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg >= 7 && bg != 8)
}

/// Named colors of the active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
    BrightGreen,
    Highlight,
}

impl Color {
    /// True-color foreground escape for this color.
    pub fn escape(self) -> String {
        let p = palette();
        let (r, g, b) = match self {
            Color::Green => p.green,
            Color::Yellow => p.yellow,
            Color::Blue => p.blue,
            Color::Cyan => p.cyan,
            Color::Gray => p.gray,
            Color::BrightGreen => p.bright_green,
            Color::Highlight => p.highlight,
        };
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// Wrap `text` in a color plus modifiers, or return it bare without colors.
pub fn paint(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.concat(), color.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Highlight `text` for the terminal: bold colored marks, or `[`/`]` in plain mode.
pub fn highlight_terminal(text: &str, query: &str) -> String {
    if use_colors() {
        let open = format!("{}{}", BOLD, Color::Highlight.escape());
        highlight_with(
            text,
            query,
            &Marker {
                open: &open,
                close: RESET,
            },
        )
    } else {
        highlight_with(text, query, &PLAIN_MARKER)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LAYOUT
// ═══════════════════════════════════════════════════════════════════════════

/// Chars a terminal shows for `s`, skipping ANSI SGR sequences.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

/// Greedy word wrap on whitespace, measured in visible chars.
///
/// Escapes and markers never contain whitespace, so they stay glued to the
/// word they mark. Words wider than `width` get a line of their own rather
/// than being split, so a decree code is never broken across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = visible_len(word);
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

fn border(piece: &str) -> String {
    paint(Color::Gray, &[], piece)
}

/// `│ content          │`
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// `┌─ LABEL ──────────┐`
pub fn box_top(label: &str) {
    let label_part = format!("─ {} ", paint(Color::Cyan, &[BOLD], label));
    let rule = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label_part)));
    println!("{}{}{}", border("┌"), label_part, border(&format!("{}┐", rule)));
}

/// `└──────────────────┘`
pub fn box_bottom() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Print already-marked text as labelled rows, continuation lines indented.
fn field_rows(label: &str, text: &str) {
    let indent = " ".repeat(visible_len(label));
    let width = TEXT_WIDTH.saturating_sub(visible_len(label));
    for (i, line) in wrap(text, width).iter().enumerate() {
        let lead = if i == 0 { label } else { indent.as_str() };
        row(&format!(" {}{}", lead, line));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// "Độ khớp: N%", green at full marks, yellow below the default threshold.
pub fn percent_badge(percent: u32) -> String {
    let color = match percent {
        100.. => Color::BrightGreen,
        70..=99 => Color::Green,
        _ => Color::Yellow,
    };
    paint(color, &[], &format!("Độ khớp: {}%", percent))
}

/// One search hit as a boxed card.
pub fn print_hit(rank: usize, hit: &ScoredRecord<'_>, query: &str) {
    box_top(&format!("#{} {} - Câu {}", rank, hit.section, hit.record.id));
    row(&format!(" {}", percent_badge(hit.match_percent())));
    field_rows("Hỏi: ", &highlight_terminal(&hit.record.question, query));
    field_rows("Đáp: ", &highlight_terminal(&hit.record.answer, query));
    box_bottom();
}

/// Ranked search results, or a hint when nothing matched.
pub fn print_results(query: &str, results: &[ScoredRecord<'_>]) {
    println!(
        "{}",
        paint(Color::Blue, &[BOLD], &format!("Kết quả tìm kiếm ({} kết quả)", results.len()))
    );

    if results.is_empty() {
        println!("Không tìm thấy kết quả có tỷ lệ khớp cao cho \"{}\"", query);
        println!(
            "{}",
            paint(
                Color::Gray,
                &[DIM],
                "Thử tìm với số (\"31\", \"2021\") hoặc mã văn bản (\"TT-BYT\", \"31/2021\")."
            )
        );
        return;
    }

    for (i, hit) in results.iter().enumerate() {
        print_hit(i + 1, hit, query);
    }
}

/// One record, unhighlighted.
pub fn print_record(record: &Record) {
    box_top(&format!("{} - Câu {}", record.section, record.id));
    field_rows("Hỏi: ", &record.question);
    field_rows("Đáp: ", &record.answer);
    box_bottom();
}

/// Section labels with record counts and a total.
pub fn print_sections(sections: &[Section]) {
    box_top("Sections");
    for section in sections {
        let label = paint(Color::Cyan, &[BOLD], &section.label);
        let pad = 10usize.saturating_sub(visible_len(&label));
        row(&format!(" {}{} {:>6} câu hỏi", label, " ".repeat(pad), section.len()));
    }
    let total: usize = sections.iter().map(Section::len).sum();
    row(&format!(" {:<10} {:>6} câu hỏi", "Tổng cộng", total));
    box_bottom();
}
