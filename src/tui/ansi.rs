//! Decode ANSI SGR-styled text into ratatui lines.
//!
//! Only Select Graphic Rendition sequences (`ESC [ ... m`) carry meaning here;
//! any other escape sequence is dropped.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;
use std::sync::OnceLock;

fn escape_pattern() -> &'static Regex {
    static ESCAPE: OnceLock<Regex> = OnceLock::new();
    ESCAPE.get_or_init(|| {
        Regex::new(r"\x1b\[([0-9;:?]*)([ -/]*[@-~])|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)").unwrap()
    })
}

/// Convert one line of styled text into a [`Line`].
///
/// `base` is the style in effect before the first escape and after a reset.
pub fn to_line(text: &str, base: Style) -> Line<'static> {
    let mut spans = Vec::new();
    let mut style = base;
    let mut last = 0;

    for caps in escape_pattern().captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::styled(text[last..whole.start()].to_string(), style));
        }
        last = whole.end();

        let is_sgr = caps.get(2).is_some_and(|m| m.as_str() == "m");
        if is_sgr {
            let params = caps.get(1).map_or("", |m| m.as_str());
            style = apply_sgr(style, base, params);
        }
    }
    if last < text.len() {
        spans.push(Span::styled(text[last..].to_string(), style));
    }

    Line::from(spans)
}

/// Convert a block of styled text, one [`Line`] per `\n`-separated line.
pub fn to_lines<'a>(lines: impl IntoIterator<Item = &'a str>, base: Style) -> Vec<Line<'static>> {
    lines.into_iter().map(|line| to_line(line, base)).collect()
}

fn apply_sgr(mut style: Style, base: Style, params: &str) -> Style {
    let codes: Vec<u16> = if params.is_empty() {
        vec![0]
    } else {
        params
            .split([';', ':'])
            .map(|p| p.parse().unwrap_or(0))
            .collect()
    };

    let mut i = 0;
    while i < codes.len() {
        match codes[i] {
            0 => style = base,
            1 => style = style.add_modifier(Modifier::BOLD),
            2 => style = style.add_modifier(Modifier::DIM),
            3 => style = style.add_modifier(Modifier::ITALIC),
            4 => style = style.add_modifier(Modifier::UNDERLINED),
            5 | 6 => style = style.add_modifier(Modifier::SLOW_BLINK),
            7 => style = style.add_modifier(Modifier::REVERSED),
            8 => style = style.add_modifier(Modifier::HIDDEN),
            9 => style = style.add_modifier(Modifier::CROSSED_OUT),
            21 | 22 => style = style.remove_modifier(Modifier::BOLD | Modifier::DIM),
            23 => style = style.remove_modifier(Modifier::ITALIC),
            24 => style = style.remove_modifier(Modifier::UNDERLINED),
            25 => style = style.remove_modifier(Modifier::SLOW_BLINK),
            27 => style = style.remove_modifier(Modifier::REVERSED),
            28 => style = style.remove_modifier(Modifier::HIDDEN),
            29 => style = style.remove_modifier(Modifier::CROSSED_OUT),
            code @ 30..=37 => style = style.fg(named_color(code - 30)),
            38 => {
                let (color, used) = extended_color(&codes[i + 1..]);
                if let Some(color) = color {
                    style = style.fg(color);
                }
                i += used;
            }
            39 => style.fg = base.fg,
            code @ 40..=47 => style = style.bg(named_color(code - 40)),
            48 => {
                let (color, used) = extended_color(&codes[i + 1..]);
                if let Some(color) = color {
                    style = style.bg(color);
                }
                i += used;
            }
            49 => style.bg = base.bg,
            code @ 90..=97 => style = style.fg(named_color(code - 90 + 8)),
            code @ 100..=107 => style = style.bg(named_color(code - 100 + 8)),
            _ => {}
        }
        i += 1;
    }
    style
}

/// Parse the arguments of a 38/48 code. Returns the colour and how many
/// parameters it consumed.
fn extended_color(args: &[u16]) -> (Option<Color>, usize) {
    match args {
        [5, index, ..] => (Some(Color::Indexed(*index as u8)), 2),
        [2, r, g, b, ..] => (Some(Color::Rgb(*r as u8, *g as u8, *b as u8)), 4),
        [5] => (None, 1),
        [2, ..] => (None, args.len()),
        _ => (None, 0),
    }
}

fn named_color(index: u16) -> Color {
    match index {
        0 => Color::Black,
        1 => Color::Red,
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Blue,
        5 => Color::Magenta,
        6 => Color::Cyan,
        7 => Color::Gray,
        8 => Color::DarkGray,
        9 => Color::LightRed,
        10 => Color::LightGreen,
        11 => Color::LightYellow,
        12 => Color::LightBlue,
        13 => Color::LightMagenta,
        14 => Color::LightCyan,
        _ => Color::White,
    }
}
