//! Inline style strings to terminal styles.
//!
//! Console entries keep the raw `%c` style string of each segment. At render
//! time the string is parsed into declarations and the few properties a
//! terminal can show are applied: `color`, `background`/`backgroundColor`,
//! `fontWeight`, `fontStyle` and `textDecoration`. Everything else is
//! ignored.

use ratatui::style::{Color, Modifier, Style};
use wpv_core::{parse_style, StyleDeclarations};

/// Parse `style` and layer it over `base`
pub fn style_for(style: &str, base: Style) -> Style {
    base.patch(to_style(&parse_style(style)))
}

/// Terminal style for parsed declarations
pub fn to_style(declarations: &StyleDeclarations) -> Style {
    let mut style = Style::default();

    if let Some(color) = declarations.get("color").and_then(parse_color) {
        style = style.fg(color);
    }

    let background = declarations
        .get("backgroundColor")
        .or_else(|| declarations.get("background"));
    if let Some(color) = background.and_then(parse_color) {
        style = style.bg(color);
    }

    if declarations.get("fontWeight").is_some_and(is_bold_weight) {
        style = style.add_modifier(Modifier::BOLD);
    }

    if matches!(declarations.get("fontStyle"), Some("italic" | "oblique")) {
        style = style.add_modifier(Modifier::ITALIC);
    }

    let decoration = declarations
        .get("textDecoration")
        .or_else(|| declarations.get("textDecorationLine"));
    if let Some(decoration) = decoration {
        if decoration.contains("underline") {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if decoration.contains("line-through") {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
    }

    style
}

fn is_bold_weight(weight: &str) -> bool {
    match weight {
        "bold" | "bolder" => true,
        other => other.parse::<u16>().is_ok_and(|w| w >= 600),
    }
}

/// Parse a CSS color: a named color, `#rgb`, `#rrggbb`, or `rgb()`/`rgba()`.
///
/// Keywords that defer to the surrounding style (`inherit`, `initial`,
/// `currentColor`, `transparent`) return `None`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
    {
        return parse_rgb_function(args.strip_suffix(')')?);
    }

    let color = match value.as_str() {
        "black" => Color::Black,
        "white" => Color::White,
        "red" => Color::Red,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "yellow" => Color::Yellow,
        "cyan" | "aqua" => Color::Cyan,
        "magenta" | "fuchsia" => Color::Magenta,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightgray" | "lightgrey" | "silver" => Color::Rgb(192, 192, 192),
        "orange" => Color::Rgb(255, 165, 0),
        "purple" => Color::Rgb(128, 0, 128),
        "pink" => Color::Rgb(255, 192, 203),
        "lime" => Color::Rgb(0, 255, 0),
        "navy" => Color::Rgb(0, 0, 128),
        "teal" => Color::Rgb(0, 128, 128),
        "maroon" => Color::Rgb(128, 0, 0),
        "olive" => Color::Rgb(128, 128, 0),
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Color::Rgb(digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some(Color::Rgb(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

fn parse_rgb_function(args: &str) -> Option<Color> {
    let mut channels = args
        .split(',')
        .take(3)
        .map(|part| part.trim().parse::<f32>().ok().map(|v| v.clamp(0.0, 255.0) as u8));
    Some(Color::Rgb(
        channels.next()??,
        channels.next()??,
        channels.next()??,
    ))
}
