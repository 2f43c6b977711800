#[cfg(test)]
#[path = "printer_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use yansi::Paint;

pub fn line_to_ansi(line: &Line<'_>, color: bool) -> String {
    return line
        .spans
        .iter()
        .map(|span| {
            if !color {
                return span.content.to_string();
            }
            return paint(&span.content, line.style.patch(span.style));
        })
        .collect();
}

pub fn render_to_string(lines: &[Line<'_>], color: bool) -> String {
    return lines
        .iter()
        .map(|line| line_to_ansi(line, color))
        .collect::<Vec<String>>()
        .join("\n");
}

fn paint(content: &str, style: Style) -> String {
    if style == Style::default() {
        return content.to_string();
    }

    let mut painted = Paint::new(content);
    if let Some(fg) = style.fg.and_then(to_yansi) {
        painted = painted.fg(fg);
    }
    if let Some(bg) = style.bg.and_then(to_yansi) {
        painted = painted.bg(bg);
    }

    let modifiers = style.add_modifier.difference(style.sub_modifier);
    if modifiers.contains(Modifier::BOLD) {
        painted = painted.bold();
    }
    if modifiers.contains(Modifier::DIM) {
        painted = painted.dimmed();
    }
    if modifiers.contains(Modifier::ITALIC) {
        painted = painted.italic();
    }
    if modifiers.contains(Modifier::UNDERLINED) {
        painted = painted.underline();
    }
    if modifiers.intersects(Modifier::SLOW_BLINK | Modifier::RAPID_BLINK) {
        painted = painted.blink();
    }
    if modifiers.contains(Modifier::REVERSED) {
        painted = painted.invert();
    }
    if modifiers.contains(Modifier::HIDDEN) {
        painted = painted.hidden();
    }
    if modifiers.contains(Modifier::CROSSED_OUT) {
        painted = painted.strikethrough();
    }

    return painted.to_string();
}

fn to_yansi(color: Color) -> Option<yansi::Color> {
    let converted = match color {
        Color::Reset => return None,
        Color::Black => yansi::Color::Black,
        Color::Red => yansi::Color::Red,
        Color::Green => yansi::Color::Green,
        Color::Yellow => yansi::Color::Yellow,
        Color::Blue => yansi::Color::Blue,
        Color::Magenta => yansi::Color::Magenta,
        Color::Cyan => yansi::Color::Cyan,
        Color::Gray => yansi::Color::White,
        Color::DarkGray => yansi::Color::Fixed(8),
        Color::LightRed => yansi::Color::Fixed(9),
        Color::LightGreen => yansi::Color::Fixed(10),
        Color::LightYellow => yansi::Color::Fixed(11),
        Color::LightBlue => yansi::Color::Fixed(12),
        Color::LightMagenta => yansi::Color::Fixed(13),
        Color::LightCyan => yansi::Color::Fixed(14),
        Color::White => yansi::Color::Fixed(15),
        Color::Rgb(r, g, b) => yansi::Color::RGB(r, g, b),
        Color::Indexed(index) => yansi::Color::Fixed(index),
    };

    return Some(converted);
}
