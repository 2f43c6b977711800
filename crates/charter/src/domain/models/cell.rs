#[cfg(test)]
#[path = "cell_test.rs"]
mod tests;

use strum_macros::Display;
use strum_macros::EnumIter;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Semantic style of a piece of axis text, resolved to a concrete style by a
/// [`super::Theme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum StyleRole {
    #[strum(serialize = "xaxis")]
    XAxis,
    #[strum(serialize = "xtick_label")]
    XTickLabel,
    #[strum(serialize = "xtick_spacing")]
    XTickSpacing,
}

/// What happens when text is wider than its column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Crop,
    Ellipsis,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub content: String,
    pub role: Option<StyleRole>,
}

impl Fragment {
    pub fn new(content: &str, role: StyleRole) -> Fragment {
        return Fragment {
            content: content.to_string(),
            role: Some(role),
        };
    }

    /// Unstyled filler.
    pub fn padding(width: usize) -> Fragment {
        return Fragment {
            content: " ".repeat(width),
            role: None,
        };
    }

    pub fn width(&self) -> usize {
        return self.content.width();
    }
}

/// Styled text occupying one column of an axis row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisCell {
    pub fragments: Vec<Fragment>,
    pub overflow: Overflow,
    pub justify: Justify,
}

impl AxisCell {
    pub fn styled(content: &str, role: StyleRole, overflow: Overflow) -> AxisCell {
        return AxisCell::assemble(vec![Fragment::new(content, role)], overflow);
    }

    pub fn assemble(fragments: Vec<Fragment>, overflow: Overflow) -> AxisCell {
        return AxisCell {
            fragments,
            overflow,
            justify: Justify::default(),
        };
    }

    pub fn justify(mut self, justify: Justify) -> AxisCell {
        self.justify = justify;
        return self;
    }

    pub fn plain(&self) -> String {
        return self
            .fragments
            .iter()
            .map(|fragment| fragment.content.as_str())
            .collect();
    }

    pub fn width(&self) -> usize {
        return self.fragments.iter().map(Fragment::width).sum();
    }

    /// Fragments resized to exactly `width` display columns.
    pub fn fit(&self, width: usize) -> Vec<Fragment> {
        let content_width = self.width();
        if content_width > width {
            return match self.overflow {
                Overflow::Crop => crop(&self.fragments, width),
                Overflow::Ellipsis => ellipsize(&self.fragments, width),
            };
        }

        let excess = width - content_width;
        let (left, right) = match self.justify {
            Justify::Left => (0, excess),
            Justify::Center => (excess / 2, excess - excess / 2),
            Justify::Right => (excess, 0),
        };

        let mut fitted = Vec::with_capacity(self.fragments.len() + 2);
        if left > 0 {
            fitted.push(Fragment::padding(left));
        }
        fitted.extend(self.fragments.iter().cloned());
        if right > 0 {
            fitted.push(Fragment::padding(right));
        }

        return fitted;
    }
}

fn crop(fragments: &[Fragment], width: usize) -> Vec<Fragment> {
    let mut remaining = width;
    let mut cropped = vec![];

    for fragment in fragments {
        if remaining == 0 {
            break;
        }

        let mut content = String::new();
        for ch in fragment.content.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if ch_width > remaining {
                remaining = 0;
                break;
            }
            content.push(ch);
            remaining -= ch_width;
        }

        if !content.is_empty() {
            cropped.push(Fragment {
                content,
                role: fragment.role,
            });
        }
    }

    let cropped_width: usize = cropped.iter().map(Fragment::width).sum();
    if cropped_width < width {
        cropped.push(Fragment::padding(width - cropped_width));
    }

    return cropped;
}

fn ellipsize(fragments: &[Fragment], width: usize) -> Vec<Fragment> {
    if width == 0 {
        return vec![];
    }

    let mut cropped = crop(fragments, width - 1);
    let role = cropped
        .iter()
        .rev()
        .find_map(|fragment| fragment.role)
        .or_else(|| fragments.last().and_then(|fragment| fragment.role));
    cropped.push(Fragment {
        content: ELLIPSIS.to_string(),
        role,
    });

    return cropped;
}
