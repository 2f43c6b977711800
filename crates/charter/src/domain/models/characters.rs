/// Characters used to draw an axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Characters {
    pub xline: String,
    pub xtick: String,
    pub xtick_spacing: String,
}

impl Default for Characters {
    fn default() -> Characters {
        return Characters {
            xline: "━".to_string(),
            xtick: "┳".to_string(),
            xtick_spacing: " ".to_string(),
        };
    }
}

impl Characters {
    pub fn ascii() -> Characters {
        return Characters {
            xline: "-".to_string(),
            xtick: "|".to_string(),
            xtick_spacing: " ".to_string(),
        };
    }
}
