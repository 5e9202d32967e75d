//! Categorical color assignment
//!
//! Categories are mapped to a fixed 20-color palette (the classic d3
//! category20 ordering) in order of first use, cycling when more than 20
//! categories appear. Each palette entry is softened by blending 20% toward
//! white per RGB channel before use, so tiles read as pastels while staying
//! distinguishable.
//!
//! Assignment is a pure function of first-use order: feeding the same
//! category sequence to a fresh scale always yields the same mapping.

/// Base palette, before lightening.
pub const PALETTE: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728",
    "#ff9896", "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2",
    "#7f7f7f", "#c7c7c7", "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Fraction blended toward white.
const LIGHTEN: f64 = 0.2;

/// Parse `#rrggbb` into channels. Anything else is `None`.
pub fn rgb_components(hex: &str) -> Option<(u8, u8, u8)> {
    let stripped = hex.strip_prefix('#')?;
    if stripped.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
    let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
    let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Blend a `#rrggbb` color toward white by `t` (0 = unchanged, 1 = white).
/// Channels round to the nearest integer. Inputs that don't parse as
/// `#rrggbb` are returned unchanged.
pub fn lighten(hex: &str, t: f64) -> String {
    let Some((r, g, b)) = rgb_components(hex) else {
        return hex.to_string();
    };

    let blend = |c: u8| -> u8 { (f64::from(c) + (255.0 - f64::from(c)) * t).round() as u8 };
    format!("#{:02x}{:02x}{:02x}", blend(r), blend(g), blend(b))
}

/// Ordinal scale: first unseen category claims the next palette slot.
#[derive(Debug, Clone, Default)]
pub struct ColorScale {
    assigned: Vec<(String, String)>,
}

impl ColorScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for `category`, assigning the next (lightened) palette entry on
    /// first sight. Cycles past the palette length.
    pub fn color_for(&mut self, category: &str) -> String {
        if let Some((_, color)) = self.assigned.iter().find(|(c, _)| c == category) {
            return color.clone();
        }
        let idx = self.assigned.len() % PALETTE.len();
        let color = lighten(PALETTE[idx], LIGHTEN);
        self.assigned.push((category.to_string(), color.clone()));
        color
    }

    /// Categories seen so far, in assignment order, with their colors.
    pub fn mapping(&self) -> &[(String, String)] {
        &self.assigned
    }
}
