//! Color palette shared by the renderers

use ratatui::style::{Color, Modifier};

/// Page background the glow is blended onto
pub const BACKGROUND: Color = Color::Rgb(2, 6, 23);

pub mod search {
    use super::*;

    pub const BORDER: Color = Color::Rgb(71, 85, 105);
    pub const BORDER_FOCUSED: Color = Color::Rgb(59, 130, 246);
    pub const TITLE: Color = Color::Rgb(148, 163, 184);
    pub const HINT: Color = Color::Rgb(100, 116, 139);
}

pub mod suggest {
    use super::*;

    pub const BORDER: Color = Color::Rgb(59, 130, 246);
    pub const BACKGROUND: Color = Color::Rgb(15, 23, 42);
    pub const ITEM_SELECTED_BG: Color = Color::Rgb(30, 58, 138);
    pub const ITEM_SELECTED_BAR: Color = Color::Rgb(96, 165, 250);
    pub const SYMBOL: Color = Color::White;
    pub const SYMBOL_MATCH: Color = Color::Rgb(250, 204, 21);
    pub const COMPANY: Color = Color::Rgb(148, 163, 184);
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
}

pub mod sentiment {
    use super::*;

    pub const BULLISH: Color = Color::Rgb(34, 197, 94);
    pub const BEARISH: Color = Color::Rgb(239, 68, 68);
    pub const NEUTRAL: Color = Color::Rgb(251, 191, 36);
}

pub mod recent {
    use super::*;

    pub const LABEL: Color = Color::Rgb(100, 116, 139);
    pub const CHIP_BG: Color = Color::Rgb(30, 41, 59);
    pub const CHIP_SYMBOL: Color = Color::White;
    pub const CHIP_AGE: Color = Color::Rgb(100, 116, 139);
}

pub mod analysis {
    use super::*;

    pub const BORDER: Color = Color::Rgb(51, 65, 85);
    pub const TITLE: Color = Color::White;
    pub const LABEL: Color = Color::Rgb(148, 163, 184);
    pub const VALUE: Color = Color::White;
    pub const ARTICLE_SOURCE: Color = Color::Rgb(100, 116, 139);
    pub const ERROR: Color = Color::Rgb(248, 113, 113);
    pub const SPINNER: Color = Color::Rgb(96, 165, 250);
}
