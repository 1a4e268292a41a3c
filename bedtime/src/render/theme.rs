use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Muted late-night palette.
pub struct Nightfall;

impl Nightfall {
    pub const TEXT: Color = Color::Rgb { r: 200, g: 204, b: 220 };
    pub const MOON: Color = Color::Rgb { r: 235, g: 203, b: 139 };
    pub const DUSK: Color = Color::Rgb { r: 129, g: 161, b: 193 };
    pub const DIM: Color = Color::Rgb { r: 110, g: 115, b: 141 };
    pub const DAWN: Color = Color::Rgb { r: 163, g: 190, b: 140 };

    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Self::TEXT);
        skin.bold.set_fg(Self::MOON);
        skin.italic.set_fg(Self::DUSK);
        skin.inline_code.set_fg(Self::DAWN);
        skin.inline_code.set_bg(Color::Reset);

        skin.headers[0].set_fg(Self::MOON);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[1].set_fg(Self::DUSK);

        skin.table.set_fg(Self::DIM);
        skin.bullet.set_fg(Self::DUSK);

        skin
    }
}
