use super::theme::Nightfall;
use bedtime_core::{DayStatus, Suggestion};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Nightfall::skin(),
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// Plain value meant for scripts, e.g. a path. Never decorated.
    pub fn print_value(&self, value: &str) {
        println!("{value}");
    }

    pub fn print_status(&self, note: &str, status: DayStatus) {
        let mut annotation = status.annotation();
        let mut note = note.to_string();
        if self.opts.use_color {
            let color = match status {
                DayStatus::Today => Nightfall::DAWN,
                DayStatus::NotToday => Nightfall::DIM,
            };
            note = note.with(Color::Cyan).to_string();
            annotation = annotation.with(color).to_string();
        }
        println!("{note} {annotation}");
    }

    pub fn print_cutoff(&self, sexagesimal: &str, minutes: u32) {
        let mut value = sexagesimal.to_string();
        if self.opts.use_color {
            value = value.with(Nightfall::MOON).to_string();
        }
        println!("{value} ({minutes} minutes after midnight)");
    }

    pub fn print_suggestions(&self, suggestions: impl Iterator<Item = Suggestion>) {
        for s in suggestions {
            if self.opts.use_color && !s.annotation.is_empty() {
                println!("{} {}", s.content, s.annotation.with(Nightfall::DIM));
            } else {
                println!("{s}");
            }
        }
    }
}
