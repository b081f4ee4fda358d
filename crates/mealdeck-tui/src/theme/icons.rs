//! Icon set for the TUI.
//!
//! `IconSet` resolves icons at runtime based on `IconMode`:
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires a Nerd Font)

use mealdeck_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn app(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f5}", // nf-fa-cutlery
            IconMode::Unicode => "\u{2630}",   // ☰
        }
    }

    pub fn category(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f07b}", // nf-fa-folder
            IconMode::Unicode => "\u{25a0}",   // ■
        }
    }

    pub fn meal(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f2e7}", // nf-fa-utensils
            IconMode::Unicode => "\u{2022}",   // •
        }
    }

    pub fn image(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03e}", // nf-fa-image
            IconMode::Unicode => "\u{25a8}",   // ▨
        }
    }

    pub fn video(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f16a}", // nf-fa-youtube_play
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn separator(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }
}
