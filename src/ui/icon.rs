use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Generate,
    Diff,
    New,
    Modified,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Generate) => theme::icons::GENERATE,
            (true, Icon::Diff) => theme::icons::DIFF,
            (true, Icon::New) => theme::icons::NEW,
            (true, Icon::Modified) => theme::icons::MODIFIED,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Generate) => theme::icons_ascii::GENERATE,
            (false, Icon::Diff) => theme::icons_ascii::DIFF,
            (false, Icon::New) => theme::icons_ascii::NEW,
            (false, Icon::Modified) => theme::icons_ascii::MODIFIED,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::New => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Modified => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Generate | Icon::Diff => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
