//! The [`TidepoolLogo`] widget renders the tidepool wordmark.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Widget;

const SMALL: &str = indoc! {"
    tidepool
    ≈≈≈≈≈≈≈≈
"};

const REGULAR: &str = indoc! {"
    ╺┳╸╻╺┳┓┏━╸┏━┓┏━┓┏━┓╻
     ┃ ┃ ┃┃┣╸ ┣━┛┃ ┃┃ ┃┃
     ╹ ╹╺┻┛┗━╸╹  ┗━┛┗━┛┗━╸
"};

/// Draws the wordmark at one of two sizes.
///
/// `Small` puts the name over a wave (2 lines); `Regular` spells it in
/// box drawing characters (3 lines). The screens pick whichever fits
/// their header area.
///
/// # Examples
///
/// ```rust
/// use tidepool::widgets::TidepoolLogo;
///
/// # fn ui(frame: &mut ratatui::Frame) {
/// frame.render_widget(TidepoolLogo::small(), frame.area());
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TidepoolLogo {
    size: Size,
}

/// The size of the wordmark.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Size {
    /// The name over a wave.
    ///
    /// ```text
    /// tidepool
    /// ≈≈≈≈≈≈≈≈
    /// ```
    #[default]
    Small,
    /// Box drawing characters, three lines tall.
    Regular,
}

impl TidepoolLogo {
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    pub const fn small() -> Self {
        Self::new(Size::Small)
    }

    pub const fn regular() -> Self {
        Self::new(Size::Regular)
    }

    /// Width of the wordmark in terminal cells.
    pub const fn width(&self) -> u16 {
        self.size.dimensions().0
    }

    /// Height of the wordmark in lines.
    pub const fn height(&self) -> u16 {
        self.size.dimensions().1
    }
}

impl Widget for TidepoolLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::raw(self.size.glyphs())
            .style(theme().title_style())
            .render(area, buf);
    }
}

impl Size {
    const fn glyphs(self) -> &'static str {
        match self {
            Self::Small => SMALL,
            Self::Regular => REGULAR,
        }
    }

    /// (width, height) in terminal cells; every glyph is one cell wide.
    const fn dimensions(self) -> (u16, u16) {
        match self {
            Self::Small => (8, 2),
            Self::Regular => (22, 3),
        }
    }
}
