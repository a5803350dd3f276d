//! Screen cells: a character plus its [`Style`].

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB). Zero means "terminal
/// default".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const DEFAULT: Self = Self(0);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// AttrMask
// ---------------------------------------------------------------------------

/// Bitmask of text attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct AttrMask(pub u8);

impl AttrMask {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Visual style of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrMask,
}

impl Style {
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    #[inline]
    pub const fn with_attrs(mut self, attrs: AttrMask) -> Self {
        self.attrs = attrs;
        self
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A styled character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// A blank, unstyled cell.
    pub const BLANK: Self = Self {
        ch: ' ',
        style: Style {
            fg: Color::DEFAULT,
            bg: Color::DEFAULT,
            attrs: AttrMask::NONE,
        },
    };

    /// Placeholder for the right half of a double-width glyph. Drivers do
    /// not paint it.
    pub const WIDE_TAIL: Self = Self::BLANK.with_char('\0');

    /// Whether this cell continues the double-width glyph to its left.
    #[inline]
    pub const fn is_wide_tail(&self) -> bool {
        self.ch == '\0'
    }

    /// Set the character (builder).
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    /// Set the style (builder).
    #[inline]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_components() {
        let c = Color::from_rgb(0xAB, 0xCD, 0xEF);
        assert_eq!((c.r(), c.g(), c.b()), (0xAB, 0xCD, 0xEF));
        assert_eq!(Color::default(), Color::DEFAULT);
    }

    #[test]
    fn attr_mask_ops() {
        assert!(AttrMask::BOLD.contains(AttrMask::BOLD));
        assert!(!AttrMask::NONE.contains(AttrMask::BOLD));
        assert!(AttrMask::NONE.is_empty());
        assert!(!AttrMask::BOLD.is_empty());
    }

    #[test]
    fn cell_builder() {
        let style = Style::default()
            .with_fg(Color::from_rgb(255, 0, 0))
            .with_attrs(AttrMask::BOLD);
        let c = Cell::default().with_char('#').with_style(style);
        assert_eq!(c.ch, '#');
        assert_eq!(c.style.fg.r(), 255);
        assert_eq!(Cell::default(), Cell::BLANK);
    }

    #[test]
    fn wide_tail_marker() {
        assert!(Cell::WIDE_TAIL.is_wide_tail());
        assert!(!Cell::BLANK.is_wide_tail());
    }
}
