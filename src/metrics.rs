//! Font metrics used to measure text before it is drawn

/// Width of text in font units, 1000 per em for the PDF base fonts.
pub trait FontMetrics: Sync {
    fn units_per_em(&self) -> f32 {
        1000.0
    }

    /// Width of `text` in font units.
    fn text_width(&self, text: &str) -> f32;

    /// Width of `text` in points when set at `size`.
    fn width_at(&self, text: &str, size: f32) -> f32 {
        self.text_width(text) * size / self.units_per_em()
    }
}

/// Advance widths of Helvetica-Bold (the badge font) from its AFM file
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaBold;

/// Widths for the printable ASCII range, starting at space (32)
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,      // 'p'..'~'
];

/// Widths for Latin-1, starting at no-break space (160)
#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,  // NBSP..'¯'
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,  // '°'..'¿'
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 'À'..'Ï'
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,  // 'Ð'..'ß'
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,  // 'à'..'ï'
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,  // 'ð'..'ÿ'
];

/// Used for characters outside both tables
const HELVETICA_BOLD_DEFAULT_WIDTH: u16 = 556;

impl HelveticaBold {
    pub fn char_width(c: char) -> u16 {
        match c as u32 {
            code @ 32..=126 => HELVETICA_BOLD_WIDTHS[(code - 32) as usize],
            code @ 160..=255 => HELVETICA_BOLD_LATIN1_WIDTHS[(code - 160) as usize],
            _ => HELVETICA_BOLD_DEFAULT_WIDTH,
        }
    }
}

impl FontMetrics for HelveticaBold {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().map(|c| Self::char_width(c) as f32).sum()
    }
}
