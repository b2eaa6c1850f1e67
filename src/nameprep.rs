//! The Nameprep profile of stringprep (RFC 3491), evaluated one code point
//! at a time: map, KC-normalize, check prohibited output, optionally check
//! bidi. The bidi check is a constructor option instead of a flag poked
//! into shared profile state.

use icu_properties::BidiClass;
use thiserror::Error;

use crate::rfc3454;
use crate::unicode::UnicodeData;

/// Outcome of preparing a single code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prep {
    /// The code point survives unchanged.
    Valid,
    /// The code point maps to the given (possibly empty) sequence.
    Mapped(String),
    /// The prepared output contains a prohibited code point.
    Prohibited,
}

/// Stringprep failures that are not prohibition. Prohibition is a normal
/// [`Prep`] outcome; these are the "not of interest" results a caller skips
/// over or rules out.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrepError {
    #[error("U+{0:04X} is unassigned in the profile's repertoire")]
    Unassigned(u32),
    #[error("U+{0:04X} fails the bidi check")]
    Bidi(u32),
}

pub struct Nameprep<'a> {
    unicode: &'a UnicodeData,
    check_bidi: bool,
}

impl<'a> Nameprep<'a> {
    /// A profile instance with the bidi check disabled, which is what
    /// structural derivation wants.
    #[must_use]
    pub const fn new(unicode: &'a UnicodeData) -> Self {
        Self {
            unicode,
            check_bidi: false,
        }
    }

    #[must_use]
    pub const fn check_bidi(mut self, check: bool) -> Self {
        self.check_bidi = check;
        self
    }

    pub fn prepare(&self, c: char) -> Result<Prep, PrepError> {
        if rfc3454::unassigned(c) {
            return Err(PrepError::Unassigned(c as u32));
        }

        // Map, then KC normalization. The alternative label separators are
        // part of the profile's mapping data (RFC 3490 dot equivalence);
        // `fold_nfkc` is NFKC-closed and the other branches NFKC-stable,
        // so no separate normalization pass is needed.
        let output = match c {
            '\u{3002}' | '\u{FF0E}' | '\u{FF61}' => String::from('.'),
            c if rfc3454::mapped_to_nothing(c) => String::new(),
            c => self.unicode.fold_nfkc(c.encode_utf8(&mut [0; 4])),
        };

        if output.chars().any(rfc3454::prohibited) {
            return Ok(Prep::Prohibited);
        }
        if self.check_bidi && !self.bidi_ok(&output) {
            return Err(PrepError::Bidi(c as u32));
        }

        if output.chars().eq([c]) {
            Ok(Prep::Valid)
        } else {
            Ok(Prep::Mapped(output))
        }
    }

    /// RFC 3454 section 6: an output containing any RandALCat code point
    /// must contain no LCat code point and must start and end RandALCat.
    fn bidi_ok(&self, s: &str) -> bool {
        let randal = |c: char| {
            matches!(
                self.unicode.bidi_class(c),
                BidiClass::RightToLeft | BidiClass::ArabicLetter
            )
        };
        if !s.chars().any(randal) {
            return true;
        }
        let no_l = !s
            .chars()
            .any(|c| self.unicode.bidi_class(c) == BidiClass::LeftToRight);
        no_l && s.chars().next().is_some_and(randal) && s.chars().next_back().is_some_and(randal)
    }
}
