//! The initial partition the classifier starts from, built in one scan of
//! the scalar-value space.

use std::ops::RangeInclusive;

use icu_collections::codepointinvlist::{CodePointInversionList, CodePointInversionListBuilder};
use icu_properties::GeneralCategoryGroup;

use crate::unicode::UnicodeData;

/// U+002E plus the three alternative label separators.
pub const LABEL_SEPARATORS: [char; 4] = ['\u{002E}', '\u{3002}', '\u{FF0E}', '\u{FF61}'];

/// The four deviation characters of UTS #46.
pub const DEVIATIONS: [char; 4] = ['\u{00DF}', '\u{03C2}', '\u{200C}', '\u{200D}'];

/// The Ideographic_Description_Characters block.
const IDEOGRAPHIC_DESCRIPTION: RangeInclusive<char> = '\u{2FF0}'..='\u{2FFF}';

pub struct SeedSets {
    pub label_separators: CodePointInversionList<'static>,
    pub deviations: CodePointInversionList<'static>,
    /// `Changes_When_NFKC_Casefolded` minus the label separators; removing
    /// the separators here simplifies every later check on mapped
    /// characters.
    pub mapped: CodePointInversionList<'static>,
    /// The candidate valid set derived purely from properties, before
    /// IDNA2003 reconciliation.
    pub base_valid: CodePointInversionList<'static>,
}

impl SeedSets {
    #[must_use]
    pub fn build(unicode: &UnicodeData) -> Self {
        let mut label_separators = CodePointInversionListBuilder::new();
        for c in LABEL_SEPARATORS {
            label_separators.add_char(c);
        }
        let mut deviations = CodePointInversionListBuilder::new();
        for c in DEVIATIONS {
            deviations.add_char(c);
        }

        let mut mapped = CodePointInversionListBuilder::new();
        let mut base_valid = CodePointInversionListBuilder::new();
        for c in '\0'..='\u{10FFFF}' {
            if unicode.changes_when_nfkc_casefolded(c) {
                if !LABEL_SEPARATORS.contains(&c) {
                    mapped.add_char(c);
                }
            } else if !unicode.in_general_category_group(c, GeneralCategoryGroup::Other)
                && !unicode.in_general_category_group(c, GeneralCategoryGroup::Separator)
                && !IDEOGRAPHIC_DESCRIPTION.contains(&c)
                && !c.is_ascii()
            {
                base_valid.add_char(c);
            }
            // Exclude ASCII wholesale above, then readmit the letters,
            // digits, and hyphen.
            if matches!(c, '-' | '0'..='9' | 'A'..='Z' | 'a'..='z') {
                base_valid.add_char(c);
            }
        }

        Self {
            label_separators: label_separators.build(),
            deviations: deviations.build(),
            mapped: mapped.build(),
            base_valid: base_valid.build(),
        }
    }
}
