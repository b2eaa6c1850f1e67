//! Facade over the compiled Unicode data: normalizers, case folding, and
//! the property lookups the generator consumes.

use icu_casemap::CaseMapper;
use icu_collections::codepointinvlist::CodePointInversionList;
use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};
use icu_properties::maps::{self, CodePointMapDataBorrowed};
use icu_properties::sets::{self, CodePointSetDataBorrowed};
use icu_properties::{BidiClass, GeneralCategory, GeneralCategoryGroup};

pub struct UnicodeData {
    nfd: DecomposingNormalizer,
    nfkc: ComposingNormalizer,
    case_mapper: CaseMapper,
    general_category: CodePointMapDataBorrowed<'static, GeneralCategory>,
    bidi_class: CodePointMapDataBorrowed<'static, BidiClass>,
    changes_when_nfkc_casefolded: CodePointSetDataBorrowed<'static>,
    default_ignorable: CodePointSetDataBorrowed<'static>,
}

impl Default for UnicodeData {
    fn default() -> Self {
        Self::new()
    }
}

impl UnicodeData {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nfd: DecomposingNormalizer::new_nfd(),
            nfkc: ComposingNormalizer::new_nfkc(),
            case_mapper: CaseMapper::new(),
            general_category: maps::general_category(),
            bidi_class: maps::bidi_class(),
            changes_when_nfkc_casefolded: sets::changes_when_nfkc_casefolded(),
            default_ignorable: sets::default_ignorable_code_point(),
        }
    }

    #[must_use]
    pub fn nfd(&self, s: &str) -> String {
        self.nfd.normalize(s)
    }

    #[must_use]
    pub fn nfkc(&self, s: &str) -> String {
        self.nfkc.normalize(s)
    }

    /// The closure of full case folding and NFKC, iterated until stable.
    /// This recomputes the mapping RFC 3454 publishes as table B.2.
    #[must_use]
    pub fn fold_nfkc(&self, s: &str) -> String {
        self.fold_closure(s, false)
    }

    /// The NFKC_Casefold mapping: the same closure with removal of
    /// `Default_Ignorable_Code_Point` characters on every round.
    #[must_use]
    pub fn nfkc_casefold(&self, s: &str) -> String {
        self.fold_closure(s, true)
    }

    fn fold_closure(&self, s: &str, drop_ignorable: bool) -> String {
        let mut current = s.to_owned();
        loop {
            let retained: String = current
                .chars()
                .filter(|&c| !(drop_ignorable && self.default_ignorable.contains(c)))
                .collect();
            let next = self.nfkc.normalize(&self.case_mapper.fold_string(&retained));
            if next == current {
                return next;
            }
            current = next;
        }
    }

    #[must_use]
    pub fn changes_when_nfkc_casefolded(&self, c: char) -> bool {
        self.changes_when_nfkc_casefolded.contains(c)
    }

    #[must_use]
    pub fn in_general_category_group(&self, c: char, group: GeneralCategoryGroup) -> bool {
        group.contains(self.general_category.get(c))
    }

    #[must_use]
    pub fn bidi_class(&self, c: char) -> BidiClass {
        self.bidi_class.get(c)
    }
}

/// `true` iff every code point of `s` is in `set`. Vacuously true for the
/// empty sequence.
#[must_use]
pub fn contains_all(set: &CodePointInversionList<'_>, s: &str) -> bool {
    s.chars().all(|c| set.contains(c))
}
