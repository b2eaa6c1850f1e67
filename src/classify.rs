//! Derives the five UTS #46 status sets: IDNA2003 reconciliation followed
//! by the NFD-closure fixed point.
//!
//! Sets under iteration are never mutated in place; every sweep collects
//! its demotions into a fresh builder and rebuilds, so a pass always tests
//! containment against the state the pass started from.

use icu_collections::codepointinvlist::{CodePointInversionList, CodePointInversionListBuilder};

use crate::nameprep::{Nameprep, Prep, PrepError};
use crate::seed::SeedSets;
use crate::unicode::{contains_all, UnicodeData};

pub struct Classification {
    /// The alternative label separators; U+002E has been moved to `valid`.
    pub label_separators: CodePointInversionList<'static>,
    pub deviations: CodePointInversionList<'static>,
    /// Subset of the original mapped set whose mapping is empty.
    pub ignored: CodePointInversionList<'static>,
    pub valid: CodePointInversionList<'static>,
    pub mapped: CodePointInversionList<'static>,
    pub disallowed: CodePointInversionList<'static>,
}

/// The UTS #46 base mapping of one code point: alternative label separators
/// collapse to U+002E, everything else goes through NFKC_Casefold.
pub(crate) fn base_mapping(unicode: &UnicodeData, c: char) -> String {
    match c {
        '\u{3002}' | '\u{FF0E}' | '\u{FF61}' => String::from('.'),
        c => unicode.nfkc_casefold(c.encode_utf8(&mut [0; 4])),
    }
}

/// Code points where IDNA2003 and the UTS #46 base rules disagree; UTS #46
/// forces them to disallowed. A code point is excluded when Nameprep
/// accepts it with a result other than the base mapping, or prohibits it
/// even though it (or its whole non-trivial base mapping) is base-valid.
fn base_exclusions(
    unicode: &UnicodeData,
    prep: &Nameprep<'_>,
    seeds: &SeedSets,
) -> CodePointInversionList<'static> {
    let mut exclusions = CodePointInversionListBuilder::new();
    for c in '\0'..='\u{10FFFF}' {
        let outcome = match prep.prepare(c) {
            Ok(outcome) => outcome,
            Err(PrepError::Unassigned(_)) => continue,
            Err(e @ PrepError::Bidi(_)) => unreachable!("bidi check is disabled: {e}"),
        };
        let mapping = base_mapping(unicode, c);
        let excluded = match outcome {
            Prep::Valid => !mapping.chars().eq([c]),
            Prep::Mapped(result) => result != mapping,
            Prep::Prohibited => {
                seeds.base_valid.contains(c)
                    || (!mapping.chars().eq([c]) && contains_all(&seeds.base_valid, &mapping))
            }
        };
        if excluded {
            exclusions.add_char(c);
        }
    }
    exclusions.build()
}

pub fn classify(unicode: &UnicodeData, prep: &Nameprep<'_>, seeds: &SeedSets) -> Classification {
    let exclusions = base_exclusions(unicode, prep, seeds);

    let mut disallowed = {
        let mut b = CodePointInversionListBuilder::new();
        b.add_range(&('\0'..='\u{10FFFF}'));
        b.remove_set(&seeds.label_separators);
        b.remove_set(&seeds.deviations);
        b.remove_set(&seeds.mapped);
        b.remove_set(&seeds.base_valid);
        b.add_set(&exclusions);
        b.build()
    };

    // First sweep over the mapped set: a mapping that leaves the base valid
    // set demotes its code point; an empty mapping reclassifies it as
    // ignored (but it stays in the mapped set, like the deviations; the
    // emitter's precedence keeps the partition).
    let mut mapped = seeds.mapped.clone();
    let ignored = {
        let mut ignored = CodePointInversionListBuilder::new();
        let mut demoted = CodePointInversionListBuilder::new();
        for c in mapped.iter_chars() {
            let mapping = unicode.nfkc_casefold(c.encode_utf8(&mut [0; 4]));
            if !contains_all(&seeds.base_valid, &mapping) {
                eprintln!(
                    "U+{:04X} mapped -> disallowed: mapping not wholly in base valid set",
                    c as u32
                );
                demoted.add_char(c);
            } else if mapping.is_empty() {
                ignored.add_char(c);
            }
        }
        let demoted = demoted.build();
        mapped = difference(&mapped, &demoted);
        disallowed = union(&disallowed, &demoted);
        ignored.build()
    };

    let mut valid = {
        let mut b = CodePointInversionListBuilder::new();
        b.add_set(&seeds.base_valid);
        b.remove_set(&seeds.label_separators);
        b.remove_set(&seeds.deviations);
        b.remove_set(&disallowed);
        b.remove_set(&mapped);
        b.add_char('.'); // not mapped, simply valid
        b.build()
    };

    // Stability loop: demote until both sets are closed under NFD.
    // Demotions are monotone over a finite universe, so this terminates.
    loop {
        let mut changed = false;

        let mut demoted = CodePointInversionListBuilder::new();
        for c in valid.iter_chars() {
            if !contains_all(&valid, &unicode.nfd(c.encode_utf8(&mut [0; 4]))) {
                eprintln!("U+{:04X} valid -> disallowed: NFD not wholly valid", c as u32);
                demoted.add_char(c);
                changed = true;
            }
        }
        let demoted = demoted.build();
        valid = difference(&valid, &demoted);
        disallowed = union(&disallowed, &demoted);

        let mut demoted = CodePointInversionListBuilder::new();
        for c in mapped.iter_chars() {
            let mapping = unicode.nfkc_casefold(c.encode_utf8(&mut [0; 4]));
            if !contains_all(&valid, &unicode.nfd(&mapping)) {
                eprintln!(
                    "U+{:04X} mapped -> disallowed: NFD of mapping not wholly valid",
                    c as u32
                );
                demoted.add_char(c);
                changed = true;
            }
        }
        let demoted = demoted.build();
        mapped = difference(&mapped, &demoted);
        disallowed = union(&disallowed, &demoted);

        if !changed {
            break;
        }
    }

    // U+002E is simply valid; only the alternative separators stay mapped.
    let label_separators = {
        let mut b = CodePointInversionListBuilder::new();
        b.add_set(&seeds.label_separators);
        b.remove_char('.');
        b.build()
    };

    Classification {
        label_separators,
        deviations: seeds.deviations.clone(),
        ignored,
        valid,
        mapped,
        disallowed,
    }
}

fn difference(
    a: &CodePointInversionList<'_>,
    b: &CodePointInversionList<'_>,
) -> CodePointInversionList<'static> {
    let mut builder = CodePointInversionListBuilder::new();
    builder.add_set(a);
    builder.remove_set(b);
    builder.build()
}

fn union(
    a: &CodePointInversionList<'_>,
    b: &CodePointInversionList<'_>,
) -> CodePointInversionList<'static> {
    let mut builder = CodePointInversionListBuilder::new();
    builder.add_set(a);
    builder.add_set(b);
    builder.build()
}
