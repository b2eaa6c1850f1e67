use rstest::*;

use uts46gen::{classify, status_of, write_table, Classification, Nameprep, SeedSets, Status, UnicodeData};

struct Pipeline {
    unicode: UnicodeData,
    table: Classification,
}

#[fixture]
#[once]
fn pipeline() -> Pipeline {
    let unicode = UnicodeData::new();
    let table = {
        let prep = Nameprep::new(&unicode);
        let seeds = SeedSets::build(&unicode);
        classify(&unicode, &prep, &seeds)
    };
    Pipeline { unicode, table }
}

#[fixture]
#[once]
fn rendered(pipeline: &Pipeline) -> String {
    let mut out = Vec::new();
    write_table(&mut out, &pipeline.unicode, &pipeline.table).unwrap();
    String::from_utf8(out).unwrap()
}

fn status(pipeline: &Pipeline, cp: u32) -> (Status, String) {
    status_of(&pipeline.unicode, &pipeline.table, cp)
}

#[rstest]
#[case::lowercase(0x61, Status::Valid, "")]
#[case::digit(0x37, Status::Valid, "")]
#[case::hyphen(0x2D, Status::Valid, "")]
#[case::full_stop(0x2E, Status::Valid, "")]
#[case::latin_e_acute(0xE9, Status::Valid, "")]
#[case::cjk(0x4E00, Status::Valid, "")]
#[case::uppercase(0x41, Status::Mapped, "a")]
#[case::ideographic_full_stop(0x3002, Status::Mapped, ".")]
#[case::fullwidth_full_stop(0xFF0E, Status::Mapped, ".")]
#[case::halfwidth_full_stop(0xFF61, Status::Mapped, ".")]
#[case::math_bold_capital_a(0x1D400, Status::Mapped, "a")]
#[case::sharp_s(0xDF, Status::Deviation, "ss")]
#[case::final_sigma(0x3C2, Status::Deviation, "\u{03C3}")]
#[case::zwnj(0x200C, Status::Deviation, "")]
#[case::zwj(0x200D, Status::Deviation, "")]
#[case::soft_hyphen(0xAD, Status::Ignored, "")]
#[case::control(0x80, Status::Disallowed, "")]
#[case::space(0x20, Status::Disallowed, "")]
#[case::nbsp(0xA0, Status::Disallowed, "")]
#[case::replacement(0xFFFD, Status::Disallowed, "")]
#[case::ideographic_description(0x2FF0, Status::Disallowed, "")]
#[case::hangul_filler(0x3164, Status::Disallowed, "")]
#[case::hangul_jungseong_filler(0x1160, Status::Disallowed, "")]
#[case::halfwidth_hangul_filler(0xFFA0, Status::Disallowed, "")]
#[case::khmer_inherent_aq(0x17B4, Status::Disallowed, "")]
#[case::musical_begin_beam(0x1D173, Status::Disallowed, "")]
#[case::lrm(0x200E, Status::Disallowed, "")]
#[case::lre(0x202A, Status::Disallowed, "")]
#[case::surrogate(0xD800, Status::Disallowed, "")]
fn statuses(
    pipeline: &Pipeline,
    #[case] cp: u32,
    #[case] expected: Status,
    #[case] mapping: &str,
) {
    assert_eq!(status(pipeline, cp), (expected, mapping.to_string()));
}

/// The whole of ASCII A-Z lowercases; every other ASCII code point is
/// either valid (letters, digits, hyphen, full stop) or disallowed.
#[rstest]
fn ascii_letters_lowercase(pipeline: &Pipeline) {
    for cp in 0x41..=0x5A {
        let lower = char::from_u32(cp + 0x20).unwrap().to_string();
        assert_eq!(status(pipeline, cp), (Status::Mapped, lower), "U+{cp:04X}");
    }
}

/// Every code point lands in exactly one of the six sets, so the status
/// sets the emitter reads are pairwise disjoint after precedence.
#[rstest]
fn deviations_are_not_reported_valid_or_ignored(pipeline: &Pipeline) {
    for cp in [0xDF, 0x3C2, 0x200C, 0x200D] {
        let (status, _) = status(pipeline, cp);
        assert_eq!(status, Status::Deviation, "U+{cp:04X}");
    }
}

/// Code points the IDNA2003 reconciliation excluded stay in the internal
/// mapped/ignored sets, but the exclusion dominates: they report
/// disallowed with no mapping.
#[rstest]
fn exclusions_dominate_ignored_and_mapped(pipeline: &Pipeline) {
    for cp in [0x1160, 0x17B4, 0x200E, 0x3164, 0xFFA0, 0x1D173] {
        let c = char::from_u32(cp).unwrap();
        assert!(pipeline.table.disallowed.contains(c), "U+{cp:04X}");
        assert_eq!(
            status(pipeline, cp),
            (Status::Disallowed, String::new()),
            "U+{cp:04X}"
        );
    }
}

#[rstest]
fn full_stop_is_valid_not_a_separator_mapping(pipeline: &Pipeline) {
    assert!(!pipeline.table.label_separators.contains('.'));
    assert!(pipeline.table.valid.contains('.'));
}

/// NFD closure: the decomposition of every valid code point is itself
/// wholly valid, and the mapping of every mapped code point decomposes
/// into valid code points.
#[rstest]
fn valid_set_is_nfd_closed(pipeline: &Pipeline) {
    let Pipeline { unicode, table } = pipeline;
    for c in table.valid.iter_chars() {
        let nfd = unicode.nfd(c.encode_utf8(&mut [0; 4]));
        for d in nfd.chars() {
            assert!(table.valid.contains(d), "U+{:04X} -> U+{:04X}", c as u32, d as u32);
        }
    }
}

#[rstest]
fn parsed_rows_cover_the_code_space(rendered: &String) {
    let mut expected_start = 0u32;
    for line in rendered.lines() {
        let mut fields = line.split(';').map(str::trim);
        let range = fields.next().unwrap();
        let status = fields.next().unwrap();
        assert!(
            matches!(status, "valid" | "mapped" | "deviation" | "ignored" | "disallowed"),
            "{line}"
        );

        let (start, end) = range.split_once("..").map_or_else(
            || {
                let cp = u32::from_str_radix(range, 16).unwrap();
                (cp, cp)
            },
            |(a, b)| {
                (
                    u32::from_str_radix(a, 16).unwrap(),
                    u32::from_str_radix(b, 16).unwrap(),
                )
            },
        );
        assert_eq!(start, expected_start, "{line}");
        assert!(end >= start, "{line}");
        expected_start = end + 1;
    }
    assert_eq!(expected_start, 0x110000);
}

#[rstest]
fn known_rows_are_emitted(rendered: &String) {
    assert!(rendered.contains("0041          ; mapped ; 0061\n"));
    assert!(rendered.contains("00DF          ; deviation ; 0073 0073\n"));
    assert!(rendered.contains("00AD          ; ignored\n"));
    assert!(rendered.contains("3002          ; mapped ; 002E\n"));
    // Consecutive lowercase letters coalesce into one row.
    assert!(rendered.contains("0061..007A    ; valid\n"));
}

/// Rows never straddle a status boundary: re-deriving the status of a
/// row's endpoints gives the row's own status.
#[rstest]
fn row_endpoints_agree(pipeline: &Pipeline, rendered: &String) {
    for line in rendered.lines().take(500) {
        let mut fields = line.split(';').map(str::trim);
        let range = fields.next().unwrap();
        let name = fields.next().unwrap();
        let (a, b) = range
            .split_once("..")
            .map_or((range, range), |(a, b)| (a, b));
        for cp in [a, b] {
            let cp = u32::from_str_radix(cp, 16).unwrap();
            let (status, _) = status(pipeline, cp);
            assert_eq!(status.name(), name, "{line}");
        }
    }
}
