//! Walks the full code space, coalesces runs that share a status and
//! mapping, and prints the table.

use std::io::{self, Write};

use crate::classify::Classification;
use crate::unicode::UnicodeData;

pub const MAX_CODE_POINT: u32 = 0x10FFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Disallowed,
    Ignored,
    Mapped,
    Deviation,
    Valid,
}

impl Status {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disallowed => "disallowed",
            Self::Ignored => "ignored",
            Self::Mapped => "mapped",
            Self::Deviation => "deviation",
            Self::Valid => "valid",
        }
    }
}

/// Status and mapping of one code point. The disallowed set is consulted
/// first: the internal mapped and ignored sets still hold the code points
/// the IDNA2003 reconciliation excluded, and the exclusion wins. Surrogates
/// are in no set and are emitted as disallowed rows, so the table covers
/// the code space without gaps.
#[must_use]
pub fn status_of(unicode: &UnicodeData, table: &Classification, cp: u32) -> (Status, String) {
    let Some(c) = char::from_u32(cp) else {
        return (Status::Disallowed, String::new());
    };
    if table.disallowed.contains(c) {
        (Status::Disallowed, String::new())
    } else if table.label_separators.contains(c) {
        (Status::Mapped, String::from('.'))
    } else if table.deviations.contains(c) {
        (Status::Deviation, unicode.nfkc_casefold(c.encode_utf8(&mut [0; 4])))
    } else if table.ignored.contains(c) {
        (Status::Ignored, String::new())
    } else if table.valid.contains(c) {
        (Status::Valid, String::new())
    } else if table.mapped.contains(c) {
        (Status::Mapped, unicode.nfkc_casefold(c.encode_utf8(&mut [0; 4])))
    } else {
        // A code point in no set at all means the classification state is
        // corrupt; report it and fall back to disallowed.
        eprintln!("*** undetermined status of U+{cp:04X}");
        (Status::Disallowed, String::new())
    }
}

pub(crate) fn write_line<W: Write>(
    w: &mut W,
    start: u32,
    end: u32,
    status: Status,
    mapping: &str,
) -> io::Result<()> {
    if start == end {
        write!(w, "{start:04X}          ")?;
    } else {
        write!(w, "{start:04X}..{end:04X}    ")?;
    }
    write!(w, "; {}", status.name())?;
    if matches!(status, Status::Mapped | Status::Deviation) || !mapping.is_empty() {
        write!(w, " ;")?;
        for c in mapping.chars() {
            write!(w, " {:04X}", c as u32)?;
        }
    }
    writeln!(w)
}

/// Emits one line per maximal run of code points sharing (status, mapping),
/// ascending, jointly covering [0, 10FFFF].
pub fn write_table<W: Write>(
    w: &mut W,
    unicode: &UnicodeData,
    table: &Classification,
) -> io::Result<()> {
    let (mut status, mut mapping) = status_of(unicode, table, 0);
    let mut start = 0;
    for cp in 1..=MAX_CODE_POINT {
        let (next_status, next_mapping) = status_of(unicode, table, cp);
        if next_status != status || next_mapping != mapping {
            write_line(w, start, cp - 1, status, &mapping)?;
            start = cp;
            status = next_status;
            mapping = next_mapping;
        }
    }
    write_line(w, start, MAX_CODE_POINT, status, &mapping)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn line(start: u32, end: u32, status: Status, mapping: &str) -> String {
        let mut out = Vec::new();
        write_line(&mut out, start, end, status, mapping).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    #[case::valid_singleton(0x2D, 0x2D, Status::Valid, "", "002D          ; valid\n")]
    #[case::valid_range(0x61, 0x7A, Status::Valid, "", "0061..007A    ; valid\n")]
    #[case::mapped(0x41, 0x41, Status::Mapped, "a", "0041          ; mapped ; 0061\n")]
    #[case::mapped_multi(
        0xDF,
        0xDF,
        Status::Mapped,
        "ss",
        "00DF          ; mapped ; 0073 0073\n"
    )]
    #[case::deviation_empty(
        0x200C,
        0x200D,
        Status::Deviation,
        "",
        "200C..200D    ; deviation ;\n"
    )]
    #[case::supplementary(
        0x1D400,
        0x1D400,
        Status::Mapped,
        "a",
        "1D400          ; mapped ; 0061\n"
    )]
    #[case::disallowed(0xD800, 0xDFFF, Status::Disallowed, "", "D800..DFFF    ; disallowed\n")]
    fn formatting(
        #[case] start: u32,
        #[case] end: u32,
        #[case] status: Status,
        #[case] mapping: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(line(start, end, status, mapping), expected);
    }
}
