#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

//! Generates the UTS #46 per-code-point status table (valid, mapped,
//! deviation, ignored, disallowed) from Unicode properties, NFKC case
//! folding, and the Nameprep profile, instead of parsing the published
//! `IdnaMappingTable.txt`.

use std::io;

mod classify;
mod emit;
mod nameprep;
mod rfc3454;
mod seed;
mod unicode;

pub use classify::{classify, Classification};
pub use emit::{status_of, write_table, Status};
pub use nameprep::{Nameprep, Prep, PrepError};
pub use seed::SeedSets;
pub use unicode::UnicodeData;

/// Derives the full classification and writes the table to `w`.
pub fn run<W: io::Write>(mut w: W) -> io::Result<()> {
    let unicode = UnicodeData::new();
    let prep = Nameprep::new(&unicode);
    let seeds = SeedSets::build(&unicode);
    let table = classify(&unicode, &prep, &seeds);
    write_table(&mut w, &unicode, &table)
}
