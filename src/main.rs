#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

use std::io::{self, Write};
use std::process;

fn main() {
    let stdout = io::stdout();
    let mut w = io::BufWriter::new(stdout.lock());
    if let Err(e) = uts46gen::run(&mut w).and_then(|()| w.flush()) {
        eprintln!("error at uts46gen: {e}");
        process::exit(1);
    }
}
