use anyhow::Result;

use fhexgen::{cli, RandomSource, TestVector};

/// One-shot run: seed from the clock and the test identifier, emit a single
/// `<hex> <decimal>` line on stdout. Argument errors exit non-zero through
/// the error return.
fn main() -> Result<()> {
    let test_id = cli::parse_test_id(std::env::args())?;
    let mut source = RandomSource::from_clock(test_id);
    println!("{}", TestVector::generate(&mut source));
    Ok(())
}
