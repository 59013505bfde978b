//! Encode command: put a value into a file without moving its digest.

use std::path::Path;

use anyhow::{Context, Result};
use hashquine::ValueSource;

use super::{load_profile, open_session, write_result};

#[allow(clippy::too_many_arguments)]
pub fn run(
    path: &Path,
    profile: Option<&str>,
    profile_file: Option<&Path>,
    value: Option<&str>,
    random: bool,
    force: bool,
    no_reset: bool,
    output: Option<&Path>,
) -> Result<()> {
    let profile = load_profile(profile, profile_file)?;
    let reset = no_reset.then_some(false);
    let mut session = open_session(path, profile, force, reset)?;

    let source = match (value, random) {
        (Some(value), _) => ValueSource::Explicit(value.to_string()),
        (None, true) => ValueSource::Random,
        (None, false) => ValueSource::SelfDigest,
    };

    let outcome = session.encode(&source).context("encoding")?;
    println!(
        "Encoding requested value: '{}' (len:{})",
        outcome.requested,
        outcome.requested.len()
    );
    println!(
        "Output value: '{}' (length:{})",
        outcome.encoded,
        outcome.encoded.len()
    );
    if !outcome.is_complete() {
        println!(
            "Note: value truncated to {} digits; the output value is what the display will show.",
            outcome.encoded.len()
        );
    }
    println!("file md5: {}", session.digest().to_hex());

    write_result(path, output, &session.into_bytes())
}
