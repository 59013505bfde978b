//! Read command: print the value a file currently encodes.

use std::path::Path;

use anyhow::{Context, Result};

use super::{load_profile, open_session};

pub fn run(
    path: &Path,
    profile: Option<&str>,
    profile_file: Option<&Path>,
    force: bool,
) -> Result<()> {
    let profile = load_profile(profile, profile_file)?;
    let mut session = open_session(path, profile, force, None)?;
    let value = session.decode().context("decoding")?;
    println!("{value}");
    Ok(())
}
