//! Command implementations.

pub mod encode;
pub mod profiles;
pub mod read;
pub mod scan;
pub mod shatter;

use std::path::Path;

use anyhow::{bail, Context, Result};
use hashquine::formats::Profile;
use hashquine::{Session, SessionConfig};

/// Resolve a profile from a builtin name or a JSON file.
pub(crate) fn load_profile(name: Option<&str>, file: Option<&Path>) -> Result<Profile> {
    match (name, file) {
        (Some(name), None) => hashquine::formats::find(name).with_context(|| {
            format!("unknown profile '{name}', see `hashquine profiles` for the builtin set")
        }),
        (None, Some(path)) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading profile {}", path.display()))?;
            Profile::from_json(&json)
                .with_context(|| format!("parsing profile {}", path.display()))
        }
        _ => bail!("exactly one of --profile or --profile-file is required"),
    }
}

/// Open a session over the file at `path`.
pub(crate) fn open_session(
    path: &Path,
    profile: Profile,
    force: bool,
    reset: Option<bool>,
) -> Result<Session> {
    let data =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let config = SessionConfig {
        check_header: !force,
        check_full: !force,
        reset,
    };
    Session::open(profile, data, config)
        .with_context(|| format!("opening {}", path.display()))
}

/// Write `data` to `output`, or back over `input` when no output is given.
pub(crate) fn write_result(input: &Path, output: Option<&Path>, data: &[u8]) -> Result<()> {
    let target = output.unwrap_or(input);
    std::fs::write(target, data).with_context(|| format!("writing {}", target.display()))?;
    println!("Wrote {} bytes to {}", data.len(), target.display());
    Ok(())
}
