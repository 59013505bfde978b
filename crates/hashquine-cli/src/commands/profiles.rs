//! Profiles command: list the builtin formats or dump one as JSON.

use anyhow::{Context, Result};
use hashquine::formats;

pub fn run(name: Option<&str>) -> Result<()> {
    if let Some(name) = name {
        let profile = formats::find(name).with_context(|| {
            format!("unknown profile '{name}', run `hashquine profiles` for the builtin set")
        })?;
        println!("{}", profile.to_json()?);
        return Ok(());
    }

    for profile in formats::builtins() {
        println!(
            "{:10} {:8} {:>3} digits  {}",
            profile.name,
            profile.family.to_string(),
            profile.value_len,
            profile.summary
        );
    }
    Ok(())
}
