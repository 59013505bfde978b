//! Shatter command: flip the two-block SHA-1 collision in a PDF.

use std::path::Path;

use anyhow::{bail, Context, Result};
use hashquine::core::{
    shattered, CollisionDigest, Sha1Digest, SHATTERED_HEADER_LEN, SHATTERED_HEADER_SHA1,
};

use super::write_result;

pub fn run(path: &Path, force: bool, output: Option<&Path>) -> Result<()> {
    let mut data =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    if !force {
        if data.len() < SHATTERED_HEADER_LEN {
            bail!(
                "file too short for the pinned header: {} bytes, need {}",
                data.len(),
                SHATTERED_HEADER_LEN
            );
        }
        let header = Sha1Digest::digest(&data[..SHATTERED_HEADER_LEN]).to_hex();
        if header != SHATTERED_HEADER_SHA1 {
            bail!(
                "header SHA-1 mismatch: expected {SHATTERED_HEADER_SHA1}, got {header}; \
                 is this a Shattered-style PDF?"
            );
        }
    }

    let digest = Sha1Digest::digest(&data).to_hex();
    shattered::flip::<Sha1Digest>(&mut data).context("flipping")?;
    println!("Flipped the embedded rendering.");
    println!("file sha1: {digest} (unchanged)");

    write_result(path, output, &data)
}
