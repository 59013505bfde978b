//! Scan command: map out collision instances in any file.

use std::path::Path;

use anyhow::{Context, Result};
use hashquine::core::{
    flip_all, force_all, scan, CollisionDigest, Family, Md5Digest, Side, BLOCK_SIZE,
};

use super::write_result;

pub fn run(path: &Path, set: Option<Side>, flip: bool, output: Option<&Path>) -> Result<()> {
    let mut data =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let report = scan::<Md5Digest>(&mut data).context("scanning")?;
    if report.is_empty() {
        if set.is_some() || flip {
            tracing::warn!("nothing to act on: no instances recognized");
        }
        println!("No collision instances found ({} bytes scanned).", data.len());
        return Ok(());
    }

    for hit in &report.hits {
        println!(
            "block {:5} @ {:#8x}: {} side {}",
            hit.index,
            hit.index * BLOCK_SIZE,
            hit.family,
            hit.side
        );
    }
    println!(
        "{} instances: {} fastcoll, {} unicoll",
        report.len(),
        report.count_of(Family::Fast),
        report.count_of(Family::Uni)
    );
    if let Some(header_len) = report.suggested_header_len() {
        println!("suggested header length: {header_len} bytes ({header_len:#x})");
        println!(
            "suggested header md5: {}",
            Md5Digest::digest(&data[..header_len]).to_hex()
        );
    }
    println!("file md5: {}", Md5Digest::digest(&data).to_hex());

    match (set, flip) {
        (Some(side), _) => {
            let changed = force_all::<Md5Digest>(&mut data, &report, side)
                .context("forcing instances")?;
            println!("Set {} of {} instances to side {side}.", changed, report.len());
            write_result(path, output, &data)?;
        }
        (None, true) => {
            let flipped =
                flip_all::<Md5Digest>(&mut data, &report).context("flipping instances")?;
            println!("Flipped {flipped} instances.");
            write_result(path, output, &data)?;
        }
        (None, false) => {}
    }
    Ok(())
}
