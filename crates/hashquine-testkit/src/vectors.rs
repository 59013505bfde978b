//! Pinned real-collision vectors.
//!
//! The published FastColl pair is the one place the engine can be
//! exercised against real MD5 inside a test. Both sides, their shared
//! digest, and a suffixed variant are pinned here so every crate checks
//! against the same bytes.

use hashquine_core::{CollisionDigest, Family, Md5Digest};

/// A pinned collision artifact.
#[derive(Debug, Clone)]
pub struct CollisionVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Collision family of the pair.
    pub family: Family,
    /// Hex of the colliding span, side A.
    pub side_a_hex: &'static str,
    /// Hex of the colliding span, side B.
    pub side_b_hex: &'static str,
    /// Bytes appended to both sides after the colliding span.
    pub suffix: &'static [u8],
    /// Shared MD5 of both full messages (hex).
    pub expected_md5: &'static str,
}

/// The published 128-byte FastColl pair, side A.
pub const WANG_A_HEX: &str = concat!(
    "d131dd02c5e6eec4693d9a0698aff95c2fcab50712467eab4004583eb8fb7f89",
    "55ad340609f4b30283e4888325f1415a085125e8f7cdc99fd91dbd7280373c5b",
    "d8823e3156348f5bae6dacd436c919c6dd53e23487da03fd02396306d248cda0",
    "e99f33420f577ee8ce54b67080280d1ec69821bcb6a8839396f965ab6ff72a70",
);

/// The published 128-byte FastColl pair, side B.
pub const WANG_B_HEX: &str = concat!(
    "d131dd02c5e6eec4693d9a0698aff95c2fcab58712467eab4004583eb8fb7f89",
    "55ad340609f4b30283e488832571415a085125e8f7cdc99fd91dbdf280373c5b",
    "d8823e3156348f5bae6dacd436c919c6dd53e2b487da03fd02396306d248cda0",
    "e99f33420f577ee8ce54b67080a80d1ec69821bcb6a8839396f9652b6ff72a70",
);

/// Get all pinned collision vectors.
pub fn all_vectors() -> Vec<CollisionVector> {
    vec![
        CollisionVector {
            name: "published fastcoll pair",
            family: Family::Fast,
            side_a_hex: WANG_A_HEX,
            side_b_hex: WANG_B_HEX,
            suffix: b"",
            expected_md5: "79054025255fb1a26e4bc422aef54eb4",
        },
        // Colliding prefixes survive any common suffix, which is the
        // property every hashquine file is built on.
        CollisionVector {
            name: "fastcoll pair with a common tail",
            family: Family::Fast,
            side_a_hex: WANG_A_HEX,
            side_b_hex: WANG_B_HEX,
            suffix: b"The quick brown fox jumps over the lazy dog! 0123456789.",
            expected_md5: "47ce65c1eceff57f1122e5953ef01f6d",
        },
    ]
}

/// Materialize both full messages of a vector.
pub fn vector_bytes(vector: &CollisionVector) -> (Vec<u8>, Vec<u8>) {
    let mut a = hex::decode(vector.side_a_hex).expect("vector hex is well formed");
    let mut b = hex::decode(vector.side_b_hex).expect("vector hex is well formed");
    a.extend_from_slice(vector.suffix);
    b.extend_from_slice(vector.suffix);
    (a, b)
}

/// Verify every vector's sides share its pinned digest.
///
/// Returns `(name, matches, actual side-A digest)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|vector| {
            let (a, b) = vector_bytes(vector);
            let digest_a = Md5Digest::digest(&a).to_hex();
            let digest_b = Md5Digest::digest(&b).to_hex();
            let matches = digest_a == vector.expected_md5 && digest_b == vector.expected_md5;
            (vector.name.to_string(), matches, digest_a)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashquine_core::{classify, flip_side, Side};

    #[test]
    fn test_all_vectors_verify() {
        for (name, matches, digest) in verify_all_vectors() {
            assert!(matches, "vector '{name}' hashed to {digest}");
        }
    }

    #[test]
    fn test_sides_differ_but_collide() {
        for vector in all_vectors() {
            let (a, b) = vector_bytes(&vector);
            assert_ne!(a, b, "vector '{}' sides must differ", vector.name);
            assert_eq!(
                Md5Digest::digest(&a),
                Md5Digest::digest(&b),
                "vector '{}' sides must collide",
                vector.name
            );
        }
    }

    #[test]
    fn test_diffs_sit_on_the_family_offsets() {
        for vector in all_vectors() {
            let (a, b) = vector_bytes(&vector);
            let diffs: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();
            assert_eq!(diffs, vector.family.diff_offsets(), "vector '{}'", vector.name);
        }
    }

    #[test]
    fn test_vectors_probe_as_instances() {
        for vector in all_vectors() {
            let (mut a, mut b) = vector_bytes(&vector);
            assert_eq!(
                classify::<Md5Digest>(&mut a, 0).unwrap(),
                Some((vector.family, Side::A))
            );
            assert_eq!(
                classify::<Md5Digest>(&mut b, 0).unwrap(),
                Some((vector.family, Side::B))
            );
        }
    }

    #[test]
    fn test_flip_reproduces_the_published_partner() {
        for vector in all_vectors() {
            let (a, b) = vector_bytes(&vector);
            let mut data = a.clone();
            flip_side::<Md5Digest>(&mut data, vector.family, 0).unwrap();
            assert_eq!(data, b, "vector '{}' A flips to B", vector.name);
            flip_side::<Md5Digest>(&mut data, vector.family, 0).unwrap();
            assert_eq!(data, a, "vector '{}' B flips back to A", vector.name);
        }
    }
}
