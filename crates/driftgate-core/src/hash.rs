use xxhash_rust::xxh64::xxh64;

use crate::types::CallableDefinition;

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode a u64 value as a base62 string (11 chars, zero-padded).
fn base62_encode(mut value: u64) -> String {
    if value == 0 {
        return "0".repeat(11);
    }
    let mut result = Vec::with_capacity(11);
    while value > 0 {
        let idx = (value % 62) as usize;
        result.push(BASE62_CHARS[idx]);
        value /= 62;
    }
    // Pad to 11 chars
    while result.len() < 11 {
        result.push(b'0');
    }
    result.reverse();
    String::from_utf8(result).expect("base62 chars are valid UTF-8")
}

/// Compute the structural fingerprint of a callable.
///
/// fingerprint = base62(xxhash64(rendered_signature + body_lines))
///
/// Two callables with equal fingerprints have byte-identical signatures and
/// raw bodies, so a pair can be accepted without detailed comparison. The
/// docstring is deliberately excluded — documentation passes may add one.
pub fn fingerprint(def: &CallableDefinition) -> String {
    let signature = def.render_signature();
    let mut input = String::with_capacity(
        signature.len() + def.body_lines.iter().map(|l| l.len() + 1).sum::<usize>() + 1,
    );
    input.push_str(&signature);
    input.push('\0'); // separator
    for line in &def.body_lines {
        input.push_str(line);
        input.push('\n');
    }

    let hash_value = xxh64(input.as_bytes(), 0);
    base62_encode(hash_value)
}
