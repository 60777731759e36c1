/// Multiply-by-31 string hash with 32-bit wraparound.
///
/// Folds the UTF-16 code units of `text`, which is the same as folding bytes
/// for ASCII identifiers. The empty string hashes to 0.
pub fn hash_code(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

/// Hash of several parts as if they were concatenated, without allocating.
pub fn hash_concat(parts: &[&str]) -> u32 {
    parts
        .iter()
        .flat_map(|p| p.encode_utf16())
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
}
