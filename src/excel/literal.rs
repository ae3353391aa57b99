//! Integer literal parsing for module ID cells
//!
//! Cells hold IDs written the way a C or Python programmer would: `0x02`,
//! `0b10`, `0o2`, `2`, or zero-padded decimal such as `02`.

use std::num::IntErrorKind;

/// Parse an unsigned integer literal, honoring `0x`/`0o`/`0b` base prefixes.
///
/// Surrounding whitespace is ignored. Single underscores may separate digits
/// (and may follow a base prefix). Signs are rejected.
pub fn parse_int_literal(text: &str) -> Result<u32, String> {
    let literal = text.trim();
    if literal.is_empty() {
        return Err("empty integer literal".to_string());
    }

    let (radix, digits) = split_radix(literal);

    // Python-style: an underscore is allowed right after the base prefix
    let digits = if radix != 10 {
        digits.strip_prefix('_').unwrap_or(digits)
    } else {
        digits
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(format!("invalid integer literal '{}'", literal));
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    u32::from_str_radix(&cleaned, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => format!("integer literal '{}' is too large", literal),
        _ => format!("invalid integer literal '{}'", literal),
    })
}

fn split_radix(literal: &str) -> (u32, &str) {
    match literal.get(..2) {
        Some("0x") | Some("0X") => (16, &literal[2..]),
        Some("0o") | Some("0O") => (8, &literal[2..]),
        Some("0b") | Some("0B") => (2, &literal[2..]),
        _ => (10, literal),
    }
}
