//! Constant-time digest comparison.

use subtle::ConstantTimeEq;

/// Compare two byte strings without leaking where they first differ.
///
/// Inputs of different length are never equal. Only the length check
/// is data-dependent, and digest lengths are public.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_slices_match() {
        assert!(constant_time_eq(b"digest", b"digest"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn different_slices_do_not_match() {
        assert!(!constant_time_eq(b"digest", b"digesT"));
        assert!(!constant_time_eq(b"Digest", b"digest"));
    }

    #[test]
    fn different_lengths_do_not_match() {
        assert!(!constant_time_eq(b"digest", b"digest!"));
        assert!(!constant_time_eq(b"", b"x"));
    }
}
