//! Pure predicates behind the module guards. No VM access, no storage.

/// Non-empty, at most `max_len` bytes, ASCII only.
pub fn is_bounded_ascii(bytes: &[u8], max_len: usize) -> bool {
    !bytes.is_empty() && bytes.len() <= max_len && bytes.is_ascii()
}

pub fn is_within_bound(len: usize, max_len: usize) -> bool {
    len <= max_len
}

/// The all-zero address is reserved and never a valid admin or recipient.
pub fn is_zero_address(address: &[u8; 32]) -> bool {
    address.iter().all(|byte| *byte == 0)
}
