multiversx_sc::imports!();

use crate::{validation, ERR_BOUND_TOO_LARGE, MAX_CHECKED_STRING_LEN};

#[multiversx_sc::module]
pub trait BoundsModule {
    fn require_positive(&self, amount: &BigUint, err: &'static str) {
        require!(*amount > 0u64, err);
    }

    /// Non-empty ASCII of at most `max_len` bytes.
    ///
    /// `max_len` itself is capped at `MAX_CHECKED_STRING_LEN`; a larger bound
    /// fails with `ERR_BOUND_TOO_LARGE` whatever the input.
    fn require_bounded_ascii(&self, value: &ManagedBuffer, max_len: usize, err: &'static str) {
        require!(max_len <= MAX_CHECKED_STRING_LEN, ERR_BOUND_TOO_LARGE);

        let len = value.len();
        require!(len > 0 && len <= max_len, err);

        let mut scratch = [0u8; MAX_CHECKED_STRING_LEN];
        let bytes = value.load_to_byte_array(&mut scratch);
        require!(validation::is_bounded_ascii(bytes, max_len), err);
    }

    fn require_bounded_list(&self, len: usize, max_len: usize, err: &'static str) {
        require!(validation::is_within_bound(len, max_len), err);
    }
}
