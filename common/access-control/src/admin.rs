multiversx_sc::imports!();

use crate::validation;

/// Single-admin control plane. The admin is seeded by the contract's `init`.
#[multiversx_sc::module]
pub trait AdminModule {
    /// Returns the caller when it is the current admin, signals `err` otherwise.
    fn require_admin(&self, err: &'static str) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), err);
        caller
    }

    fn require_non_zero_address(&self, address: &ManagedAddress, err: &'static str) {
        require!(
            !validation::is_zero_address(&address.to_byte_array()),
            err
        );
    }

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;
}
