multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SignerModule {
    fn require_signer(&self, err: &'static str) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.signers().contains(&caller), err);
        caller
    }

    #[view(isSigner)]
    fn is_signer(&self, address: &ManagedAddress) -> bool {
        self.signers().contains(address)
    }

    #[view(getSigners)]
    fn get_signers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for signer in self.signers().iter() {
            result.push(signer);
        }
        result
    }

    #[view(getSignerCount)]
    fn get_signer_count(&self) -> u64 {
        self.signers().len() as u64
    }

    #[storage_mapper("signers")]
    fn signers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
