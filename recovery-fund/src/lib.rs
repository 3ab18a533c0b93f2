#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;

use errors::*;
use relief_access::{admin, bounds, signers};
use types::{PendingTransaction, TransactionStatus};

// ============================================================
// Constants
// ============================================================

const DEFAULT_MIN_DONATION: u64 = 10;

/// Ceiling for a single withdrawal
const DEFAULT_WITHDRAWAL_LIMIT: u64 = 1_000;

const DEFAULT_REQUIRED_SIGNATURES: u32 = 3;

/// Proposal action names: 1 to 50 ASCII characters
const MAX_ACTION_LEN: usize = 50;

const MAX_PARAMS: usize = 10;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait RecoveryFund: admin::AdminModule + signers::SignerModule + bounds::BoundsModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let deployer = self.blockchain().get_caller();
        self.admin().set(&deployer);
        self.min_donation().set(BigUint::from(DEFAULT_MIN_DONATION));
        self.withdrawal_limit()
            .set(BigUint::from(DEFAULT_WITHDRAWAL_LIMIT));
        self.required_signatures().set(DEFAULT_REQUIRED_SIGNATURES);
        self.tx_nonce().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // Admin transfer
    // Two entry points with different error reporting: setAdmin
    // folds every rejection into 401, changeAdmin reports the
    // precise reason.
    // ========================================================

    #[endpoint(setAdmin)]
    fn set_admin(&self, new_admin: ManagedAddress) -> ManagedAddress {
        let previous = self.require_admin(ERR_UNAUTHORIZED);
        require!(new_admin != previous, ERR_UNAUTHORIZED);
        self.require_non_zero_address(&new_admin, ERR_UNAUTHORIZED);

        self.admin().set(&new_admin);
        self.admin_changed_event(&previous, &new_admin);

        new_admin
    }

    #[endpoint(changeAdmin)]
    fn change_admin(&self, new_admin: ManagedAddress) -> bool {
        let previous = self.require_admin(ERR_UNAUTHORIZED);
        require!(new_admin != previous, ERR_ADMIN_UNCHANGED);
        self.require_non_zero_address(&new_admin, ERR_ZERO_ADDRESS);

        self.admin().set(&new_admin);
        self.admin_changed_event(&previous, &new_admin);

        true
    }

    // ========================================================
    // Limits
    // ========================================================

    #[endpoint(setMinDonation)]
    fn set_min_donation(&self, amount: BigUint) -> BigUint {
        self.require_admin(ERR_UNAUTHORIZED);
        self.require_positive(&amount, ERR_INVALID_MIN_DONATION);

        self.min_donation().set(&amount);
        self.min_donation_event(&amount);

        amount
    }

    #[endpoint(setWithdrawalLimit)]
    fn set_withdrawal_limit(&self, amount: BigUint) -> BigUint {
        self.require_admin(ERR_UNAUTHORIZED);
        self.require_positive(&amount, ERR_INVALID_WITHDRAWAL_LIMIT);

        self.withdrawal_limit().set(&amount);
        self.withdrawal_limit_event(&amount);

        amount
    }

    #[view(validateDonation)]
    fn validate_donation(&self, amount: BigUint) -> bool {
        require!(amount >= self.min_donation().get(), ERR_BELOW_MINIMUM);
        true
    }

    #[view(validateWithdrawal)]
    fn validate_withdrawal(&self, amount: BigUint) -> bool {
        require!(amount <= self.withdrawal_limit().get(), ERR_EXCEEDS_LIMIT);
        true
    }

    // ========================================================
    // Signer set
    // ========================================================

    #[endpoint(addSigner)]
    fn add_signer(&self, signer: ManagedAddress) -> bool {
        self.require_admin(ERR_UNAUTHORIZED);
        self.require_non_zero_address(&signer, ERR_ZERO_ADDRESS);
        require!(!self.signers().contains(&signer), ERR_DUPLICATE_SIGNER);

        self.signers().insert(signer.clone());
        self.signer_added_event(&signer);

        true
    }

    #[endpoint(removeSigner)]
    fn remove_signer(&self, signer: ManagedAddress) -> bool {
        self.require_admin(ERR_UNAUTHORIZED);
        require!(self.signers().contains(&signer), ERR_SIGNER_NOT_FOUND);

        self.signers().swap_remove(&signer);
        self.signer_removed_event(&signer);

        true
    }

    #[endpoint(setRequiredSignatures)]
    fn set_required_signatures(&self, required: u32) -> bool {
        self.require_admin(ERR_UNAUTHORIZED);
        require!(required > 0, ERR_INVALID_REQUIRED_SIGNATURES);

        self.required_signatures().set(required);
        self.required_signatures_event(required);

        true
    }

    // ========================================================
    // ENDPOINT: proposeTransaction
    // Stores the proposal at the current nonce, then advances
    // the nonce. Rejected calls never consume a nonce.
    // ========================================================

    #[endpoint(proposeTransaction)]
    fn propose_transaction(&self, action: ManagedBuffer, params: ManagedVec<i64>) -> u64 {
        let caller = self.require_signer(ERR_UNAUTHORIZED);
        self.require_bounded_ascii(&action, MAX_ACTION_LEN, ERR_INVALID_ACTION);
        self.require_bounded_list(params.len(), MAX_PARAMS, ERR_TOO_MANY_PARAMS);

        let nonce = self.tx_nonce().get();
        let timestamp = self.blockchain().get_block_timestamp();
        let transaction = PendingTransaction {
            action,
            params,
            proposer: caller.clone(),
            created_at: timestamp,
        };

        self.pending_transactions(nonce).set(&transaction);
        self.tx_nonce().set(nonce + 1);

        self.transaction_proposed_event(nonce, &caller, &transaction.action);

        nonce
    }

    // ========================================================
    // ENDPOINT: signTransaction
    // Signatures are collected next to the proposal; the
    // proposal record itself never changes.
    // ========================================================

    #[endpoint(signTransaction)]
    fn sign_transaction(&self, nonce: u64) -> u64 {
        let caller = self.require_signer(ERR_UNAUTHORIZED);
        require!(
            !self.pending_transactions(nonce).is_empty(),
            ERR_TRANSACTION_NOT_FOUND
        );
        require!(
            !self.signatures(nonce).contains(&caller),
            ERR_ALREADY_SIGNED
        );

        self.signatures(nonce).insert(caller.clone());
        let count = self.signatures(nonce).len() as u64;

        self.transaction_signed_event(nonce, &caller, count);

        count
    }

    // ========================================================
    // INTERNAL: approval counting
    // Signers removed after signing no longer count.
    // ========================================================

    fn valid_signature_count(&self, nonce: u64) -> u64 {
        let current_signers = self.signers();
        self.signatures(nonce)
            .iter()
            .filter(|signer| current_signers.contains(signer))
            .count() as u64
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getMinDonation)]
    fn get_min_donation(&self) -> BigUint {
        self.min_donation().get()
    }

    #[view(getWithdrawalLimit)]
    fn get_withdrawal_limit(&self) -> BigUint {
        self.withdrawal_limit().get()
    }

    #[view(getRequiredSignatures)]
    fn get_required_signatures(&self) -> u32 {
        self.required_signatures().get()
    }

    #[view(getPendingTransaction)]
    fn get_pending_transaction(&self, nonce: u64) -> Option<PendingTransaction<Self::Api>> {
        if self.pending_transactions(nonce).is_empty() {
            return None;
        }
        Some(self.pending_transactions(nonce).get())
    }

    #[view(getSignatureCount)]
    fn get_signature_count(&self, nonce: u64) -> u64 {
        self.signatures(nonce).len() as u64
    }

    #[view(hasSigned)]
    fn has_signed(&self, nonce: u64, signer: &ManagedAddress) -> bool {
        self.signatures(nonce).contains(signer)
    }

    #[view(getTransactionStatus)]
    fn get_transaction_status(&self, nonce: u64) -> Option<TransactionStatus> {
        if self.pending_transactions(nonce).is_empty() {
            return None;
        }
        let required = self.required_signatures().get() as u64;
        if self.valid_signature_count(nonce) >= required {
            Some(TransactionStatus::Approved)
        } else {
            Some(TransactionStatus::Pending)
        }
    }

    #[view(isTransactionApproved)]
    fn is_transaction_approved(&self, nonce: u64) -> bool {
        self.get_transaction_status(nonce) == Some(TransactionStatus::Approved)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("adminChanged")]
    fn admin_changed_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] new_admin: &ManagedAddress,
    );

    #[event("minDonation")]
    fn min_donation_event(&self, #[indexed] amount: &BigUint);

    #[event("withdrawalLimit")]
    fn withdrawal_limit_event(&self, #[indexed] amount: &BigUint);

    #[event("signerAdded")]
    fn signer_added_event(&self, #[indexed] signer: &ManagedAddress);

    #[event("signerRemoved")]
    fn signer_removed_event(&self, #[indexed] signer: &ManagedAddress);

    #[event("requiredSignatures")]
    fn required_signatures_event(&self, #[indexed] required: u32);

    #[event("transactionProposed")]
    fn transaction_proposed_event(
        &self,
        #[indexed] nonce: u64,
        #[indexed] proposer: &ManagedAddress,
        action: &ManagedBuffer,
    );

    #[event("transactionSigned")]
    fn transaction_signed_event(
        &self,
        #[indexed] nonce: u64,
        #[indexed] signer: &ManagedAddress,
        #[indexed] signature_count: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("minDonation")]
    fn min_donation(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("withdrawalLimit")]
    fn withdrawal_limit(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("requiredSignatures")]
    fn required_signatures(&self) -> SingleValueMapper<u32>;

    // ── Proposals ──

    /// Next nonce to assign; equals the number of proposals made.
    #[view(getTxNonce)]
    #[storage_mapper("txNonce")]
    fn tx_nonce(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pendingTransactions")]
    fn pending_transactions(
        &self,
        nonce: u64,
    ) -> SingleValueMapper<PendingTransaction<Self::Api>>;

    #[storage_mapper("signatures")]
    fn signatures(&self, nonce: u64) -> UnorderedSetMapper<ManagedAddress>;
}
