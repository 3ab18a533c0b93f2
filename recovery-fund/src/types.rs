multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Pending transaction — immutable once proposed
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PendingTransaction<M: ManagedTypeApi> {
    pub action: ManagedBuffer<M>,
    pub params: ManagedVec<M, i64>,
    pub proposer: ManagedAddress<M>,
    pub created_at: u64,
}

// ============================================================
// Transaction status — derived, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum TransactionStatus {
    /// Fewer signatures from current signers than the threshold.
    Pending,
    /// Threshold reached. Execution is left to the signers off-chain.
    Approved,
}
