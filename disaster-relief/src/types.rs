multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Recipient — allocation and withdrawal bookkeeping
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Recipient<M: ManagedTypeApi> {
    /// Maximum cumulative amount the recipient may withdraw.
    pub allocation: BigUint<M>,
    pub withdrawn: BigUint<M>,
}

impl<M: ManagedTypeApi> Recipient<M> {
    pub fn new(allocation: BigUint<M>) -> Self {
        Recipient {
            allocation,
            withdrawn: BigUint::zero(),
        }
    }

    /// Allocation not yet withdrawn. Zero when the allocation was lowered
    /// below what has already been paid out.
    pub fn remaining(&self) -> BigUint<M> {
        if self.allocation > self.withdrawn {
            &self.allocation - &self.withdrawn
        } else {
            BigUint::zero()
        }
    }

    pub fn can_withdraw(&self, amount: &BigUint<M>) -> bool {
        &self.withdrawn + amount <= self.allocation
    }
}

// ============================================================
// Donation history
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct DonationRecord<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    pub timestamp: u64,
    /// Portion of this donation already refunded; never exceeds `amount`.
    pub refunded: BigUint<M>,
}

impl<M: ManagedTypeApi> DonationRecord<M> {
    pub fn new(amount: BigUint<M>, timestamp: u64) -> Self {
        DonationRecord {
            amount,
            timestamp,
            refunded: BigUint::zero(),
        }
    }

    pub fn unrefunded(&self) -> BigUint<M> {
        &self.amount - &self.refunded
    }

    /// Each donation carries its own window, counted from its own timestamp.
    pub fn in_refund_window(&self, now: u64, window: u64) -> bool {
        now <= self.timestamp.saturating_add(window)
    }
}

// ============================================================
// Audit trail
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct AuditEntry<M: ManagedTypeApi> {
    pub event: ManagedBuffer<M>,
    pub subject: ManagedAddress<M>,
    /// Caller that submitted the entry; the log is open to anyone.
    pub logged_by: ManagedAddress<M>,
    pub timestamp: u64,
}
