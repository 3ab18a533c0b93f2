#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;

use errors::*;
use relief_access::{admin, bounds};
use types::{AuditEntry, DonationRecord, Recipient};

// ============================================================
// Constants
// ============================================================

/// Default lower donation bound, in the smallest EGLD denomination
const DEFAULT_MIN_DONATION: u64 = 1;

/// Default upper donation bound
const DEFAULT_MAX_DONATION: u64 = 1_000_000_000;

/// Refund window: 7 days in seconds, counted from each donation's own timestamp
const DEFAULT_REFUND_WINDOW: u64 = 604_800;

/// Audit event names: 1 to 64 ASCII characters
const MAX_AUDIT_EVENT_LEN: usize = 64;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait DisasterRelief: admin::AdminModule + bounds::BoundsModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let deployer = self.blockchain().get_caller();
        self.admin().set(&deployer);
        self.min_donation().set(BigUint::from(DEFAULT_MIN_DONATION));
        self.max_donation().set(BigUint::from(DEFAULT_MAX_DONATION));
        self.refund_window().set(DEFAULT_REFUND_WINDOW);
        self.total_funds().set(BigUint::zero());
        self.paused().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setAdmin
    // ========================================================

    #[endpoint(setAdmin)]
    fn set_admin(&self, new_admin: ManagedAddress) -> ManagedAddress {
        let previous = self.require_admin(ERR_UNAUTHORIZED);
        require!(new_admin != previous, ERR_ADMIN_UNCHANGED);
        self.require_non_zero_address(&new_admin, ERR_UNAUTHORIZED);

        self.admin().set(&new_admin);
        self.admin_changed_event(&previous, &new_admin);

        new_admin
    }

    // ========================================================
    // ENDPOINT: donate
    // The attached EGLD is the donation. Paused contracts and
    // out-of-bounds amounts share the same rejection.
    // ========================================================

    #[endpoint(donate)]
    #[payable("EGLD")]
    fn donate(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        require!(!self.paused().get(), ERR_DONATION_OUT_OF_BOUNDS);
        require!(
            amount >= self.min_donation().get() && amount <= self.max_donation().get(),
            ERR_DONATION_OUT_OF_BOUNDS
        );

        let timestamp = self.blockchain().get_block_timestamp();
        let cumulative = self.donations(&caller).update(|total| {
            *total += &amount;
            total.clone()
        });
        self.total_funds().update(|funds| *funds += &amount);
        self.donation_history(&caller)
            .push(&DonationRecord::new(amount.clone(), timestamp));

        self.donation_event(&caller, &amount, &cumulative);

        cumulative
    }

    // ========================================================
    // ENDPOINT: setDonationLimits
    // Unauthorized callers get the same error as bad bounds.
    // ========================================================

    #[endpoint(setDonationLimits)]
    fn set_donation_limits(&self, min: BigUint, max: BigUint) -> bool {
        self.require_admin(ERR_INVALID_LIMITS);
        require!(min < max, ERR_INVALID_LIMITS);

        self.min_donation().set(&min);
        self.max_donation().set(&max);
        self.donation_limits_event(&min, &max);

        true
    }

    // ========================================================
    // Recipient management
    // ========================================================

    #[endpoint(addRecipient)]
    fn add_recipient(&self, recipient: ManagedAddress, allocation: BigUint) -> bool {
        self.require_admin(ERR_RECIPIENT_EXISTS);
        self.require_non_zero_address(&recipient, ERR_INVALID_RECIPIENT);
        require!(
            self.recipients(&recipient).is_empty(),
            ERR_RECIPIENT_EXISTS
        );
        self.require_positive(&allocation, ERR_RECIPIENT_EXISTS);

        self.recipients(&recipient)
            .set(Recipient::new(allocation.clone()));
        self.recipient_set().insert(recipient.clone());

        self.recipient_added_event(&recipient, &allocation);

        true
    }

    #[endpoint(updateRecipientAllocation)]
    fn update_recipient_allocation(&self, recipient: ManagedAddress, allocation: BigUint) -> bool {
        self.require_admin(ERR_UNAUTHORIZED);
        require!(
            !self.recipients(&recipient).is_empty(),
            ERR_RECIPIENT_NOT_FOUND
        );
        self.require_positive(&allocation, ERR_INVALID_AMOUNT);

        self.recipients(&recipient)
            .update(|record| record.allocation = allocation.clone());

        self.allocation_updated_event(&recipient, &allocation);

        true
    }

    /// Two-phase removal: the caller has to pass `confirm = true`; nothing
    /// is staged between calls.
    #[endpoint(confirmRemoveRecipient)]
    fn confirm_remove_recipient(&self, recipient: ManagedAddress, confirm: bool) -> bool {
        self.require_admin(ERR_UNAUTHORIZED);
        require!(
            !self.recipients(&recipient).is_empty(),
            ERR_RECIPIENT_NOT_FOUND
        );
        require!(confirm, ERR_CONFIRMATION_REQUIRED);

        self.recipients(&recipient).clear();
        self.recipient_set().swap_remove(&recipient);

        self.recipient_removed_event(&recipient);

        true
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Recipients draw against their allocation; the treasury
    // must actually hold the amount.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        require!(
            !self.recipients(&caller).is_empty(),
            ERR_WITHDRAWAL_DENIED
        );
        require!(!self.paused().get(), ERR_WITHDRAWAL_DENIED);
        self.require_positive(&amount, ERR_INVALID_AMOUNT);

        let mut recipient = self.recipients(&caller).get();
        require!(recipient.can_withdraw(&amount), ERR_WITHDRAWAL_DENIED);
        require!(amount <= self.total_funds().get(), ERR_WITHDRAWAL_DENIED);

        recipient.withdrawn += &amount;
        self.recipients(&caller).set(&recipient);
        self.total_funds().update(|funds| *funds -= &amount);

        self.send().direct_egld(&caller, &amount);
        self.withdrawal_event(&caller, &amount, &recipient.withdrawn);

        recipient.remaining()
    }

    // ========================================================
    // ENDPOINT: requestRefund
    // Only donations still inside their own refund window can be
    // refunded; older donations stay with the treasury. Refunds
    // are drawn from the oldest eligible donation first. Allowed
    // while paused so funds can be recovered after an emergency
    // shutdown.
    // ========================================================

    #[endpoint(requestRefund)]
    fn request_refund(&self, amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.require_positive(&amount, ERR_INVALID_AMOUNT);

        let donated = self.donations(&caller).get();
        let refunded = self.refunded(&caller).get();
        require!(
            &refunded + &amount <= donated,
            ERR_REFUND_EXCEEDS_DONATION
        );

        let now = self.blockchain().get_block_timestamp();
        let window = self.refund_window().get();
        let refundable = self.refundable_amount(&caller, now, window);
        require!(amount <= refundable, ERR_REFUND_WINDOW_CLOSED);
        require!(amount <= self.total_funds().get(), ERR_INSUFFICIENT_FUNDS);

        self.draw_refund(&caller, &amount, now, window);
        let refunded_total = self.refunded(&caller).update(|total| {
            *total += &amount;
            total.clone()
        });
        self.total_funds().update(|funds| *funds -= &amount);

        self.send().direct_egld(&caller, &amount);
        self.refund_event(&caller, &amount, &refunded_total);

        refundable - amount
    }

    #[endpoint(setRefundWindow)]
    fn set_refund_window(&self, seconds: u64) -> u64 {
        self.require_admin(ERR_UNAUTHORIZED);
        require!(seconds > 0, ERR_INVALID_LIMITS);

        self.refund_window().set(seconds);
        self.refund_window_event(seconds);

        seconds
    }

    // ========================================================
    // Pausing
    // ========================================================

    /// Setting the flag to its current value is rejected rather than
    /// treated as a no-op.
    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) -> bool {
        let admin = self.require_admin(ERR_UNAUTHORIZED);
        require!(
            self.paused().get() != paused,
            ERR_PAUSE_STATE_UNCHANGED
        );

        self.paused().set(paused);
        self.pause_changed_event(&admin, paused);

        paused
    }

    #[endpoint(emergencyShutdown)]
    fn emergency_shutdown(&self) -> bool {
        let admin = self.require_admin(ERR_UNAUTHORIZED);

        self.paused().set(true);
        self.emergency_shutdown_event(&admin, self.blockchain().get_block_timestamp());

        true
    }

    // ========================================================
    // ENDPOINT: logAudit
    // Public audit trail: any caller may append a short ASCII
    // event name.
    // ========================================================

    #[endpoint(logAudit)]
    fn log_audit(&self, event: ManagedBuffer, subject: ManagedAddress) -> u64 {
        self.require_bounded_ascii(&event, MAX_AUDIT_EVENT_LEN, ERR_INVALID_AUDIT_EVENT);

        let caller = self.blockchain().get_caller();
        let entry = AuditEntry {
            event: event.clone(),
            subject: subject.clone(),
            logged_by: caller.clone(),
            timestamp: self.blockchain().get_block_timestamp(),
        };
        let index = self.audit_log().push(&entry);

        self.audit_event(&subject, &caller, &event);

        index as u64
    }

    // ========================================================
    // INTERNAL: refund bookkeeping
    // ========================================================

    fn refundable_amount(&self, donor: &ManagedAddress, now: u64, window: u64) -> BigUint {
        let mut refundable = BigUint::zero();
        for record in self.donation_history(donor).iter() {
            if record.in_refund_window(now, window) {
                refundable += record.unrefunded();
            }
        }
        refundable
    }

    /// Marks `amount` as refunded against in-window donations, oldest first.
    /// Callers check `amount <= refundable_amount(..)` beforehand.
    fn draw_refund(&self, donor: &ManagedAddress, amount: &BigUint, now: u64, window: u64) {
        let mut history = self.donation_history(donor);
        let mut outstanding = amount.clone();

        for index in 1..=history.len() {
            if outstanding == 0u64 {
                break;
            }
            let mut record = history.get(index);
            if !record.in_refund_window(now, window) {
                continue;
            }
            let available = record.unrefunded();
            if available == 0u64 {
                continue;
            }
            let taken = if outstanding < available {
                outstanding.clone()
            } else {
                available
            };
            record.refunded += &taken;
            outstanding -= &taken;
            history.set(index, &record);
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getDonation)]
    fn get_donation(&self, donor: &ManagedAddress) -> BigUint {
        self.donations(donor).get()
    }

    #[view(getDonationHistory)]
    fn get_donation_history(
        &self,
        donor: &ManagedAddress,
    ) -> MultiValueEncoded<DonationRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for record in self.donation_history(donor).iter() {
            result.push(record);
        }
        result
    }

    #[view(getDonationLimits)]
    fn get_donation_limits(&self) -> MultiValue2<BigUint, BigUint> {
        (self.min_donation().get(), self.max_donation().get()).into()
    }

    /// `None` for addresses that are not recipients, so a zero allocation
    /// is never confused with a missing one.
    #[view(getRecipientAllocation)]
    fn get_recipient_allocation(&self, recipient: &ManagedAddress) -> Option<BigUint> {
        if self.recipients(recipient).is_empty() {
            return None;
        }
        Some(self.recipients(recipient).get().allocation)
    }

    #[view(getRecipient)]
    fn get_recipient(&self, recipient: &ManagedAddress) -> Option<Recipient<Self::Api>> {
        if self.recipients(recipient).is_empty() {
            return None;
        }
        Some(self.recipients(recipient).get())
    }

    #[view(getRecipientCount)]
    fn get_recipient_count(&self) -> u64 {
        self.recipient_set().len() as u64
    }

    #[view(getAuditLog)]
    fn get_audit_log(&self, from: u64, count: u64) -> MultiValueEncoded<AuditEntry<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.audit_log().len() as u64;
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for index in start..=end {
            result.push(self.audit_log().get(index as usize));
        }
        result
    }

    #[view(getAuditLogLength)]
    fn get_audit_log_length(&self) -> u64 {
        self.audit_log().len() as u64
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

    #[event("donation")]
    fn donation_event(
        &self,
        #[indexed] donor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        cumulative: &BigUint,
    );

    #[event("donationLimits")]
    fn donation_limits_event(&self, #[indexed] min: &BigUint, #[indexed] max: &BigUint);

    #[event("recipientAdded")]
    fn recipient_added_event(&self, #[indexed] recipient: &ManagedAddress, allocation: &BigUint);

    #[event("allocationUpdated")]
    fn allocation_updated_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        allocation: &BigUint,
    );

    #[event("recipientRemoved")]
    fn recipient_removed_event(&self, #[indexed] recipient: &ManagedAddress);

    #[event("withdraw")]
    fn withdrawal_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
        withdrawn: &BigUint,
    );

    #[event("refund")]
    fn refund_event(
        &self,
        #[indexed] donor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        refunded: &BigUint,
    );

    #[event("refundWindow")]
    fn refund_window_event(&self, #[indexed] seconds: u64);

    #[event("pauseChanged")]
    fn pause_changed_event(&self, #[indexed] admin: &ManagedAddress, #[indexed] paused: bool);

    #[event("emergencyShutdown")]
    fn emergency_shutdown_event(&self, #[indexed] admin: &ManagedAddress, #[indexed] timestamp: u64);

    #[event("audit")]
    fn audit_event(
        &self,
        #[indexed] subject: &ManagedAddress,
        #[indexed] logged_by: &ManagedAddress,
        event: &ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("minDonation")]
    fn min_donation(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("maxDonation")]
    fn max_donation(&self) -> SingleValueMapper<BigUint>;

    #[view(getRefundWindow)]
    #[storage_mapper("refundWindow")]
    fn refund_window(&self) -> SingleValueMapper<u64>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    // ── Fund state ──

    #[view(getTotalFunds)]
    #[storage_mapper("totalFunds")]
    fn total_funds(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("donations")]
    fn donations(&self, donor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getRefunded)]
    #[storage_mapper("refunded")]
    fn refunded(&self, donor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("donationHistory")]
    fn donation_history(&self, donor: &ManagedAddress) -> VecMapper<DonationRecord<Self::Api>>;

    // ── Recipients ──

    #[storage_mapper("recipients")]
    fn recipients(&self, recipient: &ManagedAddress) -> SingleValueMapper<Recipient<Self::Api>>;

    #[storage_mapper("recipientSet")]
    fn recipient_set(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Audit ──

    #[storage_mapper("auditLog")]
    fn audit_log(&self) -> VecMapper<AuditEntry<Self::Api>>;
}
