//! Error table of the treasury ledger.
//!
//! Every message starts with the numeric code clients match on. Codes are
//! local to this contract; the recovery fund uses its own numbering.

pub const ERR_UNAUTHORIZED: &str = "1: caller is not authorized";
pub const ERR_INVALID_AMOUNT: &str = "2: invalid amount";
pub const ERR_INVALID_LIMITS: &str = "3: invalid limits";
pub const ERR_RECIPIENT_NOT_FOUND: &str = "4: recipient not found";
pub const ERR_INVALID_RECIPIENT: &str = "5: invalid recipient address";
pub const ERR_ADMIN_UNCHANGED: &str = "6: address is already the admin";
pub const ERR_REFUND_WINDOW_CLOSED: &str = "7: refund window has closed";
pub const ERR_CONFIRMATION_REQUIRED: &str = "8: removal must be confirmed";
pub const ERR_PAUSE_STATE_UNCHANGED: &str = "9: pause state unchanged";
pub const ERR_INVALID_AUDIT_EVENT: &str = "10: audit event must be 1 to 64 ascii characters";

pub const ERR_DONATION_OUT_OF_BOUNDS: &str = "100: donation rejected";
pub const ERR_RECIPIENT_EXISTS: &str = "101: recipient rejected";
pub const ERR_WITHDRAWAL_DENIED: &str = "102: withdrawal denied";
pub const ERR_REFUND_EXCEEDS_DONATION: &str = "103: refund exceeds donation";
pub const ERR_INSUFFICIENT_FUNDS: &str = "104: insufficient funds";
