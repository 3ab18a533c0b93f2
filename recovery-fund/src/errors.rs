//! Error table of the recovery fund controller.
//!
//! Codes live in their own 4xx space and are shared by several failures;
//! the message text after the code tells them apart.

pub const ERR_UNAUTHORIZED: &str = "401: unauthorized";

pub const ERR_INVALID_MIN_DONATION: &str = "402: minimum donation must be positive";
pub const ERR_INVALID_ACTION: &str = "402: action must be 1 to 50 ascii characters";

pub const ERR_INVALID_WITHDRAWAL_LIMIT: &str = "403: withdrawal limit must be positive";
pub const ERR_INVALID_REQUIRED_SIGNATURES: &str = "403: required signatures must be positive";
pub const ERR_DUPLICATE_SIGNER: &str = "403: signer already registered";
pub const ERR_ADMIN_UNCHANGED: &str = "403: address is already the admin";
pub const ERR_TOO_MANY_PARAMS: &str = "403: too many parameters";
pub const ERR_ALREADY_SIGNED: &str = "403: transaction already signed";

pub const ERR_BELOW_MINIMUM: &str = "404: donation below minimum";
pub const ERR_SIGNER_NOT_FOUND: &str = "404: signer not found";
pub const ERR_ZERO_ADDRESS: &str = "404: zero address";
pub const ERR_TRANSACTION_NOT_FOUND: &str = "404: transaction not found";

pub const ERR_EXCEEDS_LIMIT: &str = "405: amount exceeds withdrawal limit";
