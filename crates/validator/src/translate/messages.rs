//! Built-in default message set.
//!
//! One fixed locale (Turkish), covering the seven standard message keys.
//! The table is a read-only constant baked in at build time; each
//! [`Translator`](super::Translator) parses its own copy at construction
//! and never mutates shared state.

use crate::foundation::keys;

/// The default message templates, keyed by message key.
pub const DEFAULT_MESSAGES: [(&str, &str); 7] = [
    (keys::REQUIRED, "{{Field}} alanı zorunludur"),
    (keys::EMAIL, "{{Field}} geçerli bir email adresi olmalıdır"),
    (keys::MIN_LENGTH, "{{Field}} en az {{Min}} karakter olmalıdır"),
    (keys::MAX_LENGTH, "{{Field}} en fazla {{Max}} karakter olmalıdır"),
    (keys::BETWEEN, "{{Field}} {{Min}} ile {{Max}} arasında olmalıdır"),
    (
        keys::DATE_GREATER_THAN,
        "{{Field}} {{Min}} tarihinden sonra olmalıdır",
    ),
    (
        keys::DATE_LESS_THAN,
        "{{Field}} {{Max}} tarihinden önce olmalıdır",
    ),
];
