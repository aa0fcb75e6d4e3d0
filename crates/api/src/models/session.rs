//! Session-related types.
//!
//! The external login flow writes [`keys::USER_ID`]; the chat handlers own the
//! `chat_partner_*` keys.

/// Session keys.
pub mod keys {
    /// Key holding the authenticated caller's `UserId`.
    pub const USER_ID: &str = "user_id";

    /// Key for the current partner's identifier.
    pub const CHAT_PARTNER_ID: &str = "chat_partner_id";

    /// Key for the current partner's display name.
    pub const CHAT_PARTNER_DISPLAY_NAME: &str = "chat_partner_display_name";

    /// Key for the current partner's gender.
    pub const CHAT_PARTNER_GENDER: &str = "chat_partner_gender";
}
