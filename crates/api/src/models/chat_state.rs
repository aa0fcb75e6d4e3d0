//! Chat state stored in the caller's session.
//!
//! The partner is spread over three session keys which are always written or
//! removed together. A session holding some but not all of them is corrupt.

use ser_core::{Gender, ParseStatusError, Partner};
use thiserror::Error;
use tower_sessions::Session;

use super::session_keys;

/// Error reading or writing chat state.
#[derive(Debug, Error)]
pub enum ChatStateError {
    /// The session store failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Only part of the partner fields are present.
    #[error("incomplete chat state: missing {0}")]
    Incomplete(&'static str),

    /// The stored gender is not one of the known wire names.
    #[error("corrupt chat state: {0}")]
    InvalidGender(#[from] ParseStatusError),
}

/// Chat state of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatState {
    /// No partner attached.
    Idle,
    /// A partner is attached.
    Connected(Partner),
}

impl ChatState {
    /// The attached partner, if any.
    #[must_use]
    pub const fn partner(&self) -> Option<&Partner> {
        match self {
            Self::Idle => None,
            Self::Connected(partner) => Some(partner),
        }
    }
}

/// Read the chat state from the session.
///
/// # Errors
///
/// Returns `ChatStateError::Incomplete` if the partner id is present without
/// the other partner fields.
pub async fn load(session: &Session) -> Result<ChatState, ChatStateError> {
    let Some(id) = session
        .get::<String>(session_keys::CHAT_PARTNER_ID)
        .await?
    else {
        return Ok(ChatState::Idle);
    };

    let display_name = session
        .get::<String>(session_keys::CHAT_PARTNER_DISPLAY_NAME)
        .await?
        .ok_or(ChatStateError::Incomplete(
            session_keys::CHAT_PARTNER_DISPLAY_NAME,
        ))?;
    let gender: Gender = session
        .get::<String>(session_keys::CHAT_PARTNER_GENDER)
        .await?
        .ok_or(ChatStateError::Incomplete(session_keys::CHAT_PARTNER_GENDER))?
        .parse()?;

    Ok(ChatState::Connected(Partner::new(id, display_name, gender)))
}

/// Attach a partner to the session, replacing any previous one.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn store(session: &Session, partner: &Partner) -> Result<(), ChatStateError> {
    session
        .insert(session_keys::CHAT_PARTNER_ID, &partner.id)
        .await?;
    session
        .insert(
            session_keys::CHAT_PARTNER_DISPLAY_NAME,
            &partner.display_name,
        )
        .await?;
    session
        .insert(session_keys::CHAT_PARTNER_GENDER, partner.gender.as_str())
        .await?;
    Ok(())
}

/// Detach the partner from the session. A no-op when already idle.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear(session: &Session) -> Result<(), ChatStateError> {
    for key in [
        session_keys::CHAT_PARTNER_ID,
        session_keys::CHAT_PARTNER_DISPLAY_NAME,
        session_keys::CHAT_PARTNER_GENDER,
    ] {
        session.remove_value(key).await?;
    }
    Ok(())
}
