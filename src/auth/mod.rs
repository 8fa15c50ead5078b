//! Authentication collaborators: credential oracle and session store.
//!
//! The panel's sole authorization gate is a credential check against the
//! privileged system account; everything here treats that check as an
//! injected capability so tests never invoke a real shell.

pub mod session;
pub mod verifier;

pub use session::{AuthSession, SessionStore};
pub use verifier::{CredentialVerifier, SuCredentialVerifier};
