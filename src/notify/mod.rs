//! Expiry-alert email composition and delivery.

mod compose;

#[cfg(feature = "mail")]
mod mailer;

pub use compose::*;

#[cfg(feature = "mail")]
pub use mailer::*;
