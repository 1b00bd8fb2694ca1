//! Shared UI components exported for routes and features.

mod already_signed_in;
pub mod layout;
pub mod ui;
mod verification_nag;

pub use already_signed_in::AlreadySignedInPanel;
pub use layout::AppShell;
pub use ui::{Alert, AlertKind, Button, Spinner};
pub use verification_nag::VerificationNag;
