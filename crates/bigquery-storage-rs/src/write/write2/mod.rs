mod append;
mod commit;
mod maybe_owned_mut;
mod missing_value;
mod session;
mod types;

pub(crate) use session::WriteSession;
pub(self) use session::WriteSessionState;
pub(crate) use types::{DefaultStream, StreamType};

pub(crate) use super::Schema;
