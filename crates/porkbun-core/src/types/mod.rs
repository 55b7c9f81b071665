mod common;
mod domain;
mod record;
mod session;

pub use common::*;
pub use domain::*;
pub use record::*;
pub use session::*;
