pub mod classify;
pub mod control;
pub mod timing;
#[cfg(feature = "sim")]
pub mod stoch;

pub use classify::*;
pub use control::*;
pub use timing::*;
