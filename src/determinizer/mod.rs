mod closure;
mod subset;

pub use closure::*;
pub use subset::*;
