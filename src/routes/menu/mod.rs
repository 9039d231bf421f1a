mod update;
mod top;

pub use update::*;
pub use top::*;
