mod post;
mod get;
mod top;

pub use post::*;
pub use get::*;
pub use top::*;
