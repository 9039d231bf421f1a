mod post;
mod menu;
mod revenue;

pub use post::*;
pub use menu::*;
pub use revenue::*;
