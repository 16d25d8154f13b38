mod bot;
mod budget;
mod pricing;
mod robot;
mod stats;

pub use bot::*;
pub use budget::*;
pub use pricing::*;
pub use robot::*;
pub use stats::*;
