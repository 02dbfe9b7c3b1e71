pub mod create;
pub use create::*;

pub mod withdraw;
pub use withdraw::*;
