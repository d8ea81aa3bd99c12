
pub use fixtures::*;
