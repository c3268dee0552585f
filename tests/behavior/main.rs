mod construction;

pub use utils::*;
