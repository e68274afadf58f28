pub mod constants;
pub mod decor;
pub mod ease;
pub mod overlay;
pub mod sequence;
pub mod spring;
pub mod tier;
pub mod track;

pub use constants::*;
pub use decor::*;
pub use ease::*;
pub use overlay::*;
pub use sequence::*;
pub use spring::*;
pub use tier::*;
pub use track::*;
