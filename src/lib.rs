pub mod adjust;
pub mod bag;
pub mod config;
pub mod error;
pub mod repl;
pub mod shot;

pub use adjust::{AdjustedResult, ConditionInput, Lie, WindDirection, adjust, compute, lie_penalty};
pub use bag::{Club, ClubBag};
pub use error::BagError;
