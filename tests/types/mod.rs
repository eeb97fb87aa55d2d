pub mod kind;
pub mod outcome;
