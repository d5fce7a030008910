pub mod grade;
pub mod inspect;
pub mod rubric;

pub use grade::*;
pub use inspect::*;
pub use rubric::*;
