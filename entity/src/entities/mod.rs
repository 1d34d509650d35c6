pub mod prelude;

pub mod high_score;
pub mod puzzle;
pub mod student;
pub mod submission;
