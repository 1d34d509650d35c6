pub use super::high_score::Entity as HighScore;
pub use super::puzzle::Entity as Puzzle;
pub use super::student::Entity as Student;
pub use super::submission::Entity as Submission;
