pub mod score_entry;
pub mod student_total;

pub use score_entry::ScoreEntry;
pub use student_total::StudentTotal;
