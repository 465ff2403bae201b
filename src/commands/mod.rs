mod score;

pub use score::{ScoreArgs, process_essay};
