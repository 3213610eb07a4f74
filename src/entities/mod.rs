pub mod beatmaps;
pub mod scores;
