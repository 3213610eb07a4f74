pub mod backups;
pub mod beatmaps;
pub mod scores;
pub mod sessions;
