pub mod beatmaps;
