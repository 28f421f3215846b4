// Shared by both binaries, each uses a subset.
#[allow(dead_code)]
pub mod cli;
