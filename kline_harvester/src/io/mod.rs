pub mod fs_sink;
pub mod sink;
