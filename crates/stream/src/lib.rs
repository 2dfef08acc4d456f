//! Block contract shared by the transmit blocks and a small runner that drives them.
pub mod linear_bucket;
pub mod stream_block;
pub mod stream_runner;
