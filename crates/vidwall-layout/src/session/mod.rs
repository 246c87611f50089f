//! WallSession: the caller-owned state object that holds mode and carousel
//! selection and routes layout requests.

mod arrange;
mod operations;
mod types;

pub use types::*;
