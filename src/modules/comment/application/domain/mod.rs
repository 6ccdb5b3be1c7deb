pub mod entities;
mod thread;

pub use thread::{
    build_threads, CommentThread, ThreadShape, UnknownThreadShape, MAX_REPLY_DEPTH,
};
