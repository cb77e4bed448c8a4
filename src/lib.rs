use {
  chrono::{DateTime, Utc},
  serde::{Deserialize, Serialize},
  std::collections::HashMap,
  tracing::debug,
  utils::{sanitize_comment, truncate},
};

pub use {
  comment::Comment,
  comment_entry::CommentEntry,
  comment_filter::CommentFilter,
  comment_record::CommentRecord,
  comment_thread::CommentThread,
  error::Error,
  fetch::{thread_for_author, thread_for_comment, thread_for_post},
  store::Store,
};

mod comment;
mod comment_entry;
mod comment_filter;
mod comment_record;
mod comment_thread;
mod error;
mod fetch;
mod store;
mod utils;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
