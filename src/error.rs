use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("comment {0} not found")]
  CommentNotFound(i64),

  #[error("no comments by {0}")]
  NoCommentsByAuthor(String),

  #[error("no comments found for post {0}")]
  NoCommentsForPost(i64),

  #[error(transparent)]
  Storage(#[from] rusqlite::Error),
}
