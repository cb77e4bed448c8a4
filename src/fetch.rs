use super::*;

pub fn thread_for_author(store: &Store, author: &str) -> Result<CommentThread> {
  let records = store.query(&CommentFilter::by_author(author))?;

  if records.is_empty() {
    return Err(Error::NoCommentsByAuthor(author.to_string()));
  }

  debug!(author, count = records.len(), "threading comments by author");

  Ok(CommentThread::from_records(records))
}

pub fn thread_for_comment(store: &Store, id: i64) -> Result<CommentThread> {
  let comment = store.comment(id)?.ok_or(Error::CommentNotFound(id))?;

  let records = store.query(&CommentFilter::for_post(comment.post_id))?;

  Ok(CommentThread::from_records(records).with_focus(id))
}

pub fn thread_for_post(store: &Store, post_id: i64) -> Result<CommentThread> {
  let records = store.query(&CommentFilter::for_post(post_id))?;

  if records.is_empty() {
    return Err(Error::NoCommentsForPost(post_id));
  }

  debug!(post_id, count = records.len(), "threading comments for post");

  Ok(CommentThread::from_records(records))
}
