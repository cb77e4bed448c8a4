use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comment {
  pub author: String,
  pub content: String,
  pub created_at: DateTime<Utc>,
  pub id: i64,
  pub parent_comment_id: Option<i64>,
  pub post_id: i64,
  pub replies: Vec<Comment>,
  pub score: i64,
}

impl From<CommentRecord> for Comment {
  fn from(record: CommentRecord) -> Self {
    let CommentRecord {
      author,
      content,
      created_at,
      id,
      parent_comment_id,
      post_id,
      score,
    } = record;

    Self {
      author,
      content,
      created_at,
      id,
      parent_comment_id,
      post_id,
      replies: Vec::new(),
      score,
    }
  }
}

impl Comment {
  pub fn has_replies(&self) -> bool {
    !self.replies.is_empty()
  }

  pub fn total(&self) -> usize {
    1 + self.replies.iter().map(Comment::total).sum::<usize>()
  }
}
