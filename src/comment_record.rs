use {super::*, rusqlite::Row};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CommentRecord {
  pub author: String,
  pub content: String,
  pub created_at: DateTime<Utc>,
  pub id: i64,
  pub parent_comment_id: Option<i64>,
  pub post_id: i64,
  pub score: i64,
}

impl CommentRecord {
  pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
    Ok(Self {
      author: row.get("author")?,
      content: row.get("content")?,
      created_at: row.get("created_at")?,
      id: row.get("id")?,
      parent_comment_id: row.get("parent_comment_id")?,
      post_id: row.get("post_id")?,
      score: row.get("score")?,
    })
  }

  pub fn is_root(&self) -> bool {
    self.parent_comment_id.is_none()
  }
}
