use {super::*, rusqlite::types::Value};

const SELECT: &str = "SELECT id, post_id, parent_comment_id, author, \
                      content, score, created_at FROM comments";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentFilter {
  author: Option<String>,
  id: Option<i64>,
  post_id: Option<i64>,
}

impl CommentFilter {
  pub fn all() -> Self {
    Self::default()
  }

  pub fn by_author(author: impl Into<String>) -> Self {
    Self::all().with_author(author)
  }

  pub fn for_post(post_id: i64) -> Self {
    Self::all().with_post(post_id)
  }

  pub(crate) fn to_sql(&self) -> (String, Vec<Value>) {
    let mut clauses = Vec::new();
    let mut params = Vec::new();

    if let Some(author) = &self.author {
      clauses.push("author = ?");
      params.push(Value::from(author.clone()));
    }

    if let Some(id) = self.id {
      clauses.push("id = ?");
      params.push(Value::from(id));
    }

    if let Some(post_id) = self.post_id {
      clauses.push("post_id = ?");
      params.push(Value::from(post_id));
    }

    let mut sql = SELECT.to_string();

    if !clauses.is_empty() {
      sql.push_str(" WHERE ");
      sql.push_str(&clauses.join(" AND "));
    }

    sql.push_str(" ORDER BY id ASC");

    (sql, params)
  }

  pub fn with_author(mut self, author: impl Into<String>) -> Self {
    self.author = Some(author.into());
    self
  }

  pub fn with_id(mut self, id: i64) -> Self {
    self.id = Some(id);
    self
  }

  pub fn with_post(mut self, post_id: i64) -> Self {
    self.post_id = Some(post_id);
    self
  }
}
