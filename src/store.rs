use {
  super::*,
  rusqlite::{Connection, OptionalExtension, params, params_from_iter},
  std::path::Path,
};

const SCHEMA: &str = "
  CREATE TABLE IF NOT EXISTS comments (
    id                INTEGER PRIMARY KEY,
    post_id           INTEGER NOT NULL,
    parent_comment_id INTEGER,
    author            TEXT NOT NULL,
    content           TEXT NOT NULL,
    score             INTEGER NOT NULL DEFAULT 0,
    created_at        TEXT NOT NULL
  );

  CREATE INDEX IF NOT EXISTS comments_by_post ON comments(post_id);
  CREATE INDEX IF NOT EXISTS comments_by_author ON comments(author);
";

pub struct Store {
  conn: Connection,
}

impl Store {
  pub fn comment(&self, id: i64) -> Result<Option<CommentRecord>> {
    let record = self
      .conn
      .query_row(
        "SELECT id, post_id, parent_comment_id, author, content, score, \
         created_at FROM comments WHERE id = ?1",
        params![id],
        CommentRecord::from_row,
      )
      .optional()?;

    Ok(record)
  }

  fn initialize(conn: Connection) -> Result<Self> {
    conn.execute_batch(
      "PRAGMA journal_mode = WAL;
       PRAGMA synchronous = NORMAL;
       PRAGMA foreign_keys = ON;",
    )?;

    conn.execute_batch(SCHEMA)?;

    Ok(Self { conn })
  }

  pub fn insert(&self, record: &CommentRecord) -> Result {
    debug!(
      id = record.id,
      post_id = record.post_id,
      parent = record.parent_comment_id,
      "inserting comment"
    );

    self.conn.execute(
      "INSERT INTO comments \
       (id, post_id, parent_comment_id, author, content, score, created_at) \
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
      params![
        record.id,
        record.post_id,
        record.parent_comment_id,
        record.author,
        record.content,
        record.score,
        record.created_at,
      ],
    )?;

    Ok(())
  }

  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::initialize(Connection::open(path)?)
  }

  pub fn open_in_memory() -> Result<Self> {
    Self::initialize(Connection::open_in_memory()?)
  }

  pub fn query(&self, filter: &CommentFilter) -> Result<Vec<CommentRecord>> {
    let (sql, values) = filter.to_sql();

    debug!(%sql, "querying comments");

    let mut statement = self.conn.prepare(&sql)?;

    let records = statement
      .query_map(params_from_iter(values), CommentRecord::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(records)
  }
}
