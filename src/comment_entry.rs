use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommentEntry {
  pub author: String,
  pub body: String,
  pub children: Vec<usize>,
  pub depth: usize,
  pub id: i64,
  pub parent: Option<usize>,
  pub score: i64,
}

impl CommentEntry {
  pub fn body(&self) -> &str {
    self.body.as_str()
  }

  pub fn has_children(&self) -> bool {
    !self.children.is_empty()
  }

  pub fn header(&self) -> String {
    match self.score {
      1 => format!("{} (1 point)", self.author),
      _ => format!("{} ({} points)", self.author, self.score),
    }
  }

  pub fn preview(&self) -> Option<String> {
    let trimmed = self.body.trim();

    if trimmed.is_empty() {
      None
    } else {
      Some(truncate(trimmed, 120))
    }
  }
}
