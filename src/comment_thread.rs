use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommentThread {
  pub focus: Option<i64>,
  pub roots: Vec<Comment>,
}

impl CommentThread {
  fn assemble(
    id: i64,
    nodes: &mut HashMap<i64, Comment>,
    children: &mut HashMap<i64, Vec<i64>>,
  ) -> Option<Comment> {
    let mut node = nodes.remove(&id)?;

    if let Some(replies) = children.remove(&id) {
      for reply in replies {
        if let Some(reply) = Self::assemble(reply, nodes, children) {
          node.replies.push(reply);
        }
      }
    }

    Some(node)
  }

  pub fn entries(&self) -> Vec<CommentEntry> {
    let mut entries = Vec::new();

    for comment in &self.roots {
      Self::push_comment(&mut entries, comment, None, 0);
    }

    entries
  }

  pub fn from_records(records: Vec<CommentRecord>) -> Self {
    let order = records
      .iter()
      .map(|record| (record.id, record.parent_comment_id))
      .collect::<Vec<_>>();

    let parents = order.iter().copied().collect::<HashMap<_, _>>();

    let mut nodes = records
      .into_iter()
      .map(|record| (record.id, Comment::from(record)))
      .collect::<HashMap<_, _>>();

    let mut children: HashMap<i64, Vec<i64>> = HashMap::new();
    let mut root_ids = Vec::new();

    for (id, parent_id) in order {
      let Some(parent_id) = parent_id else {
        root_ids.push(id);
        continue;
      };

      // A dangling reference drops the comment silently.
      let Some(&grandparent_id) = parents.get(&parent_id) else {
        continue;
      };

      // A reply to a non-root reply folds up to its grandparent, so the
      // rendered thread never grows past reply-to-reply on fresh chains.
      let target = match grandparent_id {
        Some(grandparent_id)
          if matches!(parents.get(&grandparent_id), Some(Some(_))) =>
        {
          grandparent_id
        }
        _ => parent_id,
      };

      children.entry(target).or_default().push(id);
    }

    let roots = root_ids
      .into_iter()
      .filter_map(|id| Self::assemble(id, &mut nodes, &mut children))
      .collect();

    Self { focus: None, roots }
  }

  pub fn is_empty(&self) -> bool {
    self.roots.is_empty()
  }

  fn push_comment(
    entries: &mut Vec<CommentEntry>,
    comment: &Comment,
    parent: Option<usize>,
    depth: usize,
  ) -> usize {
    let idx = entries.len();

    entries.push(CommentEntry {
      author: comment.author.clone(),
      body: sanitize_comment(&comment.content),
      children: Vec::new(),
      depth,
      id: comment.id,
      parent,
      score: comment.score,
    });

    let mut child_indices = Vec::new();

    for reply in &comment.replies {
      let child_idx = Self::push_comment(
        entries,
        reply,
        Some(idx),
        depth.saturating_add(1),
      );

      child_indices.push(child_idx);
    }

    if let Some(entry) = entries.get_mut(idx) {
      entry.children = child_indices;
    }

    idx
  }

  pub fn total(&self) -> usize {
    self.roots.iter().map(Comment::total).sum()
  }

  pub fn with_focus(mut self, id: i64) -> Self {
    self.focus = Some(id);
    self
  }
}
