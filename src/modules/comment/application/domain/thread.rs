use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::entities::Comment;

/// How deep `build_threads` nests replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadShape {
    /// Roots plus their direct children. Anything deeper is dropped.
    #[default]
    SingleLevel,
    /// The full tree, any depth.
    Recursive,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown thread shape: {0}")]
pub struct UnknownThreadShape(pub String);

impl FromStr for ThreadShape {
    type Err = UnknownThreadShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single_level" => Ok(Self::SingleLevel),
            "recursive" => Ok(Self::Recursive),
            other => Err(UnknownThreadShape(other.to_string())),
        }
    }
}

impl fmt::Display for ThreadShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleLevel => f.write_str("single_level"),
            Self::Recursive => f.write_str("recursive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<CommentThread>,
}

/// Deepest reply level `ThreadShape::Recursive` produces. Replies below it
/// become siblings at this level, so every tree stays shallow enough to
/// drop and serialize without exhausting the stack.
pub const MAX_REPLY_DEPTH: usize = 32;

/// Assemble flat comments into threads.
///
/// Input order is preserved at every level, so callers pass comments sorted
/// ascending by `created_at`. Comments whose parent is not in the input are
/// unreachable and left out.
pub fn build_threads(comments: Vec<Comment>, shape: ThreadShape) -> Vec<CommentThread> {
    let max_depth = match shape {
        ThreadShape::SingleLevel => 1,
        ThreadShape::Recursive => MAX_REPLY_DEPTH,
    };

    let mut slots: Vec<Option<Comment>> = Vec::with_capacity(comments.len());
    let mut roots = Vec::new();
    let mut children: HashMap<String, Vec<usize>> = HashMap::new();

    for (idx, comment) in comments.into_iter().enumerate() {
        match &comment.parent_id {
            None => roots.push(idx),
            Some(parent_id) => children.entry(parent_id.clone()).or_default().push(idx),
        }
        slots.push(Some(comment));
    }

    // Pre-order walk: (comment, depth, node it hangs under).
    let mut placed: Vec<(usize, Option<usize>)> = Vec::with_capacity(slots.len());
    let mut stack: Vec<(usize, usize, Option<usize>)> =
        roots.iter().rev().map(|&root| (root, 0, None)).collect();

    while let Some((idx, depth, parent)) = stack.pop() {
        placed.push((idx, parent));

        let Some(kids) = slots[idx]
            .as_ref()
            .and_then(|comment| children.remove(&comment.id))
        else {
            continue;
        };

        let (kid_depth, kid_parent) = if depth < max_depth {
            (depth + 1, idx)
        } else {
            match shape {
                ThreadShape::SingleLevel => continue,
                ThreadShape::Recursive => (depth, parent.unwrap_or(idx)),
            }
        };

        for &kid in kids.iter().rev() {
            stack.push((kid, kid_depth, Some(kid_parent)));
        }
    }

    let mut replies_of: HashMap<usize, Vec<usize>> = HashMap::new();
    for &(idx, parent) in &placed {
        if let Some(parent) = parent {
            replies_of.entry(parent).or_default().push(idx);
        }
    }
    // Flattened replies arrive out of order; input position is creation order.
    for replies in replies_of.values_mut() {
        replies.sort_unstable();
    }

    // Every reply is placed after the node it hangs under, so walking
    // backwards builds children first.
    let mut built: Vec<Option<CommentThread>> = (0..slots.len()).map(|_| None).collect();
    for &(idx, _) in placed.iter().rev() {
        let replies: Vec<CommentThread> = replies_of
            .remove(&idx)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|reply| built[reply].take())
            .collect();

        if let Some(comment) = slots[idx].take() {
            built[idx] = Some(CommentThread { comment, replies });
        }
    }

    roots
        .into_iter()
        .filter_map(|root| built[root].take())
        .collect()
}
