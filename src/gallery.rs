//! Reorderable project gallery
//!
//! Owns the display order of the project cards. The view interprets drag
//! gestures; this module only commits explicit orders, and only when they are
//! a permutation of the existing ids. Order is not persisted: it resets to the
//! seed order on relaunch.

use crate::types::project::Project;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    /// The proposed order does not contain each existing id exactly once
    #[error("proposed order is not a permutation of the current project ids")]
    NotAPermutation,
}

#[derive(Debug, Clone)]
pub struct ProjectGallery {
    projects: Vec<Project>,
}

impl ProjectGallery {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Current display order as ids
    pub fn order(&self) -> Vec<u32> {
        self.projects.iter().map(|p| p.id).collect()
    }

    /// Replace the display order
    ///
    /// Membership never changes here: anything that is not a permutation of
    /// the current ids is rejected and the sequence is left untouched.
    pub fn commit_order(&mut self, order: &[u32]) -> Result<(), ReorderError> {
        if order.len() != self.projects.len() {
            return Err(ReorderError::NotAPermutation);
        }
        let current: HashSet<u32> = self.projects.iter().map(|p| p.id).collect();
        let proposed: HashSet<u32> = order.iter().copied().collect();
        if proposed.len() != order.len() || proposed != current {
            return Err(ReorderError::NotAPermutation);
        }

        self.projects.sort_by_key(|p| {
            // Position lookup cannot fail: the id sets were just proven equal
            order.iter().position(|&id| id == p.id).unwrap_or(usize::MAX)
        });
        tracing::debug!(?order, "gallery order committed");
        Ok(())
    }
}

/// Translate a drag-drop gesture into a candidate order
///
/// `dragged` takes the slot currently held by `target`; everything else keeps
/// its relative order. Unknown ids leave the order unchanged.
pub fn moved(current: &[u32], dragged: u32, target: u32) -> Vec<u32> {
    if dragged == target {
        return current.to_vec();
    }
    let (Some(from), Some(to)) = (
        current.iter().position(|&id| id == dragged),
        current.iter().position(|&id| id == target),
    ) else {
        return current.to_vec();
    };
    let mut order = current.to_vec();
    let id = order.remove(from);
    order.insert(to, id);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn gallery() -> ProjectGallery {
        ProjectGallery::new(content::projects())
    }

    #[test]
    fn test_identity_permutation_is_a_no_op() {
        let mut g = gallery();
        let before = g.order();
        g.commit_order(&before).unwrap();
        assert_eq!(g.order(), before);
    }

    #[test]
    fn test_reverse_order() {
        let mut g = gallery();
        let mut order = g.order();
        order.reverse();
        g.commit_order(&order).unwrap();
        assert_eq!(g.order(), order);
    }

    #[test]
    fn test_reorder_preserves_id_set() {
        let mut g = gallery();
        let before: HashSet<u32> = g.order().into_iter().collect();
        let mut order = g.order();
        order.rotate_left(1);
        g.commit_order(&order).unwrap();
        let after: HashSet<u32> = g.order().into_iter().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let mut g = gallery();
        let before = g.order();
        assert_eq!(g.commit_order(&before[1..]), Err(ReorderError::NotAPermutation));
        assert_eq!(g.order(), before);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut g = gallery();
        let before = g.order();
        let mut order = before.clone();
        order[1] = order[0];
        assert_eq!(g.commit_order(&order), Err(ReorderError::NotAPermutation));
        assert_eq!(g.order(), before);
    }

    #[test]
    fn test_foreign_id_rejected() {
        let mut g = gallery();
        let before = g.order();
        let mut order = before.clone();
        order[0] = 999;
        assert_eq!(g.commit_order(&order), Err(ReorderError::NotAPermutation));
        assert_eq!(g.order(), before);
    }

    #[test]
    fn test_moved_forward_and_backward() {
        assert_eq!(moved(&[1, 2, 3], 1, 3), vec![2, 3, 1]);
        assert_eq!(moved(&[1, 2, 3], 3, 1), vec![3, 1, 2]);
    }

    #[test]
    fn test_moved_onto_itself_or_unknown_is_unchanged() {
        assert_eq!(moved(&[1, 2, 3], 2, 2), vec![1, 2, 3]);
        assert_eq!(moved(&[1, 2, 3], 9, 1), vec![1, 2, 3]);
    }

    #[test]
    fn test_moved_result_always_commits() {
        let mut g = gallery();
        let order = g.order();
        let candidate = moved(&order, order[0], order[order.len() - 1]);
        g.commit_order(&candidate).unwrap();
        assert_eq!(g.order(), candidate);
    }
}
