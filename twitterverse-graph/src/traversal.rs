//! Search traversal.
//!
//! A search starts from a seed user and applies its operations one hop at
//! a time. Each hop replaces the frontier with the union of every
//! frontier member's followers or followings, in the order they are
//! first encountered. There is no visited set across hops: a user reached
//! at hop 1 and again at hop 3 is expanded again at hop 3.

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, Twitterverse};
use std::collections::HashSet;
use tracing::debug;
use twitterverse_core::Operation;

impl Twitterverse {
    /// Runs a search from `seed`, returning usernames without duplicates
    /// in order of discovery.
    ///
    /// Fails with `NotFound` if the seed has no record. Following entries
    /// that name unknown users are skipped. With no operations the result
    /// is the seed itself.
    pub fn traverse(&self, seed: &str, operations: &[Operation]) -> Result<Vec<&str>> {
        let start = self
            .get_index(seed)
            .ok_or_else(|| GraphError::not_found(seed))?;

        let mut frontier = vec![start];
        for (hop, operation) in operations.iter().enumerate() {
            frontier = self.expand(&frontier, *operation);
            debug!(
                "Hop {} ({}) from {}: {} users",
                hop + 1,
                operation,
                seed,
                frontier.len()
            );
        }

        Ok(self.names(frontier))
    }

    /// Applies one operation to every frontier member.
    fn expand(&self, frontier: &[NodeId], operation: Operation) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        let mut next = Vec::new();

        for &index in frontier {
            let neighbors = match operation {
                Operation::Following => self.following_ids(index),
                Operation::Followers => self.follower_ids(index),
            };
            for neighbor in neighbors {
                if seen.insert(neighbor) {
                    next.push(neighbor);
                }
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twitterverse_core::User;
    use twitterverse_core::Operation::{Followers, Following};

    fn sample() -> Twitterverse {
        vec![
            User::new("tomfan").with_following(["tomCruise"]),
            User::new("tomCruise").with_following(["katieH", "NicoleKidman"]),
            User::new("NicoleKidman"),
            User::new("PerezHilton").with_following(["tomCruise", "katieH", "NicoleKidman"]),
            User::new("katieH"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_following_returns_following_list() {
        let graph = sample();
        assert_eq!(
            graph.traverse("PerezHilton", &[Following]).unwrap(),
            vec!["tomCruise", "katieH", "NicoleKidman"]
        );
    }

    #[test]
    fn test_followers_returns_followers() {
        let graph = sample();
        assert_eq!(
            graph.traverse("tomCruise", &[Followers]).unwrap(),
            vec!["tomfan", "PerezHilton"]
        );
        assert_eq!(
            graph.traverse("katieH", &[Followers]).unwrap(),
            vec!["tomCruise", "PerezHilton"]
        );
    }

    #[test]
    fn test_two_user_scenario() {
        let graph: Twitterverse = vec![User::new("A").with_following(["B"]), User::new("B")]
            .into_iter()
            .collect();

        assert_eq!(graph.traverse("A", &[Following]).unwrap(), vec!["B"]);
        assert_eq!(graph.traverse("B", &[Followers]).unwrap(), vec!["A"]);
    }

    #[test]
    fn test_multi_hop_dedups_in_discovery_order() {
        let graph = sample();
        // followers of tomCruise = [tomfan, PerezHilton]; their followings
        // are [tomCruise] and [tomCruise, katieH, NicoleKidman].
        assert_eq!(
            graph.traverse("tomCruise", &[Followers, Following]).unwrap(),
            vec!["tomCruise", "katieH", "NicoleKidman"]
        );
    }

    #[test]
    fn test_frontier_is_re_expanded() {
        // a <-> b: every hop flips between the two users.
        let graph: Twitterverse = vec![
            User::new("a").with_following(["b"]),
            User::new("b").with_following(["a"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(graph.traverse("a", &[Following]).unwrap(), vec!["b"]);
        assert_eq!(graph.traverse("a", &[Following, Following]).unwrap(), vec!["a"]);
        assert_eq!(
            graph.traverse("a", &[Following, Following, Following]).unwrap(),
            vec!["b"]
        );
    }

    #[test]
    fn test_empty_frontier_stays_empty() {
        let graph = sample();
        assert!(graph
            .traverse("tomCruise", &[Followers, Followers, Followers])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_dangling_following_is_skipped() {
        let graph: Twitterverse = vec![
            User::new("a").with_following(["ghost", "b"]),
            User::new("b").with_following(["ghost"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(graph.traverse("a", &[Following]).unwrap(), vec!["b"]);
        assert!(graph.traverse("a", &[Following, Following]).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_seed() {
        let graph = sample();
        let err = graph.traverse("ghost", &[Following]).unwrap_err();
        assert!(matches!(err, GraphError::NotFound { username } if username == "ghost"));
    }

    #[test]
    fn test_no_operations_yields_seed() {
        let graph = sample();
        assert_eq!(graph.traverse("katieH", &[]).unwrap(), vec!["katieH"]);
    }
}
