//! Result filtering.

use crate::error::Result;
use crate::graph::Twitterverse;
use tracing::debug;
use twitterverse_core::{FilterSpec, Predicate, User};

impl Twitterverse {
    /// Keeps the users in `results` that satisfy every predicate in
    /// `spec`, preserving their relative order.
    ///
    /// Fails with `NotFound` if a `follower` predicate names an unknown
    /// user, even when `results` is empty.
    pub fn filter<'g>(&'g self, results: &[&'g str], spec: &FilterSpec) -> Result<Vec<&'g str>> {
        let predicates = spec.predicates();
        let checks = predicates
            .iter()
            .map(|predicate| self.compile(predicate))
            .collect::<Result<Vec<_>>>()?;

        let kept: Vec<&str> = results
            .iter()
            .copied()
            .filter(|username| match self.get(username) {
                Ok(user) => checks.iter().all(|check| check.matches(user)),
                Err(_) => false,
            })
            .collect();

        debug!(
            "Filter ({} predicates) kept {} of {} users",
            checks.len(),
            kept.len(),
            results.len()
        );
        Ok(kept)
    }

    /// Resolves a predicate's arguments against the graph.
    fn compile<'a>(&'a self, predicate: &Predicate<'a>) -> Result<Check<'a>> {
        debug!("Compiling {} predicate", predicate.key());
        Ok(match *predicate {
            Predicate::NameIncludes(text) => Check::NameIncludes(text.to_lowercase()),
            Predicate::LocationIncludes(text) => Check::LocationIncludes(text.to_lowercase()),
            Predicate::Following(username) => Check::Follows(username),
            Predicate::Follower(username) => Check::FollowedBy(self.get(username)?),
        })
    }
}

/// A predicate ready to run against user records.
enum Check<'a> {
    NameIncludes(String),
    LocationIncludes(String),
    Follows(&'a str),
    FollowedBy(&'a User),
}

impl Check<'_> {
    fn matches(&self, user: &User) -> bool {
        match self {
            Self::NameIncludes(needle) => user.name.to_lowercase().contains(needle.as_str()),
            Self::LocationIncludes(needle) => {
                user.location.to_lowercase().contains(needle.as_str())
            }
            Self::Follows(username) => user.follows(username),
            Self::FollowedBy(follower) => follower.follows(&user.username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn sample() -> Twitterverse {
        vec![
            User::new("tomfan")
                .with_name("Chris Calderone")
                .with_location("Houston, Texas")
                .with_following(["tomCruise"]),
            User::new("tomCruise")
                .with_name("Tom Cruise")
                .with_location("Los Angeles, CA")
                .with_following(["katieH", "NicoleKidman"]),
            User::new("NicoleKidman")
                .with_name("Nicole Kidman")
                .with_location("Oz"),
            User::new("PerezHilton")
                .with_name("Perez Hilton")
                .with_location("Hollywood, California")
                .with_following(["tomCruise", "katieH", "NicoleKidman"]),
            User::new("katieH").with_name("Katie Holmes"),
        ]
        .into_iter()
        .collect()
    }

    fn spec(pairs: &[(&str, &str)]) -> FilterSpec {
        let mut spec = FilterSpec::default();
        for (key, value) in pairs {
            spec.set(key, *value).unwrap();
        }
        spec
    }

    #[test]
    fn test_no_predicates_keeps_everything() {
        let graph = sample();
        let results = ["katieH", "tomfan"];
        assert_eq!(
            graph.filter(&results, &FilterSpec::default()).unwrap(),
            vec!["katieH", "tomfan"]
        );
    }

    #[test]
    fn test_name_includes_ignores_case() {
        let graph = sample();
        let results = ["katieH", "NicoleKidman", "tomCruise"];
        assert_eq!(
            graph.filter(&results, &spec(&[("name-includes", "r")])).unwrap(),
            vec!["tomCruise"]
        );
        assert_eq!(
            graph.filter(&results, &spec(&[("name-includes", "OL")])).unwrap(),
            vec!["katieH", "NicoleKidman"]
        );
    }

    #[test]
    fn test_location_includes() {
        let graph = sample();
        let results = ["tomfan", "tomCruise", "PerezHilton", "katieH"];
        assert_eq!(
            graph
                .filter(&results, &spec(&[("location-includes", "CA")]))
                .unwrap(),
            vec!["tomCruise", "PerezHilton"]
        );
    }

    #[test]
    fn test_following_keeps_users_who_follow() {
        let graph = sample();
        let results = ["tomfan", "tomCruise", "PerezHilton"];
        assert_eq!(
            graph.filter(&results, &spec(&[("following", "katieH")])).unwrap(),
            vec!["tomCruise", "PerezHilton"]
        );
        // Unknown usernames are compared as text and never fail.
        assert!(graph
            .filter(&results, &spec(&[("following", "ghost")]))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_follower_keeps_users_followed_by() {
        // A follows B, so B survives follower(A) and A does not.
        let graph: Twitterverse = vec![User::new("A").with_following(["B"]), User::new("B")]
            .into_iter()
            .collect();
        assert_eq!(
            graph.filter(&["A", "B"], &spec(&[("follower", "A")])).unwrap(),
            vec!["B"]
        );
        assert!(graph
            .filter(&["A", "B"], &spec(&[("follower", "B")]))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_follower_unknown_user() {
        let graph = sample();
        let err = graph.filter(&[], &spec(&[("follower", "ghost")])).unwrap_err();
        assert!(matches!(err, GraphError::NotFound { username } if username == "ghost"));
    }

    #[test]
    fn test_predicates_are_conjunctive_and_order_independent() {
        let graph = sample();
        let results = ["tomfan", "tomCruise", "NicoleKidman", "PerezHilton", "katieH"];

        let one = spec(&[("name-includes", "o"), ("follower", "PerezHilton")]);
        let two = spec(&[("follower", "PerezHilton"), ("name-includes", "o")]);

        let expected = vec!["tomCruise", "NicoleKidman", "katieH"];
        assert_eq!(graph.filter(&results, &one).unwrap(), expected);
        assert_eq!(graph.filter(&results, &two).unwrap(), expected);
    }
}
