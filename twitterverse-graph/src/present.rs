//! Sorting and rendering of query results.
//!
//! Output must match existing consumers byte for byte. Usernames and
//! following lists are printed in list text form: `['a', 'b']`, with
//! each item quoted as a string literal.

use crate::graph::Twitterverse;
use std::cmp::Ordering;
use std::fmt::Write;
use tracing::debug;
use twitterverse_core::{Format, PresentSpec, SortKey, User};

/// Separates user blocks in the long format.
pub const DELIMITER: &str = "----------";

impl Twitterverse {
    /// Orders the users named in `results`.
    ///
    /// The sort is stable and every key falls back to username order, so
    /// the result is fully determined. Follower counts are computed once
    /// per call. Usernames without a record are dropped.
    pub fn sort<'g>(&'g self, results: &[&str], key: SortKey) -> Vec<&'g User> {
        let mut entries: Vec<(&User, usize)> = results
            .iter()
            .filter_map(|username| self.get(username).ok())
            .map(|user| {
                let popularity = match key {
                    SortKey::Popularity => self.follower_count(&user.username),
                    SortKey::Username | SortKey::Name => 0,
                };
                (user, popularity)
            })
            .collect();

        entries.sort_by(|(a, a_followers), (b, b_followers)| match key {
            SortKey::Username => by_username(a, b),
            SortKey::Name => a.name.cmp(&b.name).then_with(|| by_username(a, b)),
            SortKey::Popularity => b_followers
                .cmp(a_followers)
                .then_with(|| by_username(a, b)),
        });

        entries.into_iter().map(|(user, _)| user).collect()
    }

    /// Sorts and renders `results`.
    pub fn present(&self, results: &[&str], spec: PresentSpec) -> String {
        let users = self.sort(results, spec.sort_by);
        debug!(
            "Presenting {} users by {} as {}",
            users.len(),
            spec.sort_by,
            spec.format
        );

        match spec.format {
            Format::Short => list_text(users.iter().map(|user| user.username.as_str())),
            Format::Long => long_report(&users),
        }
    }
}

fn by_username(a: &User, b: &User) -> Ordering {
    a.username.cmp(&b.username)
}

/// One block per user between delimiter lines, with a trailing newline.
fn long_report(users: &[&User]) -> String {
    let mut out = String::from(DELIMITER);
    for user in users {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "\n{}\nname: {}\nlocation: {}\nwebsite: {}\nbio:\n{}\nfollowing: {}\n{}",
            user.username,
            user.name,
            user.location,
            user.website,
            user.bio,
            list_text(user.following.iter().map(String::as_str)),
            DELIMITER
        );
    }
    if users.is_empty() {
        out.push('\n');
        out.push_str(DELIMITER);
    }
    out.push('\n');
    out
}

/// Renders strings as a bracketed, comma separated list of quoted items.
pub fn list_text<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = items.into_iter().map(quote).collect();
    format!("[{}]", quoted.join(", "))
}

/// Quotes a string literal. Single quotes are preferred; double quotes are
/// used when the text contains a single quote but no double quote.
fn quote(text: &str) -> String {
    let delim = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delim);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(sort_by: SortKey, format: Format) -> PresentSpec {
        PresentSpec { sort_by, format }
    }

    fn sample() -> Twitterverse {
        vec![
            User::new("katieH")
                .with_name("Katie Holmes")
                .with_website("www.tomkat.com"),
            User::new("tomCruise")
                .with_name("Tom Cruise")
                .with_location("Los Angeles, CA")
                .with_website("http://www.tomcruise.com")
                .with_bio("Official TomCruise.com crew tweets.\nWe love you guys!")
                .with_following(["katieH"]),
        ]
        .into_iter()
        .collect()
    }

    fn usernames<'a>(users: &[&'a User]) -> Vec<&'a str> {
        users.iter().map(|user| user.username.as_str()).collect()
    }

    #[test]
    fn test_short_by_username() {
        let graph = sample();
        assert_eq!(
            graph.present(&["tomCruise", "katieH"], spec(SortKey::Username, Format::Short)),
            "['katieH', 'tomCruise']"
        );
    }

    #[test]
    fn test_short_single_user() {
        let graph: Twitterverse = vec![
            User::new("A").with_name("Tom Cruise").with_following(["B"]),
            User::new("B").with_name("Katie Holmes"),
        ]
        .into_iter()
        .collect();
        let results = graph.traverse("A", &[twitterverse_core::Operation::Following]).unwrap();
        assert_eq!(
            graph.present(&results, spec(SortKey::Username, Format::Short)),
            "['B']"
        );
    }

    #[test]
    fn test_empty_renders() {
        let graph = sample();
        assert_eq!(graph.present(&[], spec(SortKey::Name, Format::Short)), "[]");
        assert_eq!(
            graph.present(&[], spec(SortKey::Popularity, Format::Long)),
            "----------\n----------\n"
        );
    }

    #[test]
    fn test_long_report() {
        let graph = sample();
        let expected = concat!(
            "----------\n",
            "katieH\n",
            "name: Katie Holmes\n",
            "location: \n",
            "website: www.tomkat.com\n",
            "bio:\n",
            "\n",
            "following: []\n",
            "----------\n",
            "tomCruise\n",
            "name: Tom Cruise\n",
            "location: Los Angeles, CA\n",
            "website: http://www.tomcruise.com\n",
            "bio:\n",
            "Official TomCruise.com crew tweets.\n",
            "We love you guys!\n",
            "following: ['katieH']\n",
            "----------\n",
        );
        assert_eq!(
            graph.present(&["tomCruise", "katieH"], spec(SortKey::Username, Format::Long)),
            expected
        );
    }

    #[test]
    fn test_sort_by_username_is_lexicographic() {
        let graph: Twitterverse = ["c", "B", "a", "Ab"]
            .into_iter()
            .map(User::new)
            .collect();
        let sorted = graph.sort(&["c", "B", "a", "Ab"], SortKey::Username);
        assert_eq!(usernames(&sorted), vec!["Ab", "B", "a", "c"]);
    }

    #[test]
    fn test_sort_by_name_breaks_ties_by_username() {
        let graph: Twitterverse = vec![
            User::new("a").with_name("Zed"),
            User::new("b").with_name("Lee"),
            User::new("c").with_name("anna"),
            User::new("d").with_name("Lee"),
        ]
        .into_iter()
        .collect();

        let sorted = graph.sort(&["c", "d", "a", "b"], SortKey::Name);
        assert_eq!(usernames(&sorted), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_by_popularity() {
        // b has 2 followers, c and d have 1, a has none.
        let graph: Twitterverse = vec![
            User::new("a").with_following(["b", "d"]),
            User::new("b").with_following(["c"]),
            User::new("c").with_following(["b"]),
            User::new("d"),
        ]
        .into_iter()
        .collect();

        let sorted = graph.sort(&["a", "d", "c", "b"], SortKey::Popularity);
        assert_eq!(usernames(&sorted), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_sort_drops_unknown_usernames() {
        let graph = sample();
        let sorted = graph.sort(&["ghost", "katieH"], SortKey::Username);
        assert_eq!(usernames(&sorted), vec!["katieH"]);
    }

    #[test]
    fn test_list_text_quoting() {
        assert_eq!(list_text(std::iter::empty()), "[]");
        assert_eq!(list_text(["a", "b"]), "['a', 'b']");
        assert_eq!(list_text(["it's"]), "[\"it's\"]");
        assert_eq!(list_text(["say \"it's\""]), "['say \"it\\'s\"']");
        assert_eq!(list_text(["back\\slash"]), "['back\\\\slash']");
    }
}
