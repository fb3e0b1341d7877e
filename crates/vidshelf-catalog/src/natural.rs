//! Natural ("human") ordering of names and relative paths.
//!
//! Names are split into alternating runs of ASCII digits and other text.
//! Text runs compare case-insensitively, digit runs compare by numeric value,
//! so `ep2` sorts before `ep10`. Ties are broken on the raw bytes, which makes
//! the ordering total: two different names never compare equal.

use std::cmp::Ordering;
use std::path::{Component, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Text(&'a str),
    Number(&'a str),
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let first = self.rest.chars().next()?;
        let numeric = first.is_ascii_digit();
        let split = self
            .rest
            .find(|c: char| c.is_ascii_digit() != numeric)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(if numeric {
            Chunk::Number(run)
        } else {
            Chunk::Text(run)
        })
    }
}

fn chunks(s: &str) -> Chunks<'_> {
    Chunks { rest: s }
}

/// Compare two digit runs by value without parsing, so arbitrarily long runs
/// never overflow.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn cmp_chunk(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Number(x), Chunk::Number(y)) => cmp_numeric(x, y),
        (Chunk::Text(x), Chunk::Text(y)) => cmp_text(x, y),
        (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
    }
}

/// Natural comparison of two names.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use vidshelf_catalog::natural::natural_cmp;
///
/// assert_eq!(natural_cmp("ep2.mp4", "ep10.mp4"), Ordering::Less);
/// assert_eq!(natural_cmp("Ep3", "ep2"), Ordering::Greater);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match cmp_chunk(x, y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

fn component_str(component: Component<'_>) -> std::borrow::Cow<'_, str> {
    component.as_os_str().to_string_lossy()
}

/// Natural comparison of two paths, component by component.
///
/// A directory's contents stay together: `a/ep10.mp4` sorts after
/// `a/ep2.mp4` and before `b/ep1.mp4`.
pub fn natural_path_cmp(a: &Path, b: &Path) -> Ordering {
    let mut left = a.components();
    let mut right = b.components();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.as_os_str().cmp(b.as_os_str()),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match natural_cmp(&component_str(x), &component_str(y)) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}
