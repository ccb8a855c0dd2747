//! Iterator: the repository hands out iterators that each track their own
//! position, so clients never index into the storage.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

/// Collections that can produce a fresh iterator on request.
pub trait Container {
    type Iter<'a>: Iterator
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_>;
}

pub struct NameRepository {
    names: Vec<String>,
}

impl Default for NameRepository {
    fn default() -> Self {
        Self::new(["Robert", "John", "Julie", "Lora"])
    }
}

impl NameRepository {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Container for NameRepository {
    type Iter<'a> = NameIterator<'a>;

    fn iter(&self) -> NameIterator<'_> {
        NameIterator {
            names: &self.names,
            index: 0,
        }
    }
}

impl<'a> IntoIterator for &'a NameRepository {
    type Item = &'a str;
    type IntoIter = NameIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct NameIterator<'a> {
    names: &'a [String],
    index: usize,
}

impl NameIterator<'_> {
    pub fn has_next(&self) -> bool {
        self.index < self.names.len()
    }
}

impl<'a> Iterator for NameIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.get(self.index)?;
        self.index += 1;
        Some(name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.names.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NameIterator<'_> {}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let repository = NameRepository::default();

    let mut names = repository.iter();
    while names.has_next() {
        if let Some(name) = names.next() {
            console.say(name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_all_names_in_order() {
        let repository = NameRepository::default();
        let names: Vec<&str> = repository.iter().collect();
        assert_eq!(names, vec!["Robert", "John", "Julie", "Lora"]);
    }

    #[test]
    fn test_iterators_are_independent() {
        let repository = NameRepository::default();
        let mut first = repository.iter();
        let mut second = repository.iter();

        first.next();
        first.next();
        assert_eq!(first.next(), Some("Julie"));
        assert_eq!(second.next(), Some("Robert"));
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn test_exhausted_iterator() {
        let repository = NameRepository::new(["Solo"]);
        let mut names = repository.iter();
        assert!(names.has_next());
        assert_eq!(names.next(), Some("Solo"));
        assert!(!names.has_next());
        assert_eq!(names.next(), None);
        assert_eq!(names.next(), None);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let repository = NameRepository::new(["a", "b"]);
        let mut joined = String::new();
        for name in &repository {
            joined.push_str(name);
        }
        assert_eq!(joined, "ab");
    }

    #[test]
    fn test_demo_output() {
        let console = Console::recording();
        demo(&console, &Settings::default()).unwrap();
        assert_eq!(console.lines(), vec!["Robert", "John", "Julie", "Lora"]);
    }
}
