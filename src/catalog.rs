use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;
use crate::patterns::*;

pub type DemoFn = fn(&Console, &Settings) -> Result<(), PatternError>;

/// A runnable entry.
#[derive(Clone, Copy)]
pub struct Example {
    pub name: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub run: DemoFn,
}

impl std::fmt::Debug for Example {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Example").field("name", &self.name).finish()
    }
}

pub static EXAMPLES: &[Example] = &[
    Example {
        name: "adapter",
        title: "Adapter",
        summary: "Plugs, USB audio and French names behind the interface a client expects",
        run: adapter::demo,
    },
    Example {
        name: "bridge",
        title: "Bridge",
        summary: "Remotes and devices vary independently",
        run: bridge::demo,
    },
    Example {
        name: "chain-of-responsibility",
        title: "Chain of Responsibility",
        summary: "Every logger in the chain sees every message and picks its levels",
        run: chain::demo,
    },
    Example {
        name: "command",
        title: "Command",
        summary: "A light switch with named commands and a queue of order commands",
        run: command::demo,
    },
    Example {
        name: "composite",
        title: "Composite",
        summary: "Painting companies and solo painters behind one trait",
        run: composite::demo,
    },
    Example {
        name: "decorator",
        title: "Decorator",
        summary: "Toppings stack on top of any pizza",
        run: decorator::demo,
    },
    Example {
        name: "dependency-inversion",
        title: "Dependency Inversion",
        summary: "A temperature regulator that owns its sensor and heater abstractions",
        run: dependency_inversion::demo,
    },
    Example {
        name: "facade",
        title: "Facade",
        summary: "One call books a flight, a train or a hotel",
        run: facade::demo,
    },
    Example {
        name: "factory",
        title: "Factory",
        summary: "An injector builds the view model graph for the view",
        run: factory::demo,
    },
    Example {
        name: "flyweight",
        title: "Flyweight",
        summary: "Many trees share a few tree types",
        run: flyweight::demo,
    },
    Example {
        name: "intercepting-filter",
        title: "Intercepting Filter",
        summary: "Requests pass authentication and logging filters before the target",
        run: intercepting_filter::demo,
    },
    Example {
        name: "inversion-of-control",
        title: "Inversion of Control",
        summary: "The garage decides when, the vehicle decides what",
        run: inversion_of_control::demo,
    },
    Example {
        name: "iterator",
        title: "Iterator",
        summary: "A name repository hands out independent iterators",
        run: iterator::demo,
    },
    Example {
        name: "mediator",
        title: "Mediator",
        summary: "Switch, fan and power supply only talk to the mediator",
        run: mediator::demo,
    },
    Example {
        name: "memento",
        title: "Memento",
        summary: "A text editor snapshots and restores its state",
        run: memento::demo,
    },
    Example {
        name: "open-closed",
        title: "Open-Closed Principle",
        summary: "A garage that services new vehicles without being edited",
        run: open_closed::demo,
    },
    Example {
        name: "prototype",
        title: "Prototype",
        summary: "Clone a loaded book shop instead of loading again",
        run: prototype::demo,
    },
    Example {
        name: "proxy",
        title: "Proxy",
        summary: "A proxy connection that denies blocked sites",
        run: proxy::demo,
    },
    Example {
        name: "service-locator",
        title: "Service Locator",
        summary: "A coffee store looks up and caches its machines",
        run: service_locator::demo,
    },
    Example {
        name: "state",
        title: "State",
        summary: "Authentication states own their transitions",
        run: state::demo,
    },
    Example {
        name: "strategy",
        title: "Strategy",
        summary: "Robots with swappable behaviours",
        run: strategy::demo,
    },
    Example {
        name: "visitor",
        title: "Visitor",
        summary: "New operations over animals and graphics through double dispatch",
        run: visitor::demo,
    },
];

/// Lowercase, with `_` and spaces treated as `-`.
pub fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

pub fn find(name: &str) -> Result<&'static Example, PatternError> {
    let wanted = normalize(name);
    EXAMPLES
        .iter()
        .find(|example| example.name == wanted)
        .ok_or_else(|| PatternError::UnknownExample {
            name: name.to_string(),
            suggestion: suggest(&wanted),
        })
}

/// Closest example name: one containing the input (or contained by it),
/// otherwise the one sharing the longest prefix of at least three chars.
pub fn suggest(wanted: &str) -> Option<&'static str> {
    if wanted.is_empty() {
        return None;
    }
    if let Some(example) = EXAMPLES
        .iter()
        .find(|example| example.name.contains(wanted) || wanted.contains(example.name))
    {
        return Some(example.name);
    }
    EXAMPLES
        .iter()
        .map(|example| (shared_prefix(example.name, wanted), example.name))
        .filter(|(shared, _)| *shared >= 3)
        .max_by_key(|(shared, _)| *shared)
        .map(|(_, name)| name)
}

fn shared_prefix(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// Runs one example, separating failures from the narration.
pub fn run(example: &Example, console: &Console, settings: &Settings) -> Result<(), PatternError> {
    tracing::info!(example = example.name, "running example");
    (example.run)(console, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = EXAMPLES.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), EXAMPLES.len());
    }

    #[test]
    fn test_names_are_normalized() {
        for example in EXAMPLES {
            assert_eq!(normalize(example.name), example.name);
        }
    }

    #[test]
    fn test_find_is_forgiving() {
        assert_eq!(find("Chain_Of_Responsibility").unwrap().name, "chain-of-responsibility");
        assert_eq!(find("service locator").unwrap().name, "service-locator");
        assert_eq!(find("  STATE ").unwrap().name, "state");
    }

    #[test]
    fn test_unknown_name_suggests() {
        let err = find("mediatr").unwrap_err();
        assert!(matches!(
            err,
            PatternError::UnknownExample { suggestion: Some("mediator"), .. }
        ));

        let err = find("chain").unwrap_err();
        assert!(matches!(
            err,
            PatternError::UnknownExample { suggestion: Some("chain-of-responsibility"), .. }
        ));
    }

    #[test]
    fn test_unknown_name_without_suggestion() {
        let err = find("zz").unwrap_err();
        assert!(matches!(err, PatternError::UnknownExample { suggestion: None, .. }));
    }

    #[test]
    fn test_every_example_runs_with_defaults() {
        let settings = Settings::default();
        for example in EXAMPLES {
            let console = Console::recording();
            run(example, &console, &settings)
                .unwrap_or_else(|err| panic!("{} failed: {err}", example.name));
            assert!(!console.is_empty(), "{} printed nothing", example.name);
        }
    }
}
