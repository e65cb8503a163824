use crate::types::{ExtractConfig, Property};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{map, Value};
use std::collections::HashSet;

// QML property names must start with a lowercase letter or underscore
static QML_PROPERTY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z_][A-Za-z0-9_]*$").unwrap()
});

/// Problem with a qualified name; reported, never corrected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameIssue {
    /// The name was already emitted earlier in the document
    Duplicate(String),
    /// The name does not match QML's property naming rules
    InvalidIdentifier(String),
}

/// Tracks emitted names and flags the ones QML will choke on
#[derive(Debug, Default)]
pub struct NameChecker {
    seen: HashSet<String>,
}

impl NameChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` and return every issue found with it
    pub fn check(&mut self, name: &str) -> Vec<NameIssue> {
        let mut issues = Vec::new();
        if !self.seen.insert(name.to_string()) {
            issues.push(NameIssue::Duplicate(name.to_string()));
        }
        if !QML_PROPERTY_REGEX.is_match(name) {
            issues.push(NameIssue::InvalidIdentifier(name.to_string()));
        }
        issues
    }
}

/// Pending keys of one object, plus the prefix its markers are qualified with
struct Frame<'a> {
    prefix: String,
    entries: map::Iter<'a>,
}

/// Walks a JSON document and collects marker strings as QML properties
pub struct PropertyExtractor {
    config: ExtractConfig,
}

impl PropertyExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        PropertyExtractor { config }
    }

    /// Collect every property in the document, in document order
    pub fn extract(&self, document: &Value) -> Vec<Property> {
        let mut properties = Vec::new();
        let result: Result<(), std::convert::Infallible> = self.walk(document, |property| {
            properties.push(property);
            Ok(())
        });
        match result {
            Ok(()) => properties,
            Err(never) => match never {},
        }
    }

    /// Depth-first, pre-order walk calling `emit` for each property as it is found.
    ///
    /// A non-object root yields nothing. Only objects are descended into;
    /// arrays and scalars are skipped wholesale. Uses an explicit stack so
    /// deeply nested input cannot exhaust the call stack.
    pub fn walk<E, F>(&self, document: &Value, mut emit: F) -> Result<(), E>
    where
        F: FnMut(Property) -> Result<(), E>,
    {
        let Value::Object(root) = document else {
            debug!("document root is not an object, nothing to extract");
            return Ok(());
        };

        let mut checker = NameChecker::new();
        let mut stack = vec![Frame {
            prefix: String::new(),
            entries: root.iter(),
        }];

        while let Some(frame) = stack.last_mut() {
            let Some((key, value)) = frame.entries.next() else {
                stack.pop();
                continue;
            };

            match value {
                Value::String(text) if *key == self.config.marker => {
                    let name = self.config.qualify(&frame.prefix, key);
                    for issue in checker.check(&name) {
                        match issue {
                            NameIssue::Duplicate(name) => {
                                warn!("duplicate property name '{}' is written again", name)
                            }
                            NameIssue::InvalidIdentifier(name) => {
                                warn!("'{}' is not a valid QML property name", name)
                            }
                        }
                    }
                    debug!("{} = {:?}", name, text);
                    emit(Property::new(name, text.as_str()))?;
                }
                Value::Object(child) => {
                    let prefix = self.config.child_prefix(&frame.prefix, key);
                    stack.push(Frame {
                        prefix,
                        entries: child.iter(),
                    });
                }
                _ => {}
            }
        }

        Ok(())
    }
}
