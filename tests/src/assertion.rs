//! Assertion types and builders for verifying conversion results.

use scene_converter::ConvertError;
use scene_core::Value;
use scene_loaders::LoaderRegistry;
use scene_playground::data_sources;
use scene_registry::Registry;

use crate::error::{ScenarioError, ScenarioResult};
use crate::pointer::lookup;

/// A single expectation about a conversion.
#[derive(Debug, Clone)]
enum Check {
    InstanceAt { pointer: String, class: String },
    ValueAt { pointer: String, value: Value },
    ConstantAt { pointer: String, name: String },
    DataLoader { url: String, loader: Option<String> },
    UnknownIdentifier { identifier: String, path: String },
    ConstructErrorAt { path: String },
    ErrorContains(String),
}

impl Check {
    fn expects_error(&self) -> bool {
        matches!(
            self,
            Check::UnknownIdentifier { .. } | Check::ConstructErrorAt { .. } | Check::ErrorContains(_)
        )
    }
}

/// Everything a check may need to consult besides the result itself.
pub(crate) struct Context<'a> {
    pub registry: &'a Registry,
    pub loaders: &'a LoaderRegistry,
}

/// A complete assertion for a scenario result.
#[derive(Debug, Default)]
pub struct Assertion {
    checks: Vec<Check>,
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Verify a conversion result. Returns a message describing the first failure.
    pub(crate) fn verify(
        &self,
        scenario: &str,
        result: &Result<Value, ConvertError>,
        ctx: &Context<'_>,
    ) -> ScenarioResult<()> {
        let fail = |message: String| Err(ScenarioError::assertion_failed(scenario, message));
        let wants_error = self.checks.iter().any(Check::expects_error);

        let value = match (result, wants_error) {
            (Ok(value), false) => Some(value),
            (Err(e), false) => return fail(format!("conversion failed: {}", e)),
            (Ok(_), true) => return fail("expected conversion to fail".into()),
            (Err(_), true) => None,
        };

        for check in &self.checks {
            match (check, value, result) {
                (Check::InstanceAt { pointer, class }, Some(value), _) => {
                    let found = lookup(value, pointer).and_then(Value::as_instance);
                    match found {
                        Some(instance) if instance.class() == class => {}
                        Some(instance) => {
                            return fail(format!(
                                "{}: expected {}, found {}",
                                pointer,
                                class,
                                instance.class()
                            ))
                        }
                        None => return fail(format!("{}: no instance", pointer)),
                    }
                }
                (Check::ValueAt { pointer, value: expected }, Some(value), _) => {
                    match lookup(value, pointer) {
                        Some(actual) if actual == expected => {}
                        actual => {
                            return fail(format!(
                                "{}: expected {}, found {:?}",
                                pointer, expected, actual
                            ))
                        }
                    }
                }
                (Check::ConstantAt { pointer, name }, Some(value), _) => {
                    let expected = ctx
                        .registry
                        .constants()
                        .get(name)
                        .map_err(|e| ScenarioError::setup(e.to_string()))?;
                    match lookup(value, pointer).and_then(Value::as_constant) {
                        Some(actual) if actual.ptr_eq(expected) => {}
                        _ => return fail(format!("{}: expected constant {}", pointer, name)),
                    }
                }
                (Check::DataLoader { url, loader }, Some(value), _) => {
                    let sources = data_sources(value, ctx.loaders);
                    match sources.iter().find(|s| &s.url == url) {
                        Some(source) if &source.loader == loader => {}
                        Some(source) => {
                            return fail(format!(
                                "{}: expected loader {:?}, found {:?}",
                                url, loader, source.loader
                            ))
                        }
                        None => return fail(format!("no data source {}", url)),
                    }
                }
                (Check::UnknownIdentifier { identifier, path }, _, Err(e)) => match e {
                    ConvertError::UnknownIdentifier {
                        identifier: actual_identifier,
                        path: actual_path,
                        ..
                    } if actual_identifier == identifier && actual_path == path => {}
                    other => {
                        return fail(format!(
                            "expected unknown identifier {} at {}, got: {}",
                            identifier, path, other
                        ))
                    }
                },
                (Check::ConstructErrorAt { path }, _, Err(e)) => match e {
                    ConvertError::Construct {
                        path: actual_path, ..
                    } if actual_path == path => {}
                    other => {
                        return fail(format!("expected construct error at {}, got: {}", path, other))
                    }
                },
                (Check::ErrorContains(text), _, Err(e)) => {
                    if !e.to_string().contains(text.as_str()) {
                        return fail(format!("error {:?} does not contain {:?}", e.to_string(), text));
                    }
                }
                (check, _, _) => {
                    return fail(format!("cannot combine {:?} with error expectations", check))
                }
            }
        }
        Ok(())
    }
}

/// Builder for assertions.
#[derive(Debug, Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(mut self, check: Check) -> Self {
        self.assertion.checks.push(check);
        self
    }

    /// Expect an instance of `class` at `pointer`.
    pub fn instance_at(self, pointer: &str, class: &str) -> Self {
        self.check(Check::InstanceAt {
            pointer: pointer.into(),
            class: class.into(),
        })
    }

    /// Expect `value` at `pointer`.
    pub fn value_at(self, pointer: &str, value: impl Into<Value>) -> Self {
        self.check(Check::ValueAt {
            pointer: pointer.into(),
            value: value.into(),
        })
    }

    /// Expect the registry constant `name`, by identity, at `pointer`.
    pub fn constant_at(self, pointer: &str, name: &str) -> Self {
        self.check(Check::ConstantAt {
            pointer: pointer.into(),
            name: name.into(),
        })
    }

    /// Expect a layer `data` URL to be handled by `loader` (`None`: by nothing).
    pub fn data_loader(self, url: &str, loader: Option<&str>) -> Self {
        self.check(Check::DataLoader {
            url: url.into(),
            loader: loader.map(String::from),
        })
    }

    /// Expect conversion to fail on an unknown identifier at `path`.
    pub fn unknown_identifier(self, identifier: &str, path: &str) -> Self {
        self.check(Check::UnknownIdentifier {
            identifier: identifier.into(),
            path: path.into(),
        })
    }

    /// Expect a constructor to reject the props of the object at `path`.
    pub fn construct_error_at(self, path: &str) -> Self {
        self.check(Check::ConstructErrorAt { path: path.into() })
    }

    /// Expect conversion to fail with a message containing `text`.
    pub fn error_contains(self, text: &str) -> Self {
        self.check(Check::ErrorContains(text.into()))
    }

    pub fn build(self) -> Assertion {
        self.assertion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_checks() {
        let assertion = AssertionBuilder::new()
            .instance_at("/layers/0", "ScatterplotLayer")
            .value_at("/layers/0/radiusScale", 6i64)
            .build();

        assert_eq!(assertion.checks.len(), 2);
        assert!(!assertion.checks.iter().any(Check::expects_error));
    }

    #[test]
    fn test_error_checks_flagged() {
        let assertion = AssertionBuilder::new()
            .unknown_identifier("Nonexistent", "/@@type")
            .build();

        assert!(assertion.checks.iter().any(Check::expects_error));
    }
}
