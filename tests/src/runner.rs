//! Scenario runner.

use scene_converter::{ConverterConfig, JsonConverter};
use scene_loaders::LoaderRegistry;
use scene_playground::{playground_registry, register_playground_loaders};

use crate::assertion::Context;
use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::Scenario;

/// Runs a scenario against the playground configuration.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    scene: String,
}

impl<'s> Runner<'s> {
    /// Create a new runner for a scenario.
    pub fn new(scenario: &'s Scenario) -> ScenarioResult<Self> {
        let scene = scenario.load_scene()?;
        Ok(Self { scenario, scene })
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        // 1. Build a fresh registry and loader table for this scenario
        let registry = playground_registry().map_err(|e| ScenarioError::setup(e.to_string()))?;
        let mut loaders = LoaderRegistry::with_defaults();
        register_playground_loaders(&mut loaders)
            .map_err(|e| ScenarioError::setup(e.to_string()))?;

        // 2. Convert
        let config = match self.scenario.converter_config() {
            Some(text) => ConverterConfig::from_json_str(text)
                .map_err(|e| ScenarioError::setup(e.to_string()))?,
            None => ConverterConfig::default(),
        };
        let converter = JsonConverter::with_config(&registry, config);
        let result = converter.convert_str(&self.scene);

        // 3. Verify
        let ctx = Context {
            registry: &registry,
            loaders: &loaders,
        };
        self.scenario
            .assertion()
            .verify(self.scenario.name(), &result, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use crate::scenario::Scenario;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_runner_with_inline_scene() {
        let scenario = Scenario::new("inline")
            .scene_source(r#"{"views": [{"@@type": "MapView", "id": "map"}]}"#)
            .expect(|a| a.instance_at("/views/0", "MapView").value_at("/views/0/id", "map"));

        scenario.run().unwrap();
    }

    #[test]
    fn test_runner_reports_failures() {
        let scenario = Scenario::new("wrong")
            .scene_source(r#"{"views": [{"@@type": "MapView"}]}"#)
            .expect(|a| a.instance_at("/views/0", "OrbitView"));

        let err = scenario.run().unwrap_err();
        assert_eq!(
            err.to_string(),
            "scenario wrong: /views/0: expected OrbitView, found MapView"
        );
    }
}
