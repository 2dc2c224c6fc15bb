//! Turning converted scenes back into something printable.

use scene_core::{Constant, Instance, Value};
use scene_loaders::{LoaderDescriptor, LoaderRegistry};
use serde_json::{json, Map};

use crate::{DataSource, SceneObject};

/// Render a converted scene as JSON for display.
///
/// Catalog objects render with their class under `@@type`, loader constants
/// as `{"@@loader": id}`. Foreign instances and constants render as markers.
pub fn render(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => json!(b),
        Value::Int(i) => json!(i),
        Value::Float(f) => json!(f),
        Value::String(s) => json!(s),
        Value::List(items) => serde_json::Value::Array(items.iter().map(render).collect()),
        Value::Object(props) => serde_json::Value::Object(
            props.iter().map(|(k, v)| (k.clone(), render(v))).collect(),
        ),
        Value::Instance(instance) => render_instance(instance),
        Value::Constant(constant) => render_constant(constant),
    }
}

fn render_instance(instance: &Instance) -> serde_json::Value {
    let mut map = Map::new();
    map.insert("@@type".to_string(), json!(instance.class()));
    if let Some(object) = instance.downcast_ref::<SceneObject>() {
        for (key, value) in &object.props {
            map.insert(key.clone(), render(value));
        }
    }
    serde_json::Value::Object(map)
}

fn render_constant(constant: &Constant) -> serde_json::Value {
    match constant.downcast_ref::<LoaderDescriptor>() {
        Some(loader) => json!({ "@@loader": loader.id }),
        None => json!("<constant>"),
    }
}

/// Find every layer `data` URL in a scene and the loader that would fetch it.
pub fn data_sources(value: &Value, loaders: &LoaderRegistry) -> Vec<DataSource> {
    let mut sources = Vec::new();
    collect_sources(value, loaders, &mut sources);
    sources
}

fn collect_sources(value: &Value, loaders: &LoaderRegistry, sources: &mut Vec<DataSource>) {
    match value {
        Value::List(items) => {
            for item in items {
                collect_sources(item, loaders, sources);
            }
        }
        Value::Object(props) => {
            for item in props.values() {
                collect_sources(item, loaders, sources);
            }
        }
        Value::Instance(instance) => {
            let Some(object) = instance.downcast_ref::<SceneObject>() else {
                return;
            };
            if let Some(url) = object.props.get("data").and_then(Value::as_str) {
                sources.push(DataSource {
                    layer: object.id().to_string(),
                    url: url.to_string(),
                    loader: loaders.select(url, None).ok().map(|l| l.id.clone()),
                });
            }
            // Composite layers nest sublayers in props
            for item in object.props.values() {
                collect_sources(item, loaders, sources);
            }
        }
        _ => {}
    }
}
