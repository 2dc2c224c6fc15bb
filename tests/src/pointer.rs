//! JSON-pointer lookup into converted scenes.

use scene_core::Value;
use scene_playground::SceneObject;

/// Find the value at `pointer` (`/layers/0/radiusScale`).
///
/// Catalog instances are traversed through their props, so a pointer can
/// reach into a layer the same way it reaches into a plain object.
pub fn lookup<'v>(value: &'v Value, pointer: &str) -> Option<&'v Value> {
    if pointer.is_empty() {
        return Some(value);
    }
    let rest = pointer.strip_prefix('/')?;

    rest.split('/').try_fold(value, |current, raw| {
        let token = raw.replace("~1", "/").replace("~0", "~");
        match current {
            Value::Object(props) => props.get(&token),
            Value::List(items) => token.parse::<usize>().ok().and_then(|i| items.get(i)),
            Value::Instance(instance) => instance
                .downcast_ref::<SceneObject>()
                .and_then(|object| object.props.get(&token)),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_core::props;

    #[test]
    fn test_lookup_nested() {
        let value = Value::Object(props! {
            "layers" => Value::List(vec![Value::Object(props! { "a/b" => 1i64 })]),
        });

        assert_eq!(lookup(&value, ""), Some(&value));
        assert_eq!(lookup(&value, "/layers/0/a~1b"), Some(&Value::Int(1)));
        assert_eq!(lookup(&value, "/layers/1"), None);
        assert_eq!(lookup(&value, "layers"), None);
    }
}
