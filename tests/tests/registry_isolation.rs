//! Registry isolation tests.
//!
//! Registries are plain values: two builds never share state, and a built
//! registry can be read from many threads at once.

use std::sync::Arc;
use std::thread;

use scene_converter::JsonConverter;
use scene_core::{Constant, Value};
use scene_loaders::{LoaderError, LoaderRegistry};
use scene_playground::{
    csv_loader, playground_builder, playground_registry, register_playground_loaders,
    CatalogClass, SceneObject,
};
use scene_registry::{Provider, RegistryError};

// ========== TEST: concurrent_readers ==========
#[test]
fn test_concurrent_readers_share_one_registry() {
    // GIVEN one built registry
    let registry = playground_registry().unwrap();
    let scene = r#"{"layers": [{"@@type": "TripsLayer", "id": "trips", "loaders": ["@@#DracoLoader"]}]}"#;

    // WHEN several threads convert against it
    let results: Vec<Value> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| JsonConverter::new(&registry).convert_str(scene).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // THEN every thread sees the same classes and the same constant
    let draco = registry.constants().get("DracoLoader").unwrap();
    for result in &results {
        let layers = result.as_object().unwrap()["layers"].as_list().unwrap();
        let layer = layers[0].as_instance().unwrap();
        assert_eq!(layer.class(), "TripsLayer");

        let object = layer.downcast_ref::<SceneObject>().unwrap();
        let loader = object.props["loaders"].as_list().unwrap()[0].as_constant().unwrap();
        assert!(loader.ptr_eq(draco));
    }
}

// ========== TEST: independent_registries ==========
#[test]
fn test_builds_are_independent() {
    // GIVEN the stock playground registry and one extended with a custom layer
    let stock = playground_registry().unwrap();
    let custom = playground_builder()
        .unwrap()
        .provider(
            Provider::named("my-layers")
                .unwrap()
                .class(CatalogClass::layer("WindLayer", "my-layers")),
        )
        .constant("Tileset", Constant::new("tiles.json"))
        .build()
        .unwrap();

    // THEN only the extended one knows the additions
    assert!(custom.classes().contains("WindLayer"));
    assert!(custom.constants().contains("Tileset"));
    assert!(!stock.classes().contains("WindLayer"));
    assert!(matches!(
        stock.constants().get("Tileset"),
        Err(RegistryError::UnknownConstant(_))
    ));

    // AND separately built registries hold separate constants
    let again = playground_registry().unwrap();
    let a = stock.constants().get("DracoLoader").unwrap();
    let b = again.constants().get("DracoLoader").unwrap();
    assert!(!a.ptr_eq(b));
}

// ========== TEST: shared_constructor_identity ==========
#[test]
fn test_class_lookup_is_identity_preserving() {
    let registry = playground_registry().unwrap();

    let first = registry.classes().get("ArcLayer").unwrap();
    let second = registry.classes().get("ArcLayer").unwrap();

    assert!(Arc::ptr_eq(first, second));
}

// ========== TEST: loader_registration_idempotent ==========
#[test]
fn test_loader_registration_is_idempotent() {
    // GIVEN a loader table with the playground formats
    let mut loaders = LoaderRegistry::with_defaults();
    register_playground_loaders(&mut loaders).unwrap();
    let before = loaders.len();

    // WHEN the formats are registered again
    let added = register_playground_loaders(&mut loaders).unwrap();

    // THEN nothing changes
    assert_eq!(added, 0);
    assert_eq!(loaders.len(), before);
    assert_eq!(loaders.select("data.tsv", None).unwrap().id, "csv");
}

// ========== TEST: loader_tables_are_independent ==========
#[test]
fn test_loader_tables_are_independent() {
    let mut with_csv = LoaderRegistry::with_defaults();
    register_playground_loaders(&mut with_csv).unwrap();
    let plain = LoaderRegistry::with_defaults();

    assert!(with_csv.contains("csv"));
    assert!(!plain.contains("csv"));
    assert!(matches!(
        plain.select("https://example.com/heatmap-data.csv", None),
        Err(LoaderError::NoMatchingLoader { .. })
    ));
}

// ========== TEST: conflicting_loader_rejected ==========
#[test]
fn test_conflicting_loader_rejected() {
    let mut loaders = LoaderRegistry::with_defaults();
    register_playground_loaders(&mut loaders).unwrap();

    let imposter = csv_loader().extensions(["txt"]);
    let err = loaders.register([imposter]).unwrap_err();

    assert!(matches!(err, LoaderError::Conflict { .. }));
    assert!(loaders.select("notes.txt", None).is_err());
}
