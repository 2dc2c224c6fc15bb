//! The deck.gl view and layer catalog.
//!
//! Rendering is not done here. Each catalog class records the props it was
//! given in a [`SceneObject`] so a host renderer can pick them up.

use scene_core::{Instance, Props, Value};
use scene_registry::{ConstructError, Constructible, Provider, RegistryResult};

/// Whether a catalog class is a view or a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    View,
    Layer,
}

/// An instantiated view or layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub class: &'static str,
    pub package: &'static str,
    pub props: Props,
}

impl SceneObject {
    /// The `id` prop, defaulting to the class name like deck.gl does.
    pub fn id(&self) -> &str {
        self.props
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or(self.class)
    }
}

/// A constructor for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogClass {
    name: &'static str,
    package: &'static str,
    kind: ObjectKind,
}

impl CatalogClass {
    pub const fn view(name: &'static str, package: &'static str) -> Self {
        Self {
            name,
            package,
            kind: ObjectKind::View,
        }
    }

    pub const fn layer(name: &'static str, package: &'static str) -> Self {
        Self {
            name,
            package,
            kind: ObjectKind::Layer,
        }
    }
}

impl Constructible for CatalogClass {
    fn class_name(&self) -> &str {
        self.name
    }

    fn construct(&self, props: Props) -> Result<Instance, ConstructError> {
        if let Some(id) = props.get("id") {
            if id.as_str().is_none() {
                return Err(ConstructError::invalid_prop(
                    self.name,
                    "id",
                    "String",
                    id.type_name(),
                ));
            }
        }

        Ok(Instance::new(
            self.name,
            SceneObject {
                kind: self.kind,
                class: self.name,
                package: self.package,
                props,
            },
        ))
    }
}

const CORE: &str = "@deck.gl/core";
const LAYERS: &str = "@deck.gl/layers";
const AGGREGATION_LAYERS: &str = "@deck.gl/aggregation-layers";
const GEO_LAYERS: &str = "@deck.gl/geo-layers";
const MESH_LAYERS: &str = "@deck.gl/mesh-layers";

fn provider(package: &'static str, classes: &[CatalogClass]) -> RegistryResult<Provider> {
    Ok(classes
        .iter()
        .fold(Provider::named(package)?, |provider, class| provider.class(*class)))
}

fn layer_provider(package: &'static str, names: &[&'static str]) -> RegistryResult<Provider> {
    let classes: Vec<CatalogClass> = names
        .iter()
        .map(|&name| CatalogClass::layer(name, package))
        .collect();
    provider(package, &classes)
}

/// Views from `@deck.gl/core`.
pub fn core_views() -> RegistryResult<Provider> {
    provider(
        CORE,
        &[
            CatalogClass::view("MapView", CORE),
            CatalogClass::view("FirstPersonView", CORE),
            CatalogClass::view("OrbitView", CORE),
            CatalogClass::view("OrthographicView", CORE),
        ],
    )
}

/// Layers from `@deck.gl/layers`.
pub fn layers() -> RegistryResult<Provider> {
    layer_provider(
        LAYERS,
        &[
            "ArcLayer",
            "BitmapLayer",
            "IconLayer",
            "LineLayer",
            "PointCloudLayer",
            "ScatterplotLayer",
            "ColumnLayer",
            "GridCellLayer",
            "PathLayer",
            "PolygonLayer",
            "GeoJsonLayer",
            "TextLayer",
            "SolidPolygonLayer",
        ],
    )
}

/// Layers from `@deck.gl/aggregation-layers`.
pub fn aggregation_layers() -> RegistryResult<Provider> {
    layer_provider(
        AGGREGATION_LAYERS,
        &[
            "ScreenGridLayer",
            "CPUGridLayer",
            "HexagonLayer",
            "ContourLayer",
            "GridLayer",
            "GPUGridLayer",
            "HeatmapLayer",
        ],
    )
}

/// Layers from `@deck.gl/geo-layers`.
pub fn geo_layers() -> RegistryResult<Provider> {
    layer_provider(
        GEO_LAYERS,
        &[
            "GreatCircleLayer",
            "S2Layer",
            "QuadkeyLayer",
            "TileLayer",
            "TripsLayer",
            "H3ClusterLayer",
            "H3HexagonLayer",
            "Tile3DLayer",
            "TerrainLayer",
            "MVTLayer",
        ],
    )
}

/// Layers from `@deck.gl/mesh-layers`.
pub fn mesh_layers() -> RegistryResult<Provider> {
    layer_provider(MESH_LAYERS, &["SimpleMeshLayer", "ScenegraphLayer"])
}
