pub mod constants;
pub mod layout;
pub mod mesh;
pub mod model;
pub mod motion;
pub mod orbit;
pub mod props;
pub mod resolver;
pub mod scene;
pub mod state;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use layout::{Arrangement, LayoutBody, LayoutPacker, PackerConfig, RelaxReport};
pub use mesh::{MeshData, Vertex};
pub use model::{fit_height, mesh_from_gltf_bytes, Anchor, ModelError};
pub use motion::MotionParams;
pub use orbit::{OrbitConfig, OrbitControls};
pub use resolver::{AssetLoader, AssetResolver, LoadError, LoadResult};
pub use scene::{ObjectId, ObjectKind, PlacedObject, Scene};
pub use state::*;
