// Platform-free animation state. Sibling modules refer to each other through
// `super::` so the files can be `include!`d by host tests as-is.
pub mod cloud;
pub mod config;
pub mod constants;
pub mod lifecycle;
pub mod parallax;
pub mod pool;
pub mod ray;
pub mod trail;

pub use cloud::{Cloud, CloudField};
pub use config::{CloudConfig, RayConfig, TrailConfig, Viewport};
pub use lifecycle::PageHide;
pub use parallax::ParallaxLayer;
pub use ray::{PathOp, Ray, RayField};
pub use trail::{PointerState, Trail};
