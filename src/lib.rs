//! Scene graph and transform engine for a declarative vector-graphics subset.
//!
//! A document moves through three stages:
//! - `builder`: a single streaming pass turns document nodes into owned
//!   elements, resolving `use` references against ids seen so far
//! - `element`: the polymorphic node model and the transform contract every
//!   node honors (geometry is rewritten in place, never accumulated)
//! - `canvas`: the rasterizer boundary the finished tree draws into
//!
//! ```
//! use svgscene::{Recorder, Scene};
//!
//! let scene: Scene = r##"<svg width="64" height="64">
//!     <circle id="dot" cx="8" cy="8" r="4" fill="red"/>
//!     <use href="#dot" transform="translate(16 0)"/>
//! </svg>"##
//!     .parse()?;
//!
//! let mut canvas = Recorder::new();
//! scene.draw(&mut canvas);
//! assert_eq!(canvas.primitives.len(), 2);
//! # Ok::<(), svgscene::LoadError>(())
//! ```

pub mod builder;
pub mod canvas;
pub mod color;
pub mod element;
pub mod errors;
pub mod log;
pub mod transform;
pub mod types;

pub use builder::Scene;
pub use canvas::{Canvas, Primitive, Recorder};
pub use color::Color;
pub use element::{Element, Ellipse, Group, Polygon, Polyline, Shape};
pub use errors::LoadError;
pub use transform::Transform;
pub use types::Point;
