//! Platform-independent core of the destination globe.
//!
//! Geographic coordinates go through [`projection`] to screen space, the
//! [`render`] pass draws onto any [`DrawSurface`], and [`GlobeController`]
//! owns orientation, pointer gesture, selection and view state. The
//! browser front-end supplies a canvas-backed surface and a DOM-backed
//! [`DetailsPanel`].
//!
//! The catalog passed to a controller is never empty; [`Catalog::new`]
//! rejects empty input.

pub mod catalog;
pub mod constants;
pub mod controller;
pub mod orientation;
pub mod panel;
pub mod params;
pub mod pins;
pub mod pointer;
pub mod projection;
pub mod render;
pub mod scheduler;
pub mod surface;
pub mod view;

pub use catalog::{Catalog, CatalogError, Destination};
pub use controller::{FrameOutcome, GlobeController};
pub use orientation::{Orientation, Step};
pub use panel::DetailsPanel;
pub use params::GlobeParams;
pub use pins::{PinFrame, ProjectedPin};
pub use pointer::PointerGesture;
pub use projection::GlobeGeometry;
pub use scheduler::FrameLoop;
pub use surface::{DrawSurface, Paint, RadialGradient};
pub use view::ViewState;
