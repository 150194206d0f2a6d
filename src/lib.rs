//! Pure geometry core for page-layout drawing helpers.
//!
//! Page-layout hosts own the shapes; this crate owns the arithmetic. It
//! computes bounding-box math (centering, alignment, translation), random
//! placement within padded bounds, measurement-unit conversion over a fixed
//! table, and scalar/color interpolation, all as pure functions over value
//! types. The host document model is reached only through the narrow
//! [`HostCanvas`] seam, so every computation stays testable without a host.
//!
//! ```
//! use glam::dvec2;
//! use pagegeom::{Rect, Unit, convert};
//!
//! // US Letter in points
//! let page = Rect::new(0.0, 0.0, 792.0, 612.0);
//! let frame = Rect::from_origin_size(dvec2(36.0, 36.0), dvec2(144.0, 72.0));
//!
//! let centered = frame.centered_in(&page);
//! assert_eq!(centered.center(), page.center());
//! assert_eq!(convert(1.0, Unit::Inches, Unit::Points), 72.0);
//! ```

pub mod canvas;
pub mod errors;
pub mod lerp;
pub mod log;
pub mod place;
pub mod types;
pub mod units;

pub use canvas::{HostCanvas, align_item, center_item, nudge_item, scatter_item};
pub use errors::{PlacementError, RangeError, RectError, UnitError};
pub use lerp::{Channels, lerp, lerp_color, map_range};
pub use place::{random_rect_within, scatter_rect_within};
pub use types::{HAlign, Rect, VAlign};
pub use units::{Unit, convert, convert_between};
