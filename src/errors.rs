//! Typed error values with diagnostics using miette
//!
//! Every fallible operation in this crate fails with exactly one of these
//! kinds. None of the failing operations has side effects, so a failure
//! never leaves partial state behind; presentation (dialog, log, panic)
//! is the caller's business.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Rect construction
// ============================================================================

/// Errors from the validating `Rect` constructor
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum RectError {
    #[error("edge is NaN")]
    #[diagnostic(code(pagegeom::rect::nan))]
    NaN,

    #[error("edge is infinite")]
    #[diagnostic(code(pagegeom::rect::infinite))]
    Infinite,

    #[error("inverted rect: bottom < top or right < left")]
    #[diagnostic(
        code(pagegeom::rect::inverted),
        help("zero-area rects are legal; negative-extent rects are not")
    )]
    Inverted,
}

// ============================================================================
// Unit conversion
// ============================================================================

/// Errors from unit-name lookup
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("unknown unit: {name}")]
    #[diagnostic(
        code(pagegeom::units::unknown_unit),
        help("known units: pt, mm, in, px, cm, pc, ag, ci (full names work too)")
    )]
    UnknownUnit { name: String },
}

// ============================================================================
// Random placement
// ============================================================================

/// Errors from random placement
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum PlacementError {
    #[error(
        "a {frame_width}x{frame_height} frame with padding {padding} cannot fit in {area_width}x{area_height}"
    )]
    #[diagnostic(
        code(pagegeom::place::out_of_bounds),
        help("shrink the frame or the padding, or grow the area")
    )]
    OutOfBounds {
        frame_width: f64,
        frame_height: f64,
        area_width: f64,
        area_height: f64,
        padding: f64,
    },
}

// ============================================================================
// Range remapping
// ============================================================================

/// Errors from range remapping
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("degenerate input range: {in_min} == {in_max}")]
    #[diagnostic(
        code(pagegeom::lerp::degenerate_range),
        help("the input range must have nonzero width")
    )]
    DegenerateRange { in_min: f64, in_max: f64 },
}
