//! Wiring Core Types and Definitions
//!
//! This crate provides the building blocks the wiring renderer draws with:
//!
//! - **Colors**: CSS color parsing and conversion ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and insets ([`geometry`] module)
//! - **Draw**: Boxes, wires and text that emit layered SVG nodes ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
