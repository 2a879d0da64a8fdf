// Life-size paper format comparison sheets.
//
// Lays out millimeter rulers and stacked paper outlines on a single
// page sized to a printer format, then writes it as a PDF through cairo.

#[macro_use]
extern crate error_chain;

extern crate cairo;

pub mod errors;
pub mod catalog;
pub mod layout;
pub mod ruler;
pub mod outline;
pub mod canvas;
pub mod page;
pub mod render;

//////////////////////////////////////////////////////////////////////
// pull in some types from nalgebra

pub type Vec2d = nalgebra::Vector2<f64>;
pub type Point2d = nalgebra::geometry::Point2<f64>;
