#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Evaluation core for an interactive Bezier curve/surface viewer.
//!
//! The crate owns the geometry: a planar cubic Bezier curve, a bicubic Bezier
//! patch, and the step-driven tessellation that turns either into a point list
//! once per frame. Windowing, GPU upload and the widget layer live in the host
//! application and only ever see `Point3` sequences coming out of [`geom`].
//!
//! [`scene`] carries the editable state the host mutates between frames
//! (control points, sample steps, the selected patch cell) so that input
//! handling and rendering share one source of truth.

pub mod geom;
pub mod scene;
