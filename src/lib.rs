//! Curve Editor Library.
//! Kurvenmodell, Interaktion, Dateiformat und Rendering als Library
//! exportiert für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod curve_file;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InteractionState, PointerButton, UiState,
    ViewState,
};
pub use core::{ControlPoint, CoordinateMapper, CurveModel, PointId, SampledCurve};
pub use curve_file::{parse_curve_file, write_curve_file, CurveFile, CurveFileError};
pub use shared::{EditorOptions, RenderScene};
