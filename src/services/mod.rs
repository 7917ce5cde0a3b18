//! Service modules around the analysis engine.
//!
//! Hyphenation providers feed the engine; overlay helpers consume its output.

pub mod hyphenator;
pub mod overlay;
