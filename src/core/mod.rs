//! Core steps of an import run: the running-calibre guard, library selection,
//! input file validation and the calibredb call, plus the run configuration.
//! These are consumed by the high-level `api` module.
pub mod guard;
pub mod importer;
pub mod params;
pub mod selector;
pub mod validate;
