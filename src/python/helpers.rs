use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::config::{ResolverOptions, WindowSource};
use crate::error::RefreshRateError;

pub(super) fn parse_options(source: &str, primary_fallback: bool) -> PyResult<ResolverOptions> {
    let source = WindowSource::from_name(source).ok_or_else(|| {
        PyRuntimeError::new_err(format!(
            "invalid source '{}': expected 'active' or 'foreground'",
            source
        ))
    })?;

    Ok(ResolverOptions::default()
        .with_window_source(source)
        .with_primary_fallback(primary_fallback))
}

pub(super) fn to_py_err(err: RefreshRateError) -> PyErr {
    PyRuntimeError::new_err(err.to_string())
}
