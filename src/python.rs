// PyO3 Python binding layer
//
// - RefreshRateMonitor: long-lived resolver, keeps the device and cached output between calls
// - current_refresh_rate(): one-shot query with a throwaway resolver
//
// The resolver holds COM objects that stay on the thread that created them,
// so the class is unsendable: use it from the thread that constructed it.

use pyo3::prelude::*;

use self::api::current_refresh_rate;
use self::monitor::RefreshRateMonitor;

mod api;
mod helpers;
mod monitor;

/// Display refresh rate queries for frame pacing
#[pymodule]
fn refreshrate(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RefreshRateMonitor>()?;
    m.add_function(wrap_pyfunction!(current_refresh_rate, m)?)?;
    Ok(())
}
