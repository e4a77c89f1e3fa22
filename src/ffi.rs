// C ABI entry point for hosts that load the DLL directly
//
// Each calling thread gets its own resolver, created on first call and kept
// for the life of the thread. Hosts call from their render thread, so in
// practice there is exactly one.

use std::cell::RefCell;

use crate::error::{Result, INVALID_POINTER_STATUS};
use crate::platform::win32::Win32Platform;
use crate::rate::RefreshRate;
use crate::resolver::RefreshRateResolver;

const S_OK: i32 = 0;

thread_local! {
    static RESOLVER: RefCell<Option<RefreshRateResolver<Win32Platform>>> = const { RefCell::new(None) };
}

/// Refresh rate of the active window's display, through this thread's resolver.
pub fn query_current_refresh_rate() -> Result<RefreshRate> {
    RESOLVER.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(|| RefreshRateResolver::new(Win32Platform))
            .current_refresh_rate()
    })
}

/// Write the active window's display refresh rate as numerator/denominator.
///
/// Returns `S_OK` on success. On failure returns the failing call's HRESULT
/// (`DXGI_ERROR_NOT_FOUND` when no output matches the window's monitor) and
/// leaves both out-parameters untouched.
///
/// The D3D11 device and cached output belong to the calling thread: the
/// first call on a thread creates them, and they are released when that
/// thread exits. Call from one thread (the render thread) to keep a single
/// device for the whole process.
///
/// # Safety
/// Both pointers must be null or valid for a `u32` write. Null pointers are
/// rejected with `E_POINTER`.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn GetCurrentRefreshRate(
    out_numerator: *mut u32,
    out_denominator: *mut u32,
) -> i32 {
    if out_numerator.is_null() || out_denominator.is_null() {
        return INVALID_POINTER_STATUS;
    }

    match query_current_refresh_rate() {
        Ok(rate) => {
            // SAFETY: both pointers checked non-null; validity is the caller's contract.
            *out_numerator = rate.numerator;
            *out_denominator = rate.denominator;
            S_OK
        }
        Err(err) => err.status(),
    }
}
