// Error types for refresh rate queries

use std::fmt;

use thiserror::Error;

/// `DXGI_ERROR_NOT_FOUND`: no adapter/output at the requested index.
pub const NOT_FOUND_STATUS: i32 = 0x887A_0002_u32 as i32;

/// `E_POINTER`: a null output pointer was passed to the C ABI.
pub const INVALID_POINTER_STATUS: i32 = 0x8000_4003_u32 as i32;

/// Raw status code (HRESULT) reported by the display subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformCode(pub i32);

impl PlatformCode {
    pub const NOT_FOUND: PlatformCode = PlatformCode(NOT_FOUND_STATUS);
}

impl fmt::Display for PlatformCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0 as u32)
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for PlatformCode {
    fn from(err: windows::core::Error) -> Self {
        PlatformCode(err.code().0)
    }
}

/// Why a refresh rate query failed
///
/// Every variant except `NotFound` carries the platform code of the call
/// that failed. `NotFound` is the expected outcome while a monitor is being
/// connected or disconnected; callers usually retry on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RefreshRateError {
    /// Device creation or one of the adapter/factory lookups failed
    #[error("graphics device initialization failed ({0})")]
    InitializationFailed(PlatformCode),
    /// The cached output could not describe itself
    #[error("output descriptor query failed ({0})")]
    DescriptorQueryFailed(PlatformCode),
    /// Adapter or output enumeration failed
    #[error("display enumeration failed ({0})")]
    EnumerationFailed(PlatformCode),
    /// No display output corresponds to the window's monitor
    #[error("no display output matches the window's monitor")]
    NotFound,
    /// The output could not report its current mode
    #[error("display mode query failed ({0})")]
    ModeQueryFailed(PlatformCode),
}

impl RefreshRateError {
    /// Underlying platform code, if the failure came from a platform call.
    pub fn platform_code(&self) -> Option<PlatformCode> {
        match *self {
            Self::InitializationFailed(code)
            | Self::DescriptorQueryFailed(code)
            | Self::EnumerationFailed(code)
            | Self::ModeQueryFailed(code) => Some(code),
            Self::NotFound => None,
        }
    }

    /// Status code to hand back to a C caller (always a failure HRESULT).
    pub fn status(&self) -> i32 {
        self.platform_code().map_or(NOT_FOUND_STATUS, |code| code.0)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, RefreshRateError>;
