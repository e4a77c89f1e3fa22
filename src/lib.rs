//! # refreshrate
//!
//! Active refresh rate of the monitor showing the current window.
//!
//! Meant to be called every frame by a host that paces its rendering to the
//! physical display. The first call creates a D3D11 device and finds the DXGI
//! output under the window; later calls only re-check that the window is
//! still on that output's monitor before asking it for its current mode.
//!
//! ## Rust usage
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn main() {
//! use refreshrate::platform::win32::Win32Platform;
//! use refreshrate::RefreshRateResolver;
//!
//! let mut resolver = RefreshRateResolver::new(Win32Platform);
//! let rate = resolver.current_refresh_rate().unwrap();
//! println!("{} ({:.3} Hz)", rate, rate.hz());
//! # }
//! # #[cfg(not(windows))]
//! # fn main() {}
//! ```
//!
//! ## C usage
//!
//! ```c
//! uint32_t num, den;
//! HRESULT hr = GetCurrentRefreshRate(&num, &den);
//! ```

pub mod config;
pub mod error;
#[cfg(windows)]
pub mod ffi;
pub mod platform;
#[cfg(all(windows, feature = "python"))]
mod python;
pub mod rate;
pub mod resolver;

pub use config::{FeatureLevel, ResolverOptions, WindowSource};
pub use error::{PlatformCode, RefreshRateError};
pub use platform::{DisplayPlatform, MonitorId, WindowHandle};
pub use rate::{DisplayMode, RefreshRate};
pub use resolver::RefreshRateResolver;
