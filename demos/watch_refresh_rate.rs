// Diagnostic tool: print the active window's display mode whenever it changes
//
// Move the window between monitors or change the refresh rate in display
// settings to see the resolver pick it up.
//
// Usage: RUST_LOG=refreshrate=debug cargo run --example watch_refresh_rate

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use std::thread;
    use std::time::{Duration, Instant};

    use anyhow::Context;
    use refreshrate::platform::win32::Win32Platform;
    use refreshrate::{RefreshRateResolver, ResolverOptions, WindowSource};
    use tracing_subscriber::EnvFilter;

    const POLL_INTERVAL: Duration = Duration::from_millis(250);
    const RUN_FOR: Duration = Duration::from_secs(60);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = ResolverOptions::default().with_window_source(WindowSource::Foreground);
    let mut resolver = RefreshRateResolver::with_options(Win32Platform, options);

    let first = resolver
        .current_mode()
        .context("initial refresh rate query failed")?;
    println!("Display: {}", first);

    let mut last = Some(first);
    let start = Instant::now();
    while start.elapsed() < RUN_FOR {
        thread::sleep(POLL_INTERVAL);

        let query_start = Instant::now();
        let result = resolver.current_mode();
        let query_us = query_start.elapsed().as_secs_f64() * 1e6;

        match result {
            Ok(mode) if last != Some(mode) => {
                println!("Display changed: {} (query {:.0} us)", mode, query_us);
                last = Some(mode);
            }
            Ok(_) => {}
            Err(err) if err.is_not_found() => {
                // Transient while monitors are reconfigured
                if last.take().is_some() {
                    println!("No display output for the current window");
                }
            }
            Err(err) => return Err(err).context("refresh rate query failed"),
        }
    }

    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("watch_refresh_rate requires Windows");
}
