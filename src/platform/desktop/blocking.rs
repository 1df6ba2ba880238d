use tracing::debug_span;

/// Runs repository work inline on the UI thread inside a named span.
pub fn run_blocking<F, T>(task: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let _span = debug_span!("blocking", task).entered();
    f()
}
