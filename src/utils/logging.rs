use tracing_subscriber::EnvFilter;

/// Initialize tracing for a host binary. `RUST_LOG` overrides the default
/// filter. Safe to call once; hosts with their own subscriber skip this.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("coursetrack=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
