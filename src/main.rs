use fo::{Environment, HostFacts, Settings};
use log::{info, warn};

fn main() {
    // RUST_LOG overrides the default; diagnostics go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    info!("Starting fo v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::from_env();
    let facts = settings.apply_to(HostFacts::new(Environment::capture()));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match fo::run(&settings, &facts, &mut out) {
        Ok(summary) => info!(
            "Printed {} modules ({} empty, {} failed)",
            summary.printed, summary.empty, summary.failed
        ),
        // A closed pipe or full disk is not worth a non-zero exit
        Err(e) => warn!("Failed to write output: {}", e),
    }
}
