#[tokio::main]
async fn main() {
    if let Err(e) = rps_arena::run_with_config().await {
        tracing::error!(error = %e, "simulation runtime failed");
        std::process::exit(1);
    }
}
