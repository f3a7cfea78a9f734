//! TTFT Bench CLI entry point.

#[tokio::main]
async fn main() {
    if let Err(e) = ttft_bench_cli::run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
