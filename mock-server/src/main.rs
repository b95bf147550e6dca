use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fastbill_mock::MockOptions;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let options = MockOptions {
        trailing_comma: std::env::var_os("MOCK_TRAILING_COMMA").is_some(),
        ..MockOptions::default()
    };
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, email = %options.email, "mock FastBill listening");
    fastbill_mock::run_with(listener, options).await
}
