use photo_ledger::observability;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Without a subscriber nothing below would be visible.
    if let Err(error) = observability::init_observability("photo-ledger") {
        eprintln!("photo-ledger failed to initialize tracing: {:?}", error);
        std::process::exit(1);
    }

    if let Err(error) = photo_ledger::run().await {
        error!("photo-ledger exited with error: {:?}", error);
        std::process::exit(1);
    }
}
