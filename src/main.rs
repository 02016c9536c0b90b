#[tokio::main]
async fn main() -> std::io::Result<()> {
    booking_availability::run().await
}
