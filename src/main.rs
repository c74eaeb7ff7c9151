#[tokio::main]
async fn main() {
    chartscribe::run().await;
}
