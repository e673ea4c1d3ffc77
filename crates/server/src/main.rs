#[tokio::main]
async fn main() -> anyhow::Result<()> {
    yieldcast_server::start().await
}
