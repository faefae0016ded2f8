#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run_student().await
}
