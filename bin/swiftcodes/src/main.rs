use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    swiftcodes::run().await
}
