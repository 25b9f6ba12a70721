use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    planner::cli::run().await?;
    Ok(())
}
