use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = hts_api::Args::parse();
	hts_api::run(args).await
}
