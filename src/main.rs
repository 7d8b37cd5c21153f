use clap::Parser;
use heic2jpeg::{convert_directory, logging, resolve_directory};

#[derive(Parser)]
#[command(name = "heic2jpeg")]
#[command(about = "Convert HEIC/HEIF images to JPEG", long_about = None)]
struct Cli {
    /// Directory containing HEIC files
    #[arg(value_name = "DIRECTORY", default_value = "uploads")]
    directory: String,
}

fn main() -> anyhow::Result<()> {
    let _ = logging::init();

    let cli = Cli::parse();

    let root = match resolve_directory(&cli.directory) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    };

    // Per-file failures are reported inside the loop and never reach here.
    convert_directory(&root)?;

    Ok(())
}
