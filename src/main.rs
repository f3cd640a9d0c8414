use clap::Parser;
use webp_batch::{
    cli::{execute_convert, execute_scan, Cli, Commands, ConvertConfig, ScanConfig},
    logging::init_logging,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            input_directory,
            output_directory,
            quality,
            lossless,
            threads,
            config,
            quiet,
        } => {
            execute_convert(ConvertConfig {
                input_directory,
                output_directory,
                quality,
                lossless,
                threads,
                config_file: config,
                quiet,
            })
            .await
        }
        Commands::Scan {
            input_directory,
            output,
        } => {
            execute_scan(ScanConfig {
                input_directory,
                output_directory: output,
            })
            .await
        }
    };

    if let Err(error) = result {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }
}
