use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use storefront_banners::config::DEFAULT_OUTPUT_DIR;
use storefront_banners::{
    FeatureBannerGenerator, GeneratorConfig, HeroBannerGenerator, PipelineContext, WrittenBanner,
};

#[derive(Parser)]
#[command(name = "storefront-banners")]
#[command(about = "Generate the storefront's decorative JPEG banners")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory the JPEG files are written to
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print every drawing step
    #[arg(short, long)]
    verbose: bool,

    /// Save intermediate canvases to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Farmer hero banner (sharp and blurred)
    Hero,
    /// Themed feature page banners and field textures
    Features,
}

fn print_written(banners: &[WrittenBanner]) {
    for banner in banners {
        println!(
            "✅ Saved {} ({}x{}px)",
            banner.path.display(),
            banner.width,
            banner.height
        );
    }
}

fn run_hero(config: &GeneratorConfig, context: &PipelineContext) -> anyhow::Result<()> {
    println!("🎨 Creating farmer-themed banner...");
    let written = HeroBannerGenerator::new(config.clone()).generate(context)?;
    print_written(&written);
    Ok(())
}

fn run_features(config: &GeneratorConfig, context: &PipelineContext) -> anyhow::Result<()> {
    println!("🎨 Creating feature page banners...");
    let written = FeatureBannerGenerator::new(config.clone()).generate(context)?;
    print_written(&written);
    Ok(())
}

fn run(args: Cli) -> anyhow::Result<()> {
    let config = GeneratorConfig::new(args.output_dir)
        .with_verbose(args.verbose)
        .with_debug_dir(args.debug_out);
    let context = config.pipeline_context()?;

    match args.command {
        Some(Command::Hero) => run_hero(&config, &context)?,
        Some(Command::Features) => run_features(&config, &context)?,
        None => {
            run_hero(&config, &context)?;
            println!();
            run_features(&config, &context)?;
        }
    }

    println!("\n🎉 Banner generation complete!");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            eprintln!("\nMake sure the output directory exists or can be created and is writable.");
            ExitCode::FAILURE
        }
    }
}
