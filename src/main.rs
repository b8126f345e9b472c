use clap::Parser;
use env_logger::{Builder, Env};
use spybg::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spybg")]
#[command(about = "Static blog generator: Markdown articles into token templates")]
#[command(long_about = "\
Static blog generator: Markdown articles into token templates

Input structure:

  blog/
  ├── spybg.toml                   # Optional overrides (see --print-config)
  ├── templates/
  │   ├── index.html.spybgt        # %SPYBG_ARTICLES_LIST%
  │   ├── article.html.spybgt      # %article.title% %article.date% %article.content%
  │   └── article_short.html.spybgt # %article.title% %article.data% %article.short%
  └── articles/
      └── first-post.md            # {title: ...\\ndate: ...\\nshort: ...}markdown

Output goes to build/ in the current directory:

  build/index.html
  build/arts/first-post.html

Set RUST_LOG=debug for a trace of each step.")]
#[command(version)]
struct Cli {
    /// Input directory holding templates/ and articles/
    input_dir: PathBuf,

    /// Output directory (overrides output_dir from spybg.toml)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print a summary of the generated files
    #[arg(short, long)]
    verbose: bool,

    /// Print a stock spybg.toml with all options documented, then exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let mut config = config::Config::load(&cli.input_dir)?;
    if let Some(output_dir) = &cli.output {
        config = config.with_output_dir(output_dir.to_string_lossy());
    }

    let report = generate::generate(&config)?;
    if cli.verbose {
        output::print_generate_output(&report);
    }

    Ok(())
}
