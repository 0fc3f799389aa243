use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use sharpen_build::BuildArguments;
use sharpen_compiler::{map_build_arguments, Backend, BuildOperation, Compiler};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sharpen")]
#[command(author, version, about = "Describe C# compilations as build operations")]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the operations that compile a recipe
    Plan {
        /// Recipe file (sharpen.toml)
        recipe: PathBuf,

        /// Compiler backend
        #[arg(long, default_value = "roslyn")]
        backend: String,

        /// Compiler executable invoked by the compile operation
        #[arg(long, default_value = "csc")]
        compiler: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the resolved compile arguments of a recipe
    Show {
        /// Recipe file (sharpen.toml)
        recipe: PathBuf,

        /// Compiler backend
        #[arg(long, default_value = "roslyn")]
        backend: String,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable listing
    Text,
    /// JSON array of operations
    Json,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Plan {
            recipe,
            backend,
            compiler,
            format,
        } => {
            let backend = Backend::from_name(&backend, compiler)?;
            let arguments = load_recipe(&recipe)?;
            let compile_arguments = map_build_arguments(&arguments, &backend)?;
            let operations = backend.create_compile_operations(&compile_arguments)?;

            info!(
                recipe = %recipe.display(),
                compiler = backend.name(),
                operations = operations.len(),
                "planned compilation"
            );

            match format {
                OutputFormat::Text => print_operations(&operations),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&operations).into_diagnostic()?;
                    println!("{}", json);
                }
            }
        }

        Commands::Show { recipe, backend } => {
            // Only the backend's extensions are needed here; the executable is never invoked.
            let backend = Backend::from_name(&backend, "csc")?;
            let arguments = load_recipe(&recipe)?;
            let compile_arguments = map_build_arguments(&arguments, &backend)?;
            println!("{}", compile_arguments);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_recipe(path: &Path) -> Result<BuildArguments> {
    BuildArguments::from_file(path)
        .map_err(|e| miette::miette!("Failed to load {}: {}", path.display(), e))
}

fn print_operations(operations: &[BuildOperation]) {
    for (index, operation) in operations.iter().enumerate() {
        println!("[{}] {}", index, operation.title);
        println!("    cwd:     {}", operation.working_directory.display());
        println!(
            "    command: {} {}",
            operation.executable.display(),
            operation.arguments
        );
        for input in &operation.inputs {
            println!("    in:      {}", input.display());
        }
        for output in &operation.outputs {
            println!("    out:     {}", output.display());
        }
    }
}
