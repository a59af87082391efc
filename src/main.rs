use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use config_locator::config::{
	ConfigResolver, DEFAULT_SRC_DIR_NAME, Encoding, LookupOptions, ProbeOutcome, probe_candidates,
};
use config_locator::root::{MarkerRootFinder, RootFinder};

#[derive(Parser)]
#[command(name = "config-locate")]
#[command(
	author,
	version,
	about = "Find and read a project's config file from conventional locations"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Source directory probed under the project root
	#[arg(long, global = true, value_name = "DIR", default_value = DEFAULT_SRC_DIR_NAME)]
	src_dir: String,

	/// Start root discovery from this directory instead of the current one
	#[arg(short = 'C', long, global = true, value_name = "DIR")]
	cwd: Option<PathBuf>,

	/// Marker file or directory identifying the project root (repeatable)
	#[arg(long = "marker", global = true, value_name = "NAME")]
	markers: Vec<String>,

	/// Enable debug logging
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the absolute path of the config file
	Path {
		/// Config file name, including extension
		name: String,
	},
	/// Print the contents of the config file
	Read {
		/// Config file name, including extension
		name: String,

		/// Encoding used to decode the file
		#[arg(long, default_value = "utf-8")]
		encoding: Encoding,
	},
	/// List every candidate path in search order
	Candidates {
		/// Config file name, including extension
		name: String,
	},
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let runtime = match tokio::runtime::Runtime::new() {
		Ok(runtime) => runtime,
		Err(e) => {
			eprintln!("error: failed to start async runtime: {e}");
			return ExitCode::FAILURE;
		}
	};

	match runtime.block_on(run(cli)) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
	let mut finder = match cli.cwd {
		Some(dir) => MarkerRootFinder::starting_at(dir),
		None => MarkerRootFinder::new(),
	};
	if !cli.markers.is_empty() {
		finder = finder.with_markers(cli.markers);
	}

	let options = LookupOptions {
		src_dir_name: cli.src_dir,
		..Default::default()
	};

	match cli.command {
		Commands::Path { name } => handle_path(finder, &name, &options).await,
		Commands::Read { name, encoding } => {
			let options = LookupOptions { encoding, ..options };
			handle_read(finder, &name, &options).await
		}
		Commands::Candidates { name } => handle_candidates(&finder, &name, &options).await,
	}
}

async fn handle_path(
	finder: MarkerRootFinder,
	name: &str,
	options: &LookupOptions,
) -> Result<ExitCode> {
	let resolver = ConfigResolver::new(finder);
	let path = resolver
		.config_path(name, options)
		.await
		.with_context(|| format!("Failed to resolve {name}"))?;

	match path {
		Some(path) => {
			println!("{}", path.display());
			Ok(ExitCode::SUCCESS)
		}
		None => not_found(name),
	}
}

async fn handle_read(
	finder: MarkerRootFinder,
	name: &str,
	options: &LookupOptions,
) -> Result<ExitCode> {
	let resolver = ConfigResolver::new(finder);
	let content = resolver
		.read_config(name, options)
		.await
		.with_context(|| format!("Failed to read {name}"))?;

	match content {
		Some(content) => {
			let mut stdout = std::io::stdout().lock();
			stdout
				.write_all(content.as_bytes())
				.context("Failed to write to stdout")?;
			Ok(ExitCode::SUCCESS)
		}
		None => not_found(name),
	}
}

async fn handle_candidates(
	finder: &MarkerRootFinder,
	name: &str,
	options: &LookupOptions,
) -> Result<ExitCode> {
	let root = finder
		.find_root()
		.await
		.context("Failed to find project root")?;
	let candidates = probe_candidates(&root, name, &options.src_dir_name)
		.await
		.with_context(|| format!("Failed to probe candidates for {name}"))?;

	println!("Project root: {}\n", root.display());

	let mut selected = false;
	for candidate in &candidates {
		let status = match candidate.outcome {
			ProbeOutcome::File if !selected => {
				selected = true;
				"selected"
			}
			ProbeOutcome::File => "shadowed",
			ProbeOutcome::NotFile => "not a file",
			ProbeOutcome::Missing => "missing",
		};
		println!("  {} ({})", candidate.path.display(), status);
	}

	Ok(ExitCode::SUCCESS)
}

fn not_found(name: &str) -> Result<ExitCode> {
	eprintln!("No config file named {name} found.");
	Ok(ExitCode::FAILURE)
}
