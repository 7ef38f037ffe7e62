use crate::core::{Parameter, Runner, RunnerConfig, Suite};
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::{any::Any, ffi::OsString, path::PathBuf, process::ExitCode};

// Command line accepted by `suite_main`
#[derive(Parser, Debug)]
#[command(
	about = "Run the tests of a registered suite", // Set a short description
	long_about = None, // Disable long description
	disable_help_subcommand = true, // Disable help subcommand
)]
struct SuiteArgs {
	/// only run tests whose full path starts with one of these prefixes
	#[arg(value_name = "FILTER")]
	filters: Vec<String>,

	/// YAML runner configuration; flags given here take precedence
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// run every test this many times
	#[arg(long, value_name = "N")]
	iterations: Option<u32>,

	/// pass a parameter to every test, may be repeated
	#[arg(long, num_args = 2, value_names = ["NAME", "VALUE"])]
	param: Vec<String>,

	/// stop after the first failing test
	#[arg(long)]
	fatal_failures: bool,

	/// print the report without colors
	#[arg(long)]
	no_color: bool,

	/// list the selected tests instead of running them
	#[arg(long)]
	list: bool,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

impl SuiteArgs {
	fn runner_config(&self) -> Result<RunnerConfig> {
		let mut config = match &self.config {
			Some(path) => RunnerConfig::from_path(path)?,
			None => RunnerConfig::default(),
		};

		if !self.filters.is_empty() {
			config.filters = self.filters.clone();
		}
		if let Some(iterations) = self.iterations {
			config.iterations = Some(iterations);
		}
		config.fatal_failures |= self.fatal_failures;
		config.color &= !self.no_color;
		config.params.extend(
			self
				.param
				.chunks_exact(2)
				.map(|pair| Parameter::new(&pair[0], &pair[1])),
		);
		Ok(config)
	}
}

/// Runs `suite` as a command line program would and returns the process exit code.
///
/// `args` starts with the program name. See [`suite_exit_status`] for the codes.
pub fn suite_main<I, T>(suite: &Suite, user_data: &mut dyn Any, args: I) -> ExitCode
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	ExitCode::from(suite_exit_status(suite, user_data, args))
}

/// Like [`suite_main`], returning the raw status: `0` if every selected test succeeded,
/// `1` on failures or a malformed suite, `2` on a command line error.
pub fn suite_exit_status<I, T>(suite: &Suite, user_data: &mut dyn Any, args: I) -> u8
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let args = match SuiteArgs::try_parse_from(args) {
		Ok(args) => args,
		Err(err) => {
			let _ = err.print();
			return if err.use_stderr() { 2 } else { 0 };
		}
	};

	// Initialize logger and set log level based on verbosity flag
	let level = args.verbose.log_level_filter();
	let _ = env_logger::Builder::new()
		.filter_level(level)
		.format_timestamp(None)
		.try_init();
	log::set_max_level(level);

	match run(suite, user_data, &args) {
		Ok(true) => 0,
		Ok(false) => 1,
		Err(err) => {
			log::error!("{err:#}");
			1
		}
	}
}

fn run(suite: &Suite, user_data: &mut dyn Any, args: &SuiteArgs) -> Result<bool> {
	let config = args.runner_config()?;
	let color = config.color;
	let runner = Runner::new(config);

	if args.list {
		for path in runner.list(suite)? {
			println!("{path}");
		}
		return Ok(true);
	}

	let report = runner.run(suite, user_data)?;
	print!("{}", report.render(color));
	Ok(report.is_success())
}
