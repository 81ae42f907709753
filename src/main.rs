/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::config::config_file::Config;
use crate::input::prompter::Prompter;
use crate::input::session::{Session, SessionOptions};
use anyhow::{anyhow, Error};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

mod config;
mod input;
mod inventory;
mod reports;

#[derive(Parser)]
#[command(
	name = "assetr",
	version = "1.0",
	about = "Asset tracking with per-office currency conversion"
)]
struct Cli {
	/// Custom config file location (default: ~/.config/assetr/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Judge asset ages as of this date instead of today (YYYY-MM-DD)
	#[arg(long)]
	today: Option<String>,

	/// Print table rows without color
	#[arg(long)]
	no_color: bool,

	/// Print debug diagnostics to stderr
	#[arg(short, long)]
	verbose: bool,
}

impl Cli {
	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		self.today()?;
		Ok(())
	}

	fn today(&self) -> Result<NaiveDate, Error> {
		match &self.today {
			Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
				.map_err(|e| anyhow!("invalid --today date '{}': {}", s, e)),
			None => Ok(Local::now().date_naive()),
		}
	}
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	init_tracing(args.verbose);
	args.validate()?;

	let config = Config::load(args.config.as_ref())?;

	let options = SessionOptions {
		today: args.today()?,
		date_format: config.date_format().to_string(),
		use_color: config.color() && !args.no_color,
	};
	tracing::debug!(
		today = %options.today,
		color = options.use_color,
		"starting session"
	);

	let prompter = Prompter::new(
		io::stdin().lock(),
		io::stdout().lock(),
		config.mobile_keyword(),
	);
	let mut session = Session::new(prompter, options);
	session.run()?;

	tracing::debug!(assets = session.assets().len(), "session ended");
	Ok(())
}

/// Diagnostics go to stderr so they never interleave with the table.
/// RUST_LOG takes precedence over --verbose.
fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.without_time()
		.init();
}
