/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
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
use anyhow::{anyhow, bail, Error};
use chrono::NaiveDate;
use dirs::home_dir;
use serde::Deserialize;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_MOBILE_KEYWORD: &str = "mobil";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub input: Option<Input>,
	pub display: Option<Display>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Input {
	/// Word accepted at the asset type prompt for mobile devices
	pub mobile_keyword: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Display {
	pub color: Option<bool>,

	/// chrono format string for the purchase date column
	pub date_format: Option<String>,
}

impl Config {
	/// Reads the config from the given path, or the default path if none.
	/// A missing default file is the same as an empty one; a missing custom
	/// file is an error. The file is never created.
	pub fn load(custom_config_path: Option<&String>) -> Result<Config, Error> {
		let config_path = match custom_config_path {
			None => match home_dir() {
				Some(home) => home.join(".config/assetr/config.toml"),
				None => return Ok(Config::default()),
			},
			Some(p) => PathBuf::from(p),
		};

		if !config_path.exists() {
			if custom_config_path.is_some() {
				bail!("config file not found: {}", config_path.display());
			}
			return Ok(Config::default());
		}

		let content = fs::read_to_string(&config_path)?;
		let config = Config::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");
		Ok(config)
	}

	pub fn parse(content: &str) -> Result<Config, Error> {
		let config: Config = toml::from_str(content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		if config.mobile_keyword().trim().is_empty() {
			bail!("input.mobile_keyword may not be empty");
		}
		if config.mobile_keyword().trim().eq_ignore_ascii_case("laptop") {
			bail!("input.mobile_keyword may not be 'laptop'");
		}
		// Rendering a date with a bad format (or one that asks for time or
		// zone fields) panics in to_string, so render a sample up front.
		let mut sample = String::new();
		if write!(sample, "{}", NaiveDate::MIN.format(config.date_format()))
			.is_err()
		{
			bail!("invalid display.date_format: {}", config.date_format());
		}

		Ok(config)
	}

	pub fn mobile_keyword(&self) -> &str {
		self.input
			.as_ref()
			.and_then(|i| i.mobile_keyword.as_deref())
			.unwrap_or(DEFAULT_MOBILE_KEYWORD)
	}

	pub fn color(&self) -> bool {
		self.display.as_ref().and_then(|d| d.color).unwrap_or(true)
	}

	pub fn date_format(&self) -> &str {
		self.display
			.as_ref()
			.and_then(|d| d.date_format.as_deref())
			.unwrap_or(DEFAULT_DATE_FORMAT)
	}
}
