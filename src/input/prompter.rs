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
use crate::inventory::asset::AssetKind;
use crate::inventory::currency;
use crate::inventory::office::Office;
use anyhow::Error;
use chrono::{NaiveDate, NaiveTime};
use std::io::{BufRead, Write};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Raised when the input stream ends while a prompt is waiting for an answer.
#[derive(Debug, thiserror::Error)]
#[error("input closed")]
pub struct InputClosed;

/// Line-oriented prompting over any reader and writer. Every field getter
/// loops until it gets a valid answer; the only errors it returns are I/O
/// failures and [InputClosed].
pub struct Prompter<R: BufRead, W: Write> {
	input: R,
	output: W,
	mobile_keyword: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
	pub fn new(input: R, output: W, mobile_keyword: &str) -> Self {
		Self {
			input,
			output,
			mobile_keyword: mobile_keyword.trim().to_lowercase(),
		}
	}

	pub fn output(&mut self) -> &mut W {
		&mut self.output
	}

	/// Writes a full line of text.
	pub fn say(&mut self, message: &str) -> Result<(), Error> {
		writeln!(self.output, "{}", message)?;
		Ok(())
	}

	/// Writes the prompt without a newline and reads one line, minus its line
	/// ending. A line that is not valid UTF-8 comes back empty, which every
	/// field rejects.
	pub fn ask(&mut self, prompt: &str) -> Result<String, Error> {
		write!(self.output, "{}", prompt)?;
		self.output.flush()?;

		let mut buf = Vec::new();
		if self.input.read_until(b'\n', &mut buf)? == 0 {
			return Err(InputClosed.into());
		}

		let line = match String::from_utf8(buf) {
			Ok(line) => line,
			Err(e) => {
				tracing::debug!(%e, "discarding line that is not UTF-8");
				String::new()
			},
		};

		Ok(line.trim_end_matches(['\r', '\n']).to_string())
	}

	/// Only an explicit "yes" counts as agreement.
	pub fn confirm(&mut self, prompt: &str) -> Result<bool, Error> {
		let answer = self.ask(prompt)?;
		Ok(answer.trim().eq_ignore_ascii_case("yes"))
	}

	pub fn office(&mut self) -> Result<Office, Error> {
		self.ask_until(
			"Enter office location (Sverige, Tyskland, USA): ",
			"Invalid location. Please enter 'Sverige', 'Tyskland', or 'USA'.",
			Office::parse,
		)
	}

	pub fn asset_kind(&mut self) -> Result<AssetKind, Error> {
		let keyword = self.mobile_keyword.clone();
		let label = capitalize(&keyword);

		self.ask_until(
			&format!("Enter asset type (Laptop/{}): ", label),
			&format!(
				"Invalid asset type. Please enter either 'Laptop' or '{}'.",
				keyword
			),
			|answer| AssetKind::parse(answer, &keyword),
		)
	}

	pub fn brand(&mut self) -> Result<String, Error> {
		self.ask_until(
			"Enter asset brand: ",
			"Brand cannot be empty.",
			parse_non_empty,
		)
	}

	pub fn model(&mut self) -> Result<String, Error> {
		self.ask_until(
			"Enter asset model: ",
			"Model cannot be empty.",
			parse_non_empty,
		)
	}

	pub fn purchase_date(&mut self) -> Result<NaiveDate, Error> {
		self.ask_until(
			"Enter purchase date (yyyy-mm-dd): ",
			"Invalid date format. Please use 'yyyy-mm-dd'.",
			parse_purchase_date,
		)
	}

	pub fn price_usd(&mut self) -> Result<f64, Error> {
		self.ask_until(
			"Enter price in USD: ",
			"Invalid price. Please enter a valid positive number.",
			parse_price,
		)
	}

	fn ask_until<T>(
		&mut self,
		prompt: &str,
		invalid: &str,
		parse: impl Fn(&str) -> Option<T>,
	) -> Result<T, Error> {
		loop {
			let answer = self.ask(prompt)?;
			match parse(&answer) {
				Some(value) => return Ok(value),
				None => {
					tracing::debug!(%answer, "rejected input");
					self.say(invalid)?;
				},
			}
		}
	}
}

fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Keeps the answer as typed, but whitespace alone does not count as a value.
fn parse_non_empty(answer: &str) -> Option<String> {
	let trimmed = answer.trim();
	if trimmed.is_empty() {
		None
	} else {
		Some(trimmed.to_string())
	}
}

/// Accepts a calendar date with `-`, `/` or `.` separators in year-month-day
/// order, optionally followed by a time of day, which is discarded.
fn parse_purchase_date(answer: &str) -> Option<NaiveDate> {
	let answer = answer.trim();
	let (date_part, time_part) = match answer.split_once([' ', 'T']) {
		Some((d, t)) => (d, Some(t.trim())),
		None => (answer, None),
	};

	if let Some(time) = time_part {
		if !TIME_FORMATS
			.iter()
			.any(|f| NaiveTime::parse_from_str(time, f).is_ok())
		{
			return None;
		}
	}

	DATE_FORMATS
		.iter()
		.find_map(|f| NaiveDate::parse_from_str(date_part, f).ok())
}

/// A price is positive and small enough that converting it to any office
/// currency still gives a finite number.
fn parse_price(answer: &str) -> Option<f64> {
	answer
		.trim()
		.parse::<f64>()
		.ok()
		.filter(|price| {
			*price > 0.0 && (price * currency::max_rate()).is_finite()
		})
}
