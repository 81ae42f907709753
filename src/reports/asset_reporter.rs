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
use crate::inventory::asset::{Asset, COLUMN_WIDTHS};
use crate::reports::table::Table;
use anyhow::Error;
use chrono::NaiveDate;
use std::io::Write;

const DIVIDER_WIDTH: usize = 120;

const HEADERS: [&str; 8] = [
	"Office",
	"Asset Type",
	"Brand",
	"Model",
	"Price (USD)",
	"Price (Local)",
	"Office Currency",
	"Purchase Date",
];

pub struct AssetReporter<'a> {
	assets: &'a [Asset],
	now: NaiveDate,
	date_format: &'a str,
	use_color: bool,
}

impl<'a> AssetReporter<'a> {
	pub fn new(
		assets: &'a [Asset],
		now: NaiveDate,
		date_format: &'a str,
		use_color: bool,
	) -> Self {
		Self {
			assets,
			now,
			date_format,
			use_color,
		}
	}

	/// Prints every asset in entry order, each line colored by the asset's
	/// age as of `now`. Nothing is written if any row cannot be formatted.
	pub fn print<W: Write>(&self, out: &mut W) -> Result<(), Error> {
		let mut table = Table::new(&COLUMN_WIDTHS, self.use_color);
		table.add_header(HEADERS.to_vec());
		table.add_separator(DIVIDER_WIDTH);

		for asset in self.assets {
			let (line, band) = asset.display_row(&self.now, self.date_format)?;
			table.add_line(line, band.color());
		}

		writeln!(out)?;
		writeln!(out, "List of assets with currency conversion:")?;
		table.print(out)?;
		Ok(())
	}
}
