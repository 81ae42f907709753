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
use crate::reports::color::ColorGuard;
use crossterm::style::Color;
use std::io::{self, Write};

/// Fixed-width table printer. Unlike a report that sizes columns to its
/// content, every column here has a set minimum width so that rows printed
/// in separate passes still line up.
pub struct Table {
	widths: Vec<usize>,
	rows: Vec<Row>,
	use_color: bool,
}

pub enum Row {
	Header(Vec<String>),
	/// A row that was already formatted by its owner, plus its color
	Line(String, Color),
	Separator(usize),
}

impl Table {
	pub fn new(widths: &[usize], use_color: bool) -> Self {
		Self {
			widths: widths.to_vec(),
			rows: Vec::new(),
			use_color,
		}
	}

	/// Adds a header row; cells are padded to the column widths but never
	/// truncated.
	pub fn add_header(&mut self, row: Vec<&str>) {
		self.rows.push(Row::Header(
			row.into_iter().map(|s| s.to_string()).collect(),
		));
	}

	pub fn add_line(&mut self, line: String, color: Color) {
		self.rows.push(Row::Line(line, color));
	}

	/// Adds a divider of `width` dashes.
	pub fn add_separator(&mut self, width: usize) {
		self.rows.push(Row::Separator(width));
	}

	pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
		for row in &self.rows {
			match row {
				Row::Header(cells) => self.print_header(out, cells)?,
				Row::Line(line, color) => {
					let color = self.use_color.then_some(*color);
					let mut guard = ColorGuard::new(out, color)?;
					writeln!(guard, "{}", line)?;
				},
				Row::Separator(width) => {
					writeln!(out, "{:-<width$}", "", width = width)?
				},
			}
		}
		out.flush()
	}

	fn print_header<W: Write>(
		&self,
		out: &mut W,
		cells: &[String],
	) -> io::Result<()> {
		let padded: Vec<String> = cells
			.iter()
			.enumerate()
			.map(|(i, value)| {
				let width = self.widths.get(i).copied().unwrap_or(0);
				format!("{:<width$}", value, width = width)
			})
			.collect();
		writeln!(out, "{}", padded.join(" | "))
	}
}
