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
use chrono::{Datelike, NaiveDate};
use crossterm::style::Color;

/// Visual classification of an asset's age at display time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorBand {
	White,
	Yellow,
	Red,
	Black,
}

impl ColorBand {
	pub fn color(&self) -> Color {
		match self {
			ColorBand::White => Color::White,
			ColorBand::Yellow => Color::Yellow,
			ColorBand::Red => Color::Red,
			ColorBand::Black => Color::Black,
		}
	}
}

/// Classifies an asset by the calendar years and months between its purchase
/// and `now`. Days are not considered, so the bands are coarse: exactly three
/// years and zero months is still White.
pub fn color_band(purchase_date: &NaiveDate, now: &NaiveDate) -> ColorBand {
	let mut years = now.year() - purchase_date.year();
	let mut months = now.month() as i32 - purchase_date.month() as i32;

	if months < 0 {
		years -= 1;
		months += 12;
	}

	if years > 3 {
		ColorBand::Black
	} else if years == 3 && months > 0 {
		ColorBand::Red
	} else if years == 2 && months >= 6 {
		ColorBand::Yellow
	} else {
		ColorBand::White
	}
}
