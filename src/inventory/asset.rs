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
use crate::inventory::age::{color_band, ColorBand};
use crate::inventory::currency::{rate_and_symbol, CurrencyError};
use crate::inventory::office::Office;
use chrono::NaiveDate;
use std::fmt;

/// Column widths shared by the table header and every asset row, in order:
/// office, kind, brand, model, USD price, local price, symbol, date.
pub const COLUMN_WIDTHS: [usize; 8] = [12, 15, 15, 15, 15, 15, 3, 12];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
	Laptop,
	Mobile,
}

impl AssetKind {
	/// Matches normalized user input against the accepted keywords. The
	/// mobile keyword is configurable because it is a localized word.
	pub fn parse(input: &str, mobile_keyword: &str) -> Option<AssetKind> {
		let kind = input.trim().to_lowercase();
		if kind == "laptop" {
			Some(AssetKind::Laptop)
		} else if kind == mobile_keyword.trim().to_lowercase() {
			Some(AssetKind::Mobile)
		} else {
			None
		}
	}
}

impl fmt::Display for AssetKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AssetKind::Laptop => write!(f, "Laptop"),
			AssetKind::Mobile => write!(f, "Mobile"),
		}
	}
}

/// A tracked physical item. Only the input session builds these, after every
/// field has been validated, and they are never changed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Asset {
	pub brand: String,
	pub model: String,
	pub purchase_date: NaiveDate,
	pub price_usd: f64,
	pub kind: AssetKind,
	pub office: Office,
}

impl Asset {
	pub fn new(
		kind: AssetKind,
		brand: String,
		model: String,
		purchase_date: NaiveDate,
		price_usd: f64,
		office: Office,
	) -> Self {
		Self {
			brand,
			model,
			purchase_date,
			price_usd,
			kind,
			office,
		}
	}

	/// The USD price converted at the office's fixed rate.
	pub fn local_price(&self) -> Result<f64, CurrencyError> {
		let (rate, _) = rate_and_symbol(self.office.location())?;
		Ok(self.price_usd * rate)
	}

	pub fn currency_symbol(&self) -> Result<&'static str, CurrencyError> {
		let (_, symbol) = rate_and_symbol(self.office.location())?;
		Ok(symbol)
	}

	pub fn color_band(&self, now: &NaiveDate) -> ColorBand {
		color_band(&self.purchase_date, now)
	}

	/// Formats this asset as one fixed-width table line and classifies it for
	/// coloring. The caller decides how to apply the band.
	pub fn display_row(
		&self,
		now: &NaiveDate,
		date_format: &str,
	) -> Result<(String, ColorBand), CurrencyError> {
		let local_price = self.local_price()?;
		let symbol = self.currency_symbol()?;
		let [office_w, kind_w, brand_w, model_w, usd_w, local_w, sym_w, date_w] =
			COLUMN_WIDTHS;

		let row = format!(
			"{:<office_w$} | {:<kind_w$} | {:<brand_w$} | {:<model_w$} | {:<usd_w$.2} | {:<local_w$.2} | {:<sym_w$} | {:<date_w$}",
			self.office.location(),
			self.kind.to_string(),
			self.brand,
			self.model,
			self.price_usd,
			local_price,
			symbol,
			self.purchase_date.format(date_format).to_string(),
		);

		Ok((row, self.color_band(now)))
	}
}
