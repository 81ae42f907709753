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
use crate::input::prompter::{InputClosed, Prompter};
use crate::inventory::asset::Asset;
use crate::inventory::currency::CurrencyError;
use crate::reports::asset_reporter::AssetReporter;
use anyhow::Error;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// Display options that stay fixed for a whole session.
pub struct SessionOptions {
	pub today: NaiveDate,
	pub date_format: String,
	pub use_color: bool,
}

/// One interactive run: collects assets until the user declines twice in a
/// row, printing the full table in between. The asset list lives only as
/// long as the session.
pub struct Session<R: BufRead, W: Write> {
	prompter: Prompter<R, W>,
	options: SessionOptions,
	assets: Vec<Asset>,

	/// Number of upcoming currency conversions to fail on purpose
	#[cfg(test)]
	failing_conversions: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
	pub fn new(prompter: Prompter<R, W>, options: SessionOptions) -> Self {
		Self {
			prompter,
			options,
			assets: Vec::new(),
			#[cfg(test)]
			failing_conversions: 0,
		}
	}

	pub fn assets(&self) -> &[Asset] {
		&self.assets
	}

	/// Runs until the user is done. A closed input stream ends the session
	/// like a final "no" would, without printing anything further.
	pub fn run(&mut self) -> Result<(), Error> {
		match self.run_loop() {
			Err(e) if e.is::<InputClosed>() => {
				tracing::warn!(
					assets = self.assets.len(),
					"input closed; ending session"
				);
				Ok(())
			},
			result => result,
		}
	}

	fn run_loop(&mut self) -> Result<(), Error> {
		let mut add_more = true;

		while add_more {
			self.prompter.say("Welcome to the Asset Tracking System!")?;

			match self.add_asset() {
				Ok(()) => {
					add_more = self
						.prompter
						.confirm("Do you want to add another asset? (yes/no): ")?;
				},
				Err(e) => self.recover(e)?,
			}

			if !add_more {
				if let Err(e) = self.print_assets() {
					self.recover(e)?;
				}

				add_more = self
					.prompter
					.confirm("Do you want to add more products? (yes/no): ")?;
			}
		}

		Ok(())
	}

	/// Collects every field in order, then keeps the asset only if its price
	/// converts to the office's currency.
	fn add_asset(&mut self) -> Result<(), Error> {
		let office = self.prompter.office()?;
		let kind = self.prompter.asset_kind()?;
		let brand = self.prompter.brand()?;
		let model = self.prompter.model()?;
		let purchase_date = self.prompter.purchase_date()?;
		let price_usd = self.prompter.price_usd()?;

		let asset =
			Asset::new(kind, brand, model, purchase_date, price_usd, office);
		self.check_conversion(&asset)?;

		tracing::debug!(
			kind = %asset.kind,
			office = %asset.office,
			price_usd = asset.price_usd,
			"asset added"
		);
		self.assets.push(asset);
		Ok(())
	}

	fn check_conversion(&mut self, asset: &Asset) -> Result<(), CurrencyError> {
		#[cfg(test)]
		if self.failing_conversions > 0 {
			self.failing_conversions -= 1;
			return Err(CurrencyError::UnsupportedLocation(
				asset.office.to_string(),
			));
		}

		asset.local_price().map(|_| ())
	}

	fn print_assets(&mut self) -> Result<(), Error> {
		let reporter = AssetReporter::new(
			&self.assets,
			self.options.today,
			&self.options.date_format,
			self.options.use_color,
		);
		reporter.print(self.prompter.output())
	}

	/// Currency failures abandon the current step and are reported to the
	/// user; anything else ends the session.
	fn recover(&mut self, e: Error) -> Result<(), Error> {
		match e.downcast_ref::<CurrencyError>() {
			Some(err) => {
				tracing::error!(%err, "currency conversion failed");
				self.prompter.say(&format!("Error: {}", err))
			},
			None => Err(e),
		}
	}
}
