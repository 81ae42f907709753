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
use thiserror::Error;

/// Fixed conversion rates from USD, keyed by office location. Rates are
/// expressed as units of the local currency per one US dollar.
const RATES: [(&str, f64, &str); 3] = [
	("sverige", 9.5, "SEK"),
	("tyskland", 0.85, "EUR"),
	("usa", 1.0, "USD"),
];

#[derive(Debug, Error, PartialEq)]
pub enum CurrencyError {
	#[error("Unsupported country: {0}")]
	UnsupportedLocation(String),
}

/// Looks up the conversion rate and currency symbol for an office location.
/// The lookup ignores case and surrounding whitespace.
pub fn rate_and_symbol(
	location: &str,
) -> Result<(f64, &'static str), CurrencyError> {
	let normalized = location.trim().to_lowercase();

	RATES
		.iter()
		.find(|(name, _, _)| *name == normalized)
		.map(|(_, rate, symbol)| (*rate, *symbol))
		.ok_or_else(|| CurrencyError::UnsupportedLocation(location.to_string()))
}

pub fn is_supported(location: &str) -> bool {
	rate_and_symbol(location).is_ok()
}

/// The largest rate in the table; prices are bounded so that even this
/// conversion stays finite.
pub fn max_rate() -> f64 {
	RATES.iter().map(|(_, rate, _)| *rate).fold(0.0, f64::max)
}
