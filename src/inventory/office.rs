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
use crate::inventory::currency;
use std::fmt;

/// The office an asset belongs to, which determines its local currency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Office {
	/// Always lower case and always a location the currency table knows
	location: String,
}

impl Office {
	/// Normalizes user input and accepts it only if it names a supported
	/// location.
	pub fn parse(input: &str) -> Option<Office> {
		let location = input.trim().to_lowercase();
		if !currency::is_supported(&location) {
			return None;
		}
		Some(Office { location })
	}

	pub fn location(&self) -> &str {
		&self.location
	}
}

impl fmt::Display for Office {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.location)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_normalizes() {
		let office = Office::parse("  Sverige\n").unwrap();
		assert_eq!(office.location(), "sverige");
		assert_eq!(office.to_string(), "sverige");
		assert_eq!(Office::parse("USA").unwrap().location(), "usa");
	}

	#[test]
	fn test_parse_rejects_unknown() {
		assert!(Office::parse("Norge").is_none());
		assert!(Office::parse("").is_none());
		assert!(Office::parse("us a").is_none());
	}
}
