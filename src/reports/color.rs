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
use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use std::io::{self, Write};

/// Holds a foreground color on a writer for as long as it lives. Everything
/// written through the guard is in that color, and the color is reset when
/// the guard is dropped, whether or not the writes succeeded.
pub struct ColorGuard<'a, W: Write> {
	out: &'a mut W,
	active: bool,
}

impl<'a, W: Write> ColorGuard<'a, W> {
	/// With `color` set to None this is a plain pass-through writer.
	pub fn new(out: &'a mut W, color: Option<Color>) -> io::Result<Self> {
		let active = match color {
			Some(c) => {
				queue!(out, SetForegroundColor(c))?;
				true
			},
			None => false,
		};

		Ok(Self { out, active })
	}
}

impl<W: Write> Write for ColorGuard<'_, W> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.out.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.out.flush()
	}
}

impl<W: Write> Drop for ColorGuard<'_, W> {
	fn drop(&mut self) {
		if self.active {
			// nowhere to report a failure from here
			let _ = queue!(self.out, ResetColor);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ansi(command: impl crossterm::Command) -> String {
		let mut buf = Vec::new();
		queue!(buf, command).unwrap();
		String::from_utf8(buf).unwrap()
	}

	#[test]
	fn test_color_wraps_output() {
		let mut buf = Vec::new();
		{
			let mut guard = ColorGuard::new(&mut buf, Some(Color::Red)).unwrap();
			writeln!(guard, "row").unwrap();
		}

		let expected = format!(
			"{}row\n{}",
			ansi(SetForegroundColor(Color::Red)),
			ansi(ResetColor)
		);
		assert_eq!(String::from_utf8(buf).unwrap(), expected);
	}

	#[test]
	fn test_no_color_is_plain() {
		let mut buf = Vec::new();
		{
			let mut guard = ColorGuard::new(&mut buf, None).unwrap();
			write!(guard, "row").unwrap();
		}
		assert_eq!(String::from_utf8(buf).unwrap(), "row");
	}

	#[test]
	fn test_reset_on_early_exit() {
		fn failing_row(out: &mut Vec<u8>) -> io::Result<()> {
			let mut guard = ColorGuard::new(out, Some(Color::Yellow))?;
			write!(guard, "partial")?;
			Err(io::Error::new(io::ErrorKind::Other, "interrupted"))
		}

		let mut buf = Vec::new();
		assert!(failing_row(&mut buf).is_err());
		let output = String::from_utf8(buf).unwrap();
		assert!(output.ends_with(&ansi(ResetColor)));
	}
}
