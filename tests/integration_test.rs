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
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

const CONFIG: &str = "tests/test_data/config.toml";

/// Collects `<name>_in.txt` / `<name>_out.txt` pairs from a test data folder.
/// A missing folder is a test failure, not an empty case list.
fn collect_test_cases(subfolder: &str) -> Vec<(String, String)> {
	let dir_path = format!("tests/test_data/{}", subfolder);
	let entries = fs::read_dir(&dir_path)
		.unwrap_or_else(|e| panic!("cannot read {}: {}", dir_path, e));

	let names: Vec<String> = entries
		.flatten()
		.filter_map(|entry| entry.file_name().into_string().ok())
		.collect();

	let mut test_cases: Vec<(String, String)> = names
		.iter()
		.filter_map(|name| {
			let stem = name.strip_suffix("_in.txt")?;
			let expected = format!("{}_out.txt", stem);
			names.contains(&expected).then(|| (name.clone(), expected))
		})
		.collect();

	test_cases.sort();
	test_cases
}

/// Runs the binary with `stdin` piped in as the user's typed answers.
fn run(stdin: &str, args: Vec<&str>) -> Output {
	let all_args = [vec!["run", "--"], args].concat();

	let mut child = Command::new("cargo")
		.args(all_args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("Failed to execute process");

	// a run that fails early may close its end before reading everything
	if let Some(mut pipe) = child.stdin.take() {
		let _ = pipe.write_all(stdin.as_bytes());
	}

	child.wait_with_output().expect("Failed to wait on process")
}

#[test]
fn test_integration_sessions() {
	let test_cases = collect_test_cases("sessions");
	assert!(!test_cases.is_empty());

	for (input_file, expected_output_file) in test_cases {
		println!("running for {}...", input_file);

		let input = fs::read_to_string(format!(
			"tests/test_data/sessions/{}",
			input_file
		))
		.expect("Failed to read input file");

		let output = run(
			&input,
			vec!["--config", CONFIG, "--today", "2025-06-15", "--no-color"],
		);

		assert!(
			output.status.success(),
			"{} failed processing: {}",
			input_file,
			String::from_utf8_lossy(&output.stderr)
		);

		let stdout = String::from_utf8_lossy(&output.stdout);

		let expected_output = fs::read_to_string(format!(
			"tests/test_data/sessions/{}",
			expected_output_file
		))
		.expect("Failed to read expected output file");

		assert_eq!(
			stdout.trim(),
			expected_output.trim(),
			"Output did not match for {}; expected:\n{}\ngot:\n{}",
			input_file,
			expected_output.trim(),
			stdout.trim()
		);
	}
}

#[test]
fn test_integration_colored_rows() {
	let input = "usa\nlaptop\nDell\nXPS\n2024-06-15\n1000\nno\nno\n";
	let output = run(input, vec!["--config", CONFIG, "--today", "2025-06-15"]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	let row = stdout
		.lines()
		.find(|l| l.contains("| XPS "))
		.expect("asset row missing");

	// white foreground set before the row, reset on the line after it
	assert!(row.starts_with('\u{1b}'));
	assert!(stdout.contains("\u{1b}[0m"));
}

#[test]
fn test_integration_closed_input() {
	let output = run("usa\nlaptop\n", vec!["--config", CONFIG]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(!stdout.contains("List of assets"));
}

#[test]
fn test_integration_should_fail() {
	let input = "usa\nlaptop\nDell\nXPS\n2024-06-15\n1000\nno\nno\n";

	let bad_today = run(input, vec!["--config", CONFIG, "--today", "15/06/2025"]);
	assert!(!bad_today.status.success(), "bad --today unexpectedly succeeded!");

	let missing_config =
		run(input, vec!["--config", "tests/test_data/missing.toml"]);
	assert!(
		!missing_config.status.success(),
		"missing config unexpectedly succeeded!"
	);
}
