//! CSS value sanitization
//!
//! Every user-supplied value passes through [`sanitize_css_value`] before it
//! is interpolated into generated CSS, so no value can close a declaration,
//! a rule or the surrounding `<style>` element.

/// Characters removed from interpolated values
const FORBIDDEN: &[char] = &[';', '"', '\'', '{', '}', '<', '>', '\\'];

/// Strip declaration/rule terminators and surrounding whitespace
pub fn sanitize_css_value(value: &str) -> String {
	value
		.chars()
		.filter(|c| !FORBIDDEN.contains(c))
		.collect::<String>()
		.trim()
		.to_string()
}

/// Whether `value` is already free of forbidden characters
pub fn is_css_safe(value: &str) -> bool {
	!value.contains(FORBIDDEN)
}

/// Escape `value` for a double-quoted CSS string such as an attribute selector.
///
/// Forbidden characters and control characters become hex escapes, everything
/// else is kept, so distinct inputs always produce distinct strings.
pub fn escape_css_string(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		if FORBIDDEN.contains(&c) || c.is_control() {
			escaped.push_str(&format!("\\{:x} ", c as u32));
		} else {
			escaped.push(c);
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("10px", "10px")]
	#[case("red; background: url(evil)", "red background: url(evil)")]
	#[case("\"quoted\"", "quoted")]
	#[case("x} body { color: red", "x body  color: red")]
	#[case("</style><script>", "/stylescript")]
	#[case("  12 ", "12")]
	fn test_sanitize_css_value(#[case] input: &str, #[case] expected: &str) {
		let sanitized = sanitize_css_value(input);

		assert_eq!(sanitized, expected);
		assert!(is_css_safe(&sanitized));
	}

	#[rstest]
	#[case("hero.1", "hero.1")]
	#[case("секция", "секция")]
	#[case("a\"] body {", "a\\22 ] body \\7b ")]
	#[case("x</style>", "x\\3c /style\\3e ")]
	#[case("back\\slash\n", "back\\5c slash\\a ")]
	fn test_escape_css_string(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_css_string(input), expected);
	}

	#[rstest]
	fn test_escape_css_string_is_injective() {
		let inputs = ["hero.1", "hero1", "hero_1", "секция", "a;", "a\\3b "];

		let escaped: std::collections::HashSet<_> = inputs.iter().map(|id| escape_css_string(id)).collect();

		assert_eq!(escaped.len(), inputs.len());
	}
}
