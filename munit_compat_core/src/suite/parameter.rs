use serde::Deserialize;

/// A named string value handed to every test function.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
	pub name: String,
	pub value: String,
}

impl Parameter {
	pub fn new(name: &str, value: &str) -> Self {
		Self {
			name: name.to_string(),
			value: value.to_string(),
		}
	}
}

/// Looks up the value of the first parameter called `name`.
pub fn parameter_get<'a>(params: &'a [Parameter], name: &str) -> Option<&'a str> {
	params
		.iter()
		.find(|param| param.name == name)
		.map(|param| param.value.as_str())
}
