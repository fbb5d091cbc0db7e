//! Range parsing command implementation.

use crate::config::Config;
use crate::filters::{parse_numeric_range, range_satisfies};
use crate::format::Formatter;

/// Parses bedroom/bathroom range text and optionally checks a count against it.
pub struct RangeCommand {
    config: Config,
}

impl RangeCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn execute(&self, text: &str, value: Option<u32>) -> String {
        let spec = parse_numeric_range(text);
        let check = value.map(|requested| (requested, range_satisfies(&spec, requested)));

        Formatter::new(self.config.format).format_range(text, &spec, check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_range_command_check() {
        let cmd = RangeCommand::new(Config::default());

        let output = cmd.execute("1-3", Some(2));
        assert!(output.contains("Range: 1-3 (min 1, max 3)"));
        assert!(output.contains("2 satisfies this range"));

        let output = cmd.execute("1-3", Some(4));
        assert!(output.contains("4 does not satisfy this range"));
    }

    #[test]
    fn test_range_command_unparseable_is_open() {
        let config = Config { format: OutputFormat::Csv, ..Config::default() };
        let output = RangeCommand::new(config).execute("studio", Some(7));
        assert_eq!(output, "input,min,max,requested,satisfied\nstudio,0,unbounded,7,true");
    }
}
