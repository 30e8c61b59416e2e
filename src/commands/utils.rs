use crate::utils::config::STATISTIC_NAMES;
use crate::utils::error::StatisticError;

/// Shown after the option list in `--help`
pub const ABOUT_INPUTS: &str = "Arguments: [file1.json file2.json ... fileN.json]\n\n\
Parses files generated by `go test -json` and computes test set statistics.";

/// Message printed when `--statistic` is absent or unrecognised
pub fn statistic_usage_message(error: Option<&StatisticError>) -> String {
    match error {
        None => "The `--statistic` flag is required.".to_string(),
        Some(err) => format!(
            "{}. The `--statistic` flag must be one of {}.",
            err,
            quoted_statistic_names()
        ),
    }
}

fn quoted_statistic_names() -> String {
    STATISTIC_NAMES
        .iter()
        .map(|name| format!("`{}`", name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_statistic_message() {
        assert_eq!(
            statistic_usage_message(None),
            "The `--statistic` flag is required."
        );
    }

    #[test]
    fn test_unknown_statistic_message() {
        let err = StatisticError::Unknown("mem".to_string());
        assert_eq!(
            statistic_usage_message(Some(&err)),
            "Unknown statistic `mem`. The `--statistic` flag must be one of `pkg-time`, `test-time`."
        );
    }
}
