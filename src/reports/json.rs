use crate::scan::RunReport;

/// Pretty-printed JSON of the full report
pub fn render(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::FileFailure;

    #[test]
    fn test_render_includes_counts_and_failures() {
        let report = RunReport {
            workers: 3,
            elapsed_ms: 7,
            valid: 145,
            invalid: 145,
            files_total: 30,
            files_read: 29,
            failures: vec![FileFailure {
                path: "dados/cpfs_05.txt".into(),
                error: "No such file or directory (os error 2)".to_string(),
            }],
        };

        let value: serde_json::Value = serde_json::from_str(&render(&report).unwrap()).unwrap();
        assert_eq!(value["workers"], 3);
        assert_eq!(value["valid"], 145);
        assert_eq!(value["invalid"], 145);
        assert_eq!(value["failures"][0]["path"], "dados/cpfs_05.txt");
    }
}
