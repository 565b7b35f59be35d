use crate::scan::RunReport;

/// Three lines: elapsed milliseconds, valid count, invalid count
pub fn render(report: &RunReport) -> String {
    format!(
        "Tempo de execução: {} ms\nCPFs válidos: {}\nCPFs inválidos: {}\n",
        report.elapsed_ms, report.valid, report.invalid
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_three_lines() {
        let report = RunReport {
            workers: 30,
            elapsed_ms: 41,
            valid: 150,
            invalid: 150,
            files_total: 30,
            files_read: 30,
            failures: Vec::new(),
        };

        assert_eq!(
            render(&report),
            "Tempo de execução: 41 ms\nCPFs válidos: 150\nCPFs inválidos: 150\n"
        );
    }
}
