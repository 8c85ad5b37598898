//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Prints answers to stdout and failures to stderr
pub struct OutputFormatter {
    timings: bool,
    headers: bool,
    current_day: Option<(u16, u8)>,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// `headers` adds a `== YYYY Day NN ==` line before each day's block
    pub fn new(timings: bool, headers: bool) -> Self {
        Self {
            timings,
            headers,
            current_day: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&mut self, result: &SolverResult) {
        if let Some(header) = self.header_for(result) {
            println!("{header}");
        }
        match self.format_result(result) {
            Ok(line) => println!("{line}"),
            Err(line) => eprintln!("{line}"),
        }
    }

    fn header_for(&mut self, result: &SolverResult) -> Option<String> {
        let key = (result.year, result.day);
        if !self.headers || self.current_day == Some(key) {
            return None;
        }
        let blank = if self.current_day.is_some() { "\n" } else { "" };
        self.current_day = Some(key);
        Some(format!("{blank}== {} Day {:02} ==", result.year, result.day))
    }

    /// The line for one result; `Err` lines belong on stderr
    fn format_result(&self, result: &SolverResult) -> Result<String, String> {
        let prefix = format!("Part {}", result.part);
        match &result.answer {
            Ok(answer) if self.timings => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                Ok(format!(
                    "{prefix}: {answer} ({parse_timing}solve: {})",
                    format_duration(result.solve_duration)
                ))
            }
            Ok(answer) => Ok(format!("{prefix}: {answer}")),
            Err(e) => Err(format!("{prefix}: Error - {e}")),
        }
    }

    /// Print a summary after all results (only with timings enabled)
    pub fn print_summary(&self, results: &[SolverResult]) {
        if !self.timings {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    format_duration(TimeDelta::from_std(d).unwrap_or(TimeDelta::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(day: u8, part: u8, answer: Result<u64, String>) -> SolverResult {
        SolverResult {
            year: 2025,
            day,
            part,
            answer,
            parse_duration: (part == 1).then(|| TimeDelta::microseconds(1500)),
            solve_duration: TimeDelta::microseconds(42),
        }
    }

    #[test]
    fn test_plain_lines() {
        let formatter = OutputFormatter::new(false, false);
        assert_eq!(formatter.format_result(&result(1, 1, Ok(3))), Ok("Part 1: 3".to_string()));
        assert_eq!(
            formatter.format_result(&result(1, 2, Err("boom".into()))),
            Err("Part 2: Error - boom".to_string())
        );
    }

    #[test]
    fn test_timing_suffix() {
        let formatter = OutputFormatter::new(true, false);
        assert_eq!(
            formatter.format_result(&result(1, 1, Ok(3))),
            Ok("Part 1: 3 (parse: 1.50ms, solve: 42µs)".to_string())
        );
        assert_eq!(
            formatter.format_result(&result(1, 2, Ok(6))),
            Ok("Part 2: 6 (solve: 42µs)".to_string())
        );
    }

    #[test]
    fn test_headers_once_per_day() {
        let mut formatter = OutputFormatter::new(false, true);
        assert_eq!(
            formatter.header_for(&result(1, 1, Ok(3))).as_deref(),
            Some("== 2025 Day 01 ==")
        );
        assert_eq!(formatter.header_for(&result(1, 2, Ok(6))), None);
        assert_eq!(
            formatter.header_for(&result(2, 1, Ok(0))).as_deref(),
            Some("\n== 2025 Day 02 ==")
        );

        let mut formatter = OutputFormatter::new(false, false);
        assert_eq!(formatter.header_for(&result(1, 1, Ok(3))), None);
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(2500)), "2.50ms");
        assert_eq!(format_duration(TimeDelta::seconds(3)), "3.00s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }
}
