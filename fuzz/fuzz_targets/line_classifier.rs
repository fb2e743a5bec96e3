#![no_main]

use keygram::accumulator::{Accumulator, BadRecordPolicy};
use keygram::report::{Report, ReportOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Arbitrary logs must never panic in either stage
        let mut acc = Accumulator::with_policy(BadRecordPolicy::Skip);
        if acc.consume(input.as_bytes()).is_ok() {
            let options = ReportOptions {
                include_percentage: true,
                ..ReportOptions::default()
            };
            let _ = Report::build(acc.tables(), &options).to_text();
        }
    }
});
