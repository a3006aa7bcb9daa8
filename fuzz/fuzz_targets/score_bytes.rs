#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First zero byte separates candidate from reference
    let split = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    let (candidate, rest) = data.split_at(split);
    let reference = rest.get(1..).unwrap_or_default();

    // Invalid UTF-8 must surface as an error, valid input must never yield NaN
    if let Ok(report) = rouge_scorer::score_bytes(candidate, reference) {
        for (_, result) in report.iter() {
            assert!((0.0..=1.0).contains(&result.f1));
        }
    }
});
