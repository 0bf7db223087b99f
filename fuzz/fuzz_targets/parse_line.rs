#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let split = alb_path_metrics::fuzzing::split_line_input(line);
        if let Ok(record) = alb_path_metrics::fuzzing::parse_line_input(line) {
            debug_assert!(matches!(split, Ok(count) if count >= 13));
            debug_assert!(!record.method.is_empty());
            if let Some(duration) = record.duration {
                debug_assert!(duration.as_secs_f64() >= 0.0);
            }
        }
    }
});
