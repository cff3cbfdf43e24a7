#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(output) = std::str::from_utf8(data) {
        let _ = std::hint::black_box(flashback_git::parse_history(output));
    }
});
