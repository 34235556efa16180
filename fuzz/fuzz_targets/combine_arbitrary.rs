#![no_main]

use keyshard_shamir::combine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Newline-separated share strings; combine must return Ok or Err, never panic.
    if let Ok(s) = std::str::from_utf8(data) {
        let shares: Vec<&str> = s.lines().collect();
        let _ = combine(&shares);
    }
});
