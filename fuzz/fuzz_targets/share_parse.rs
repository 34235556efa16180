#![no_main]

use keyshard_shamir::shares::parse_share;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // parse_share must never panic; it should always return Ok or Err.
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(share) = parse_share(s) {
            // Anything that parses must survive a print/parse cycle
            let reparsed = parse_share(&share.to_string()).expect("reparse");
            assert_eq!(reparsed, share);
        }
    }
});
