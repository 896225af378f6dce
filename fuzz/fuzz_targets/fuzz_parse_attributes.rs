#![no_main]
use libfuzzer_sys::fuzz_target;

use agroscore::FarmAttributes;

/// Fuzz the attribute-record deserialization boundary.
///
/// Feeds arbitrary UTF-8 strings through serde; whatever parses must then
/// survive validation and evaluation without panicking.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(attributes) = serde_json::from_str::<FarmAttributes>(s) {
            let _ = agroscore::evaluate(&attributes);
        }
    }
});
