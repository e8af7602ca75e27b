#![no_main]

use libfuzzer_sys::fuzz_target;

// Parse/reject failures are expected for almost all random byte strings;
// they are not bugs. A panic anywhere inside `transform` is a bug.
fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }
    let Ok(code) = std::str::from_utf8(data) else {
        return;
    };
    let _ = gasmeter::transform(code);
});
