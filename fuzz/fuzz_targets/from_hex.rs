#![no_main]

use libfuzzer_sys::fuzz_target;

use fhexgen::FromHex;

// The reference parser must reject garbage gracefully, never panic.
fuzz_target!(|data: &[u8]| {
    let source = String::from_utf8_lossy(data);
    let _ = f64::from_hex(&source);
});
