#![no_main]

use libfuzzer_sys::fuzz_target;
use multiform::Multipart;

fuzz_target!(|data: &[u8]| {
    let mut multipart = Multipart::new();
    let _ = multipart.parse(
        Some("multipart/form-data; boundary=X-BOUNDARY"),
        data.to_vec(),
    );
});
