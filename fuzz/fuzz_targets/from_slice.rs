#![no_main]

use generic_json_fuzz::generic_json_fuzz_data;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    generic_json_fuzz_data(data);
});
