#![no_main]

use generic_json_fuzz::{generic_json_fuzz_key_path, KeyPathInput};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: KeyPathInput| {
    generic_json_fuzz_key_path(&input);
});
