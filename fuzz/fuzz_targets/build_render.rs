#![no_main]

use libfuzzer_sys::fuzz_target;
use std::hint::black_box;
use xml_dict::{from_str_with_config, to_string, Config};

#[derive(Debug, arbitrary::Arbitrary)]
struct Driver<'a> {
    config: Config,
    xml: &'a str,
}

fuzz_target!(|driver: Driver| {
    let tree = match from_str_with_config(driver.xml, &driver.config) {
        Ok(tree) => tree,
        Err(_) => return,
    };
    let xml = to_string(&tree);
    // rendered trees may be rejected again, but must never panic
    let _ = black_box(from_str_with_config(&xml, &driver.config));
    black_box(tree.array_at("a.b"));
});
