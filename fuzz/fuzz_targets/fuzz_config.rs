#![no_main]
use libfuzzer_sys::fuzz_target;
use spacelog::Config;

fuzz_target!(|data: &str| {
    // Must not panic on any config text
    if let Ok(config) = Config::parse(data) {
        let _ = config.style_table();
        let _ = config.for_logger("FUZZ");
    }
});
