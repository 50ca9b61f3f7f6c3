#![no_main]
use libfuzzer_sys::fuzz_target;
use spacelog::Color;

fuzz_target!(|data: &str| {
    // Must not panic on any color name or hex string
    if let Ok(color) = data.parse::<Color>() {
        let _ = color.fg_ansi();
    }
});
