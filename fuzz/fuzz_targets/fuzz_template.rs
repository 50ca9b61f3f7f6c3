#![no_main]
use libfuzzer_sys::fuzz_target;
use spacelog::{RenderContext, Template};

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let template = Template::parse(data);

    let ctx = RenderContext::new("FUZZ", "00:00:00");
    let rendered = template.render("INFO", &ctx);

    // Text without '%' renders to itself
    if !data.contains('%') {
        assert_eq!(rendered, data);
    }
});
