#![no_main]
use libfuzzer_sys::fuzz_target;
use quickyaml::{Options, parse_documents, parse_with_options};

fuzz_target!(|data: &[u8]| {
    let lenient = parse_with_options(data, &Options::default());
    let strict = parse_with_options(data, &Options::strict());
    // Strict mode only adds indentation errors; whatever it accepts must match.
    if let (Ok(a), Ok(b)) = (&lenient, &strict) {
        if a != b && !has_nan(a) {
            panic!("strict and lenient disagree:\n{a:?}\n{b:?}");
        }
    }
    let _ = parse_documents(data, &Options::default().with_max_depth(64));
});

fn has_nan(v: &quickyaml::Value) -> bool {
    match v {
        quickyaml::Value::Float(f) => f.is_nan(),
        quickyaml::Value::Sequence(items) => items.iter().any(has_nan),
        quickyaml::Value::Mapping(m) => m.iter().any(|(_, v)| has_nan(v)),
        _ => false,
    }
}
