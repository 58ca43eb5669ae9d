#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;
use quickyaml::encode::encode_value_to_string;
use quickyaml::{Mapping, Options, Value, parse_with_options};

const MAX_DEPTH: usize = 8;
const MAX_SEQUENCE_SIZE: usize = 20;
const MAX_MAPPING_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Int(u.arbitrary()?),
            3 => {
                let n: f64 = u.arbitrary()?;
                if n.is_nan() { Value::Null } else { Value::Float(n) }
            }
            4 => Value::String(u.arbitrary()?),
            5..=7 => {
                let size = u.int_in_range(0..=MAX_SEQUENCE_SIZE)?;
                let mut items = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    items.push(fv.to_value(u, depth + 1)?);
                }
                Value::Sequence(items)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_MAPPING_SIZE)?;
                let mut map = Mapping::new();
                for _ in 0..size {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    map.insert(key, fv.to_value(u, depth + 1)?);
                }
                Value::Mapping(map)
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.to_value(&mut u, 0) {
            let indent = u.int_in_range(1..=4).unwrap_or(2);
            let opts = Options::default().with_indent(indent);
            let text = encode_value_to_string(&value, &opts);
            match parse_with_options(text.as_bytes(), &Options::strict()) {
                Ok(decoded) => {
                    if value != decoded {
                        panic!(
                            "roundtrip mismatch!\nOriginal: {value:?}\nYAML:\n{text}\nDecoded: {decoded:?}"
                        );
                    }
                }
                Err(e) => {
                    panic!("failed to parse encoder output!\nOriginal: {value:?}\nYAML:\n{text}\nError: {e}");
                }
            }
        }
    }
});
