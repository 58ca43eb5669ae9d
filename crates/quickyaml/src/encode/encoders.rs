use crate::{
    encode::{primitives, writer::LineWriter},
    options::Options,
    value::Value,
};

pub fn encode_value(value: &Value, w: &mut LineWriter, opts: &Options, indent: usize) {
    // Nested blocks must sit strictly deeper than their parent to be read back.
    let step = opts.indent.max(1);
    if let Some(inline) = primitives::format_inline(value) {
        w.line(indent, &inline);
        return;
    }
    match value {
        Value::Sequence(items) => {
            for item in items {
                match primitives::format_inline(item) {
                    Some(inline) => w.line_list_item(indent, &inline),
                    None => {
                        // Start list item then nested block
                        w.line(indent, "-");
                        encode_value(item, w, opts, indent + step);
                    }
                }
            }
        }
        Value::Mapping(map) => {
            for (k, v) in map.iter() {
                let key = primitives::format_key(k);
                match primitives::format_inline(v) {
                    Some(inline) => w.line_kv(indent, &key, &inline),
                    None => {
                        w.line_key_only(indent, &key);
                        encode_value(v, w, opts, indent + step);
                    }
                }
            }
        }
        _ => {}
    }
}
