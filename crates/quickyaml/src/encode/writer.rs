pub struct LineWriter {
    out: String,
    indent_cache: String,
}

impl LineWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
        }
    }

    fn write_indent(&mut self, indent: usize) {
        if indent == 0 {
            return;
        }
        if self.indent_cache.len() < indent {
            let missing = indent - self.indent_cache.len();
            self.indent_cache.extend(core::iter::repeat_n(' ', missing));
        }
        self.out.push_str(&self.indent_cache[..indent]);
    }

    pub fn line(&mut self, indent: usize, s: &str) {
        self.write_indent(indent);
        self.out.push_str(s);
        self.out.push('\n');
    }

    pub fn line_kv(&mut self, indent: usize, key: &str, value: &str) {
        self.write_indent(indent);
        self.out.push_str(key);
        self.out.push_str(": ");
        self.out.push_str(value);
        self.out.push('\n');
    }

    pub fn line_list_item(&mut self, indent: usize, value: &str) {
        self.write_indent(indent);
        self.out.push_str("- ");
        self.out.push_str(value);
        self.out.push('\n');
    }

    pub fn line_key_only(&mut self, indent: usize, key: &str) {
        self.write_indent(indent);
        self.out.push_str(key);
        self.out.push(':');
        self.out.push('\n');
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}
