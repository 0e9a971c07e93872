//! Array-literal emission.

use std::io::{self, Write};

/// Render samples as `static int <name>[] = {\n<v0>, <v1>, ...\n};\n`
pub fn format_c_vector(name: &str, samples: &[i32]) -> String {
    let body = samples
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("static int {name}[] = {{\n{body}\n}};\n")
}

/// Write the array literal to `writer` as one block
pub fn write_c_vector<W: Write>(writer: &mut W, name: &str, samples: &[i32]) -> io::Result<()> {
    writer.write_all(format_c_vector(name, samples).as_bytes())?;
    writer.flush()
}
