//! Build script to generate the embedded equation pool
//!
//! Reads the equation list file and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_equation_list(
        "data/equations.txt",
        &Path::new(&out_dir).join("equations.rs"),
        "EQUATIONS",
        "Curated pool of valid 7-character equations",
    );

    // Rebuild if the equation list changes
    println!("cargo:rerun-if-changed=data/equations.txt");
}

fn generate_equation_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let equations: Vec<&str> = content.lines().collect();
    let count = equations.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated equation list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for equation in equations {
        writeln!(output, "    \"{}\",", equation.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of equations in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
