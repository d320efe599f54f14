use std::collections::HashSet;
use std::path::Path;

fn main() {
    let table_path = Path::new("data/iso639.json");
    validate_table_file(table_path);
    set_build_dependencies();
}

fn validate_table_file(table_path: &Path) {
    // Ensure the alias table exists at build time
    assert!(
        table_path.exists(),
        "\n\nCODE TABLE BUILD ERROR: File not found\n\
         Path: {}\n\
         The ISO 639 alias table must exist before building.\n",
        table_path.display()
    );

    let contents = std::fs::read_to_string(table_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCODE TABLE BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            table_path.display()
        );
    });

    let table: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCODE TABLE BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            table_path.display()
        );
    });

    validate_table_structure(&table);
}

fn validate_table_structure(table: &serde_json::Value) {
    assert!(
        table.is_object(),
        "\n\nCODE TABLE BUILD ERROR: Root must be a JSON object\n\
         Got: {table}\n"
    );

    let languages = table.get("languages").unwrap_or_else(|| {
        panic!(
            "\n\nCODE TABLE BUILD ERROR: Missing 'languages' field\n\
             The table must have a top-level 'languages' array.\n"
        );
    });

    let entries = languages.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCODE TABLE BUILD ERROR: 'languages' must be an array\n\
             Got: {languages}\n"
        );
    });

    let alias_count = validate_entries(entries);

    println!(
        "cargo:warning=Validated code table: {} languages, {alias_count} three-letter aliases",
        entries.len()
    );
}

fn validate_entries(entries: &[serde_json::Value]) -> usize {
    let mut seen: HashSet<String> = HashSet::new();
    let mut alias_count = 0;

    for (i, entry) in entries.iter().enumerate() {
        let alpha2 = entry
            .get("alpha2")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCODE TABLE BUILD ERROR: Entry at index {i} missing 'alpha2' field\n")
            });

        assert_code(alpha2, 2, i);
        assert!(
            seen.insert(alpha2.to_string()),
            "\n\nCODE TABLE BUILD ERROR: Duplicate code '{alpha2}' (index {i})\n"
        );

        let aliases = entry
            .get("alpha3")
            .and_then(|v| v.as_array())
            .unwrap_or_else(|| {
                panic!(
                    "\n\nCODE TABLE BUILD ERROR: Entry '{alpha2}' (index {i}) missing 'alpha3' array\n"
                )
            });

        assert!(
            !aliases.is_empty(),
            "\n\nCODE TABLE BUILD ERROR: Entry '{alpha2}' (index {i}) has no three-letter codes\n"
        );

        for alias in aliases {
            let alpha3 = alias.as_str().unwrap_or("<not a string>");
            assert_code(alpha3, 3, i);
            assert!(
                seen.insert(alpha3.to_string()),
                "\n\nCODE TABLE BUILD ERROR: Duplicate code '{alpha3}' (index {i})\n"
            );
            alias_count += 1;
        }
    }

    alias_count
}

fn assert_code(code: &str, len: usize, index: usize) {
    assert!(
        code.len() == len && code.chars().all(|c| c.is_ascii_lowercase()),
        "\n\nCODE TABLE BUILD ERROR: '{code}' (index {index}) must be {len} lowercase ASCII letters\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the table changes
    println!("cargo:rerun-if-changed=data/iso639.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
