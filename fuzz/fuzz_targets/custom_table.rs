#![no_main]

use arbitrary::Arbitrary;
use enumfix_edit::{ensure_import, rewrite, PatternTable};
use enumfix_types::migration::PatternEntry;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    patterns: Vec<(String, String)>,
    import_line: String,
    text: String,
}

fuzz_target!(|input: Input| {
    let entries: Vec<PatternEntry> = input
        .patterns
        .iter()
        .map(|(legacy, replacement)| PatternEntry::new(legacy.as_str(), replacement.as_str()))
        .collect();

    // Rejected tables are fine; compiling must just not panic.
    let Ok(table) = PatternTable::new(&entries, input.import_line.as_str()) else { return };

    let out = rewrite(&input.text, &table);
    assert_eq!(out.changed, out.text != input.text);

    // Accepted tables converge after one pass.
    let twice = rewrite(&out.text, &table);
    assert_eq!(twice.text, out.text);
    assert!(!twice.changed);

    let imported = ensure_import(&input.text, table.import_line());
    assert_eq!(ensure_import(&imported, table.import_line()), imported);
});
