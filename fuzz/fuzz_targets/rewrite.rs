#![no_main]

use enumfix_edit::{rewrite, PatternTable};
use libfuzzer_sys::fuzz_target;
use std::sync::LazyLock;

static TABLE: LazyLock<PatternTable> = LazyLock::new(|| {
    PatternTable::from_migration(&enumfix_core::catalog::betting_round())
        .expect("built-in table compiles")
});

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else { return };

    let once = rewrite(text, &TABLE);
    let twice = rewrite(&once.text, &TABLE);

    assert!(!twice.changed, "second rewrite changed text");
    assert_eq!(twice.text, once.text);
    assert_eq!(once.changed, once.text != text);
    if once.replacements == 0 {
        assert!(!once.import_inserted);
    }
    assert!(
        once.text.matches(TABLE.import_line()).count() <= text.matches(TABLE.import_line()).count() + 1
    );
});
