use std::fs;
use std::io::Write;

use facsim::LineStyle;
use testing::{TestLogBuilder, TestLogMode};

const EXPECTED: &str = "\u{feff}-2: Invalid code -2: expected a value between 0 and 3.
-1: Invalid code -1: expected a value between 0 and 3.
0: solid
1: dashed
2: dotted
3: halftone
4: Invalid code 4: expected a value between 0 and 3.
5: Invalid code 5: expected a value between 0 and 3.
default: solid
";

#[test]
fn test_lookup_log() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let builder = TestLogBuilder::new(dir.path(), "line_style");
    let mut log = builder.clone().open()?;
    for code in LineStyle::MIN_CODE - 2..=LineStyle::MAX_CODE + 2 {
        match LineStyle::lookup(code) {
            Ok(style) => writeln!(log, "{}: {}", code, style)?,
            Err(err) => writeln!(log, "{}: {}", code, err)?,
        }
    }
    drop(log);
    let mut log = builder.clone().mode(TestLogMode::Append).open()?;
    writeln!(log, "default: {}", LineStyle::default())?;
    drop(log);
    assert_eq!(fs::read_to_string(builder.path())?, EXPECTED);
    Ok(())
}
