use std::fs;

use unbundle::app::extract::{ExtractOptions, Extractor, normalize_content};
use unbundle::app::parser;
use unbundle::app::writer::BundleWriter;

#[test]
fn extracting_then_rebundling_preserves_sections() -> anyhow::Result<()> {
    let originals = [
        ("src/app/page.tsx", "export default function Page() {}\n\n\n"),
        ("src/lib/util.ts", "export const x = 1;"),
        ("docs/empty.md", ""),
        ("scripts/crlf.ps1", "Write-Host hi\r\n"),
    ];

    let mut writer = BundleWriter::new();
    for (path, contents) in originals {
        writer.add_file(path, contents);
    }
    let bundle = writer.render();

    let temp = tempfile::tempdir()?;
    let report = Extractor::new(temp.path(), ExtractOptions::default()).extract(&bundle, |_| {})?;
    assert_eq!(report.files.len(), originals.len());

    let mut rebuilt = BundleWriter::new();
    for (path, _) in originals {
        rebuilt.add_file(path, fs::read_to_string(temp.path().join(path))?);
    }
    let rebundled = rebuilt.render();

    let before = parser::parse_sections(&bundle)?;
    let after = parser::parse_sections(&rebundled)?;
    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(&after) {
        assert_eq!(a.path, b.path);
        assert_eq!(normalize_content(a.content), normalize_content(b.content));
    }
    Ok(())
}

#[test]
fn extraction_is_idempotent() -> anyhow::Result<()> {
    let mut writer = BundleWriter::new();
    writer
        .add_file("a/b/c.txt", "nested\n")
        .add_file("top.txt", "top");
    let bundle = writer.render();

    let temp = tempfile::tempdir()?;
    let extractor = Extractor::new(temp.path(), ExtractOptions::default());

    extractor.extract(&bundle, |_| {})?;
    let first = fs::read(temp.path().join("a/b/c.txt"))?;
    extractor.extract(&bundle, |_| {})?;
    let second = fs::read(temp.path().join("a/b/c.txt"))?;

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(temp.path().join("top.txt"))?, "top\n");
    Ok(())
}
