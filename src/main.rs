fn main() -> Result<(), Box<dyn std::error::Error>> {
    fixturegen::init()?;
    let report = fixturegen::generate_default()?;
    log::info!(
        "fixture run complete: written={}, skipped={}, records={}",
        report.written,
        report.skipped,
        report.records
    );
    Ok(())
}
