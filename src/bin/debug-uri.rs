use std::io::stdout;

use svg_data_uri::{Report, SVG_MARKUP, logger};

fn main() -> anyhow::Result<()> {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        log::warn!("Ignoring arguments: {:?}", &args[1..]);
    }

    let report = Report::new(SVG_MARKUP);
    log::info!("Writing data URI for {} byte payload.", report.markup().len());
    report.write_to(&mut stdout().lock())?;

    Ok(())
}
