//! Band legend command

use auditrisk_reports::render_legend;

use crate::settings::Settings;

/// Print the threshold legend
pub fn run(settings: &Settings) {
    println!("📊 Risk bands");
    println!();
    print!("{}", render_legend(&settings.thresholds, settings.colored));
}
