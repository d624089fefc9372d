//! Sacred Union - translation coverage lint
//!
//! Reports every English key that a Bengali or Marathi dictionary does not
//! translate. Exits with status 1 when any gap is found.

use sacred_union_lib::i18n::Catalog;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalog = Catalog::builtin();
    let report = catalog.coverage_report();

    println!("==============================================");
    println!("   Translation coverage (default: {})", catalog.default_language());
    println!("==============================================\n");

    let mut gaps = 0;
    for entry in &report {
        println!(
            "  {:<3} {:<8} {:>6.1}%  ({}/{})",
            entry.language.code(),
            entry.language.english_name(),
            entry.coverage_percent(),
            entry.total - entry.missing.len(),
            entry.total
        );
        for key in &entry.missing {
            log::warn!("[{}] missing translation: {}", entry.language, key);
        }
        gaps += entry.missing.len();
    }

    println!();
    if gaps > 0 {
        println!("  {} missing translation(s)", gaps);
        std::process::exit(1);
    }
    println!("  All dictionaries complete");
}
