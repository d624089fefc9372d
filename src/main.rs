//! Sacred Union - terminal preview of the hero section
//!
//! Plays the role of the site's presentation layer: it owns the repeating timers,
//! samples the clock on every tick and renders what the library derives from it.

use anyhow::Context;
use clap::Parser;
use sacred_union_lib::core::{Config, HeroSnapshot, Schedule};
use sacred_union_lib::i18n::LocaleResolver;
use sacred_union_lib::store::FileStore;
use sacred_union_lib::temporal::{Clock, SystemClock, ThemeMode, ThemeStore};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "sacred-union", version, about = "Wedding countdown in your language")]
struct Cli {
    /// Switch language (en, bn, mr); remembered for next time
    #[arg(long)]
    lang: Option<String>,

    /// Switch theme (light, dark, auto); remembered for next time
    #[arg(long)]
    theme: Option<ThemeMode>,

    /// Print one snapshot and exit
    #[arg(long)]
    once: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preferences file (defaults to the user config directory)
    #[arg(long)]
    preferences: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let store = Arc::new(
        match &cli.preferences {
            Some(path) => FileStore::open(path.clone()),
            None => FileStore::open_default(),
        }
        .context("opening preferences")?,
    );

    let mut i18n = LocaleResolver::new(Arc::clone(&store));
    let mut theme = ThemeStore::new(Arc::clone(&store));

    if let Some(code) = &cli.lang {
        if !i18n.set_active_language(code) {
            eprintln!("Unsupported language '{}', staying on {}", code, i18n.active_language());
        }
    }
    if let Some(mode) = cli.theme {
        theme.set_mode(mode);
    }

    let target = config.wedding.target().context("parsing wedding date")?;
    let clock = SystemClock;

    print_header(&i18n, &config, clock.now());

    let snapshot = HeroSnapshot::capture(&i18n, &theme, &target, clock.now());
    println!("[{}] {}", snapshot.effective_theme, snapshot.countdown_title);
    if cli.once || snapshot.countdown.is_zero() {
        println!("  {}", snapshot.countdown_line());
        return Ok(());
    }

    let mut countdown_tick =
        tokio::time::interval(Duration::from_millis(config.general.countdown_tick_ms));
    let mut theme_tick = tokio::time::interval(Duration::from_millis(config.general.theme_tick_ms));
    let mut shown_theme = snapshot.effective_theme;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                println!();
                log::info!("Stopping countdown");
                break;
            }
            _ = countdown_tick.tick() => {
                let snapshot = HeroSnapshot::capture(&i18n, &theme, &target, clock.now());
                print!("\r  {}   ", snapshot.countdown_line());
                flush_stdout();
                if snapshot.countdown.is_zero() {
                    println!("\n{}", snapshot.countdown_title);
                    break;
                }
            }
            _ = theme_tick.tick(), if theme.needs_refresh() => {
                let effective = theme.effective(clock.now());
                if effective != shown_theme {
                    println!("\n[{}]", effective);
                    log::info!("Auto theme switched to {}", effective);
                    shown_theme = effective;
                }
            }
        }
    }

    Ok(())
}

fn print_header<S>(i18n: &LocaleResolver<S>, config: &Config, now: chrono::DateTime<chrono::Utc>)
where
    S: sacred_union_lib::store::PreferenceStore,
{
    println!("==============================================");
    println!("   {}", i18n.translate("hero.sacred_union"));
    println!("   {}", i18n.translate("hero.couple_names"));
    println!("   {}", config.wedding.couple_names_local);
    println!("   {} | {}", i18n.translate("hero.wedding_date"), i18n.translate("hero.venue"));
    println!("==============================================\n");

    let schedule = Schedule::new(&config.events, &config.wedding.utc_offset);
    if let Some((event, start)) = schedule.next_upcoming(now) {
        println!(
            "  {}: {} ({}) - {}",
            i18n.translate("events.title"),
            event.name,
            event.local_name,
            start.local().format("%Y-%m-%d %H:%M %:z")
        );
        println!("  {}\n", event.venue);
    }
}

fn flush_stdout() {
    use std::io::Write;
    if let Err(e) = std::io::stdout().flush() {
        log::debug!("stdout flush failed: {}", e);
    }
}
