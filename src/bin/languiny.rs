// Languiny CLI
// Remaps wrong-layout text and runs switch detection from the terminal

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use languiny_core::{remap, Corrector, Detector, Layout, Settings, WordBuffer};

/// Fix text typed in the wrong keyboard layout
#[derive(Parser, Debug)]
#[command(name = "languiny")]
#[command(author = "languiny contributors")]
#[command(version)]
#[command(about = "Fix text typed in the wrong keyboard layout", long_about = None)]
struct Args {
    /// TOML settings file (default: ~/.config/languiny/settings.toml)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print text as it would have been typed under another layout
    Remap {
        /// Layout the text was typed in
        #[arg(short, long, value_parser = parse_layout)]
        from: Option<Layout>,

        /// Layout to re-type the text in
        #[arg(short, long, value_parser = parse_layout)]
        to: Option<Layout>,

        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Score text and report whether a layout switch is recommended
    Check {
        /// Layout currently active
        #[arg(short, long, value_parser = parse_layout)]
        layout: Option<Layout>,

        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Correct wrong-layout words read from stdin, word by word
    Fix {
        /// Layout the input was typed in
        #[arg(short, long, value_parser = parse_layout)]
        layout: Option<Layout>,
    },

    /// List supported layouts
    Layouts,

    /// Print a settings template
    DefaultConfig,
}

/// Accept a layout name (`en_US`, `ru`) or its numeric id
fn parse_layout(s: &str) -> Result<Layout, String> {
    if let Ok(layout) = Layout::from_name(s) {
        return Ok(layout);
    }
    s.trim()
        .parse::<i32>()
        .ok()
        .and_then(|id| Layout::from_id(id).ok())
        .ok_or_else(|| format!("unknown layout '{}'", s))
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Settings::load_default().context("failed to load default settings"),
    }
}

/// Feed `input` through the word buffer and corrector, writing corrected text
fn fix_stream<R: Read, W: Write>(
    mut input: R,
    output: &mut W,
    corrector: &Corrector,
    layout: Layout,
) -> Result<usize> {
    let mut buffer = WordBuffer::new();
    let mut corrected = 0;

    let mut emit = |word: languiny_core::Word, out: &mut W| -> Result<()> {
        match corrector.correct(&word.text, layout) {
            Some(correction) => {
                log::debug!("{} -> {} ({})", word.text, correction.text, correction.layout);
                corrected += 1;
                out.write_all(correction.text.as_bytes())?;
            }
            None => out.write_all(word.text.as_bytes())?,
        }
        if let Some(sep) = word.separator {
            let mut utf8 = [0u8; 4];
            out.write_all(sep.encode_utf8(&mut utf8).as_bytes())?;
        }
        Ok(())
    };

    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read input")?;

    for c in text.chars() {
        if let Some(word) = buffer.push(c) {
            emit(word, &mut *output)?;
        }
    }
    if let Some(word) = buffer.flush(None) {
        emit(word, &mut *output)?;
    }

    Ok(corrected)
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Layouts => {
            for layout in Layout::all() {
                println!("{}\t{}", layout.id(), layout);
            }
        }
        Command::DefaultConfig => {
            print!("{}", languiny_core::settings::default_settings_content());
        }
        Command::Remap { from, to, text } => {
            let settings = load_settings(args.config.as_ref())?;
            let from = from.unwrap_or(settings.primary());
            let to = to.unwrap_or_else(|| settings.counterpart(from));
            println!("{}", remap(&text.join(" "), from, to));
        }
        Command::Check { layout, text } => {
            let settings = load_settings(args.config.as_ref())?;
            let layout = layout.unwrap_or(settings.primary());
            let detector = Detector::new(settings.detector_config());
            let verdict = detector.evaluate(&text.join(" "), layout);

            println!("{}: {:.3}", verdict.current, verdict.current_score);
            if let Some(ref best) = verdict.best {
                println!("{}: {:.3} ({})", best.layout, best.score, best.text);
            }
            match verdict.target() {
                Some(target) => println!("switch to {}", target),
                None => println!("keep {}", layout),
            }
        }
        Command::Fix { layout } => {
            let settings = load_settings(args.config.as_ref())?;
            if !settings.auto_detect() {
                bail!("detection is disabled in settings (detection.auto_detect = false)");
            }
            let layout = layout.unwrap_or(settings.primary());
            let corrector = settings.corrector();
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let corrected = fix_stream(stdin.lock(), &mut out, &corrector, layout)?;
            out.flush()?;
            log::info!("corrected {} word(s)", corrected);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
