//! Thamizh - letter codec demo

use std::process::ExitCode;

use clap::Parser;
use thamizh::config::{load_config, save_config, OutputFormat, ThamizhConfig};
use thamizh::{annotations, LetterReport, LetterString};

/// Decode Thamizh words and show their letters and syllables
///
/// Flags are applied on top of the settings file.
#[derive(Debug, Parser)]
#[command(name = "thamizh", version, about)]
struct Cli {
    /// Words to decode
    #[arg(value_name = "WORD", required_unless_present = "save")]
    words: Vec<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the per-code-point annotations
    #[arg(long)]
    annotations: bool,

    /// Separator placed between syllables
    #[arg(long, value_name = "SEP")]
    sep: Option<String>,

    /// Trim this suffix from every word
    #[arg(long, value_name = "SUFFIX")]
    trim: Option<String>,

    /// Append this suffix to every word
    #[arg(long, value_name = "SUFFIX")]
    append: Option<String>,

    /// Persist the effective settings
    #[arg(long)]
    save: bool,
}

impl Cli {
    /// Effective settings: `config` with the flags applied
    fn apply(&self, mut config: ThamizhConfig) -> ThamizhConfig {
        if self.json {
            config.output = OutputFormat::Json;
        }
        if self.annotations {
            config.show_annotations = true;
        }
        if let Some(sep) = &self.sep {
            config.syllable_separator = sep.clone();
        }
        config
    }
}

/// Command line options layered over the settings file
struct Options {
    config: ThamizhConfig,
    trim: Option<String>,
    append: Option<String>,
}

fn print_text(word: &LetterString, opts: &Options) {
    println!("{}", word);
    if opts.config.show_annotations {
        for a in annotations(&word.encode()) {
            println!("  {}", a);
        }
    }
    for letter in word.letters() {
        println!("  {}", letter.describe());
    }
    println!(
        "  syllables: {}",
        word.syllabified(&opts.config.syllable_separator)
    );
}

fn print_json(word: &LetterString, opts: &Options) -> Result<(), serde_json::Error> {
    let letters: Vec<LetterReport> = word.letters().map(LetterReport::from).collect();
    let mut value = serde_json::json!({
        "text": word,
        "letters": letters,
        "syllables": word.syllables(),
    });
    if opts.config.show_annotations {
        let annos: Vec<String> = annotations(&word.encode())
            .iter()
            .map(|a| a.to_string())
            .collect();
        value["annotations"] = serde_json::json!(annos);
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn process(input: &str, opts: &Options) -> Result<(), String> {
    let mut word = LetterString::decode(input).map_err(|e| format!("{}: {}", input, e))?;

    if let Some(suffix) = &opts.trim {
        let suffix = LetterString::decode(suffix).map_err(|e| format!("{}: {}", suffix, e))?;
        let (trimmed, ok) = word.trim_end(&suffix);
        if !ok {
            log::warn!("{} does not end with {}", word, suffix);
        }
        word = trimmed;
    }
    if let Some(suffix) = &opts.append {
        let suffix = LetterString::decode(suffix).map_err(|e| format!("{}: {}", suffix, e))?;
        word = word.append(&suffix);
    }

    match opts.config.output {
        OutputFormat::Text => print_text(&word, opts),
        OutputFormat::Json => print_json(&word, opts).map_err(|e| e.to_string())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    // Logging (warn and above unless RUST_LOG says otherwise)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let opts = Options {
        config: cli.apply(load_config()),
        trim: cli.trim.clone(),
        append: cli.append.clone(),
    };

    if cli.save {
        if let Err(msg) = save_config(&opts.config) {
            log::error!("{}", msg);
            eprintln!("{}", msg);
            return ExitCode::FAILURE;
        }
    }

    let mut failed = false;
    for word in &cli.words {
        if let Err(msg) = process(word, &opts) {
            log::error!("decode failed: {}", msg);
            eprintln!("{}", msg);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
