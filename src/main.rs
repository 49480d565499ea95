use clap::{Parser, ValueEnum};
use promptline::core::{compose, render_prompt, PromptConfig, PromptInputs, RenderOptions};
use std::env;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "promptline")]
#[command(about = "A powerline-style shell prompt segment renderer")]
#[command(version = "0.1.0")]
struct Cli {
    /// Exit status of the previous shell command (omit on the first prompt)
    exit_code: Option<String>,

    /// Target shell dialect for escape-sequence wrapping
    #[arg(long, value_enum, default_value_t = Shell::Bash)]
    shell: Shell,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    /// Wrap escapes in readline guard bytes for PS1 embedding
    Bash,
    /// Raw escapes without guard bytes
    Plain,
}

impl Shell {
    fn render_options(self) -> RenderOptions {
        match self {
            Shell::Bash => RenderOptions::bash(),
            Shell::Plain => RenderOptions::plain(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag; logs go to stderr and never
    // pollute the rendered prompt.
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    let config = PromptConfig::load();
    let inputs = PromptInputs::gather(cli.exit_code);
    let prompt = compose(&inputs, &config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = render_prompt(&prompt, &mut out, &cli.shell.render_options()) {
        log::debug!("prompt rendering failed: {e}");
    }
    let _ = out.flush();

    // Always exit 0: a nonzero exit would surface as noise on every
    // interactive prompt.
}
