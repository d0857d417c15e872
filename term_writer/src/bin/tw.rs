// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `tw` drives a [`TerminalWriter`] from the command line. Eg:
//!
//! ```shell
//! tw sep = --title "test session starts"
//! tw line PASSED --style green,bold
//! tw source src/lib.rs --indent "    "
//! tw width "中文 ok"
//! ```
//!
//! Logs go to stderr so they never interleave with the writer's output on stdout.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use miette::IntoDiagnostic as _;
use r3bl_term_writer::{DEFAULT_SYNTAX_EXTENSION, MarkupSpec, SyntectHighlighter,
                       TerminalWriter, TerminalWriterConfig, char_count, line_width};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "tw")]
#[command(about = "Write separators, styled lines, and source blocks to the terminal")]
#[command(version)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "Emit markup: detect from the terminal, or force it on or off"
    )]
    pub color: ColorChoice,

    #[arg(
        global = true,
        long,
        default_value_t = LevelFilter::WARN,
        help = "Log level for messages written to stderr (off, error, warn, info, debug, trace)"
    )]
    pub log_level: LevelFilter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn markup_override(self) -> Option<bool> {
        match self {
            ColorChoice::Auto => None,
            ColorChoice::Always => Some(true),
            ColorChoice::Never => Some(false),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "Write a separator line that fills the terminal width")]
    Sep {
        sepchar: String,
        #[arg(long, short)]
        title: Option<String>,
        #[arg(long, short, help = "Width to fill instead of the terminal width")]
        width: Option<usize>,
        #[arg(long, short, help = "Comma separated styles, eg: `red,bold`")]
        style: Option<MarkupSpec>,
    },

    #[clap(about = "Write one line of text")]
    Line {
        text: String,
        #[arg(long, short, help = "Comma separated styles, eg: `red,bold`")]
        style: Option<MarkupSpec>,
    },

    #[clap(about = "Write a file as an indented, highlighted source block")]
    Source {
        file: PathBuf,
        #[arg(long, short, default_value = "")]
        indent: String,
        #[arg(long)]
        no_highlight: bool,
    },

    #[clap(about = "Print the character count and display width of some text")]
    Width { text: String },
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli_arg.global_options.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?cli_arg, "parsed command line");
    run(cli_arg)
}

fn run(cli_arg: CLIArg) -> miette::Result<()> {
    let CLIArg {
        command,
        global_options,
    } = cli_arg;
    let config =
        TerminalWriterConfig::default().with_markup(global_options.color.markup_override());

    match command {
        CLICommand::Sep {
            sepchar,
            title,
            width,
            style,
        } => {
            let mut writer = TerminalWriter::new(config);
            writer.sep(
                &sepchar,
                title.as_deref(),
                width,
                &style.unwrap_or_default(),
            )?;
        }
        CLICommand::Line { text, style } => {
            let mut writer = TerminalWriter::new(config);
            writer.line(&text, &style.unwrap_or_default())?;
        }
        CLICommand::Source {
            file,
            indent,
            no_highlight,
        } => {
            let source = std::fs::read_to_string(&file).into_diagnostic()?;
            let config = if no_highlight {
                config.without_highlighter()
            } else {
                config.with_highlighter(SyntectHighlighter::new(syntax_extension(&file)))
            };
            let mut writer = TerminalWriter::new(config);
            let lines: Vec<&str> = source.lines().collect();
            let indents = vec![indent.as_str(); lines.len()];
            writer.write_source(&lines, &indents)?;
        }
        CLICommand::Width { text } => {
            let mut writer = TerminalWriter::new(config.without_highlighter());
            writer.line(
                &format!("chars: {}, width: {}", char_count(&text), line_width(&text)),
                &MarkupSpec::new(),
            )?;
        }
    }

    Ok(())
}

fn syntax_extension(file: &Path) -> &str {
    file.extension()
        .and_then(|it| it.to_str())
        .unwrap_or(DEFAULT_SYNTAX_EXTENSION)
}
