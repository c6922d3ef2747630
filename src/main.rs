use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use sidediff::areas::comparator::Comparator;
use sidediff::artifacts::core::Output;
use sidediff::artifacts::render::terminal::RenderOptions;
use sidediff::commands::html::DEFAULT_OUTPUT;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "sidediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Side-by-side line diff of two texts",
    long_about = "Compares two text files line by line. Blank lines are ignored and \
    surrounding whitespace is trimmed. Every line is classified as unchanged, deleted, \
    inserted or changed, and both texts are shown next to each other.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "html",
        about = "Save the comparison as an HTML page",
        long_about = "This command compares two text files and saves the side-by-side result \
        as an HTML page. The output path defaults to diff.html and must end with .html."
    )]
    Html {
        #[arg(index = 1, help = "The old text")]
        old: String,
        #[arg(index = 2, help = "The new text")]
        new: String,
        #[arg(index = 3, default_value = DEFAULT_OUTPUT, help = "The HTML file to write")]
        output: String,
    },
    #[command(
        name = "show",
        about = "Print the comparison in two columns",
        long_about = "This command compares two text files and prints them side by side. \
        Deleted lines are marked with '-', inserted lines with '+' and changed lines with '~'."
    )]
    Show {
        #[arg(index = 1, help = "The old text")]
        old: String,
        #[arg(index = 2, help = "The new text")]
        new: String,
        #[arg(short, long, default_value_t = RenderOptions::default().width, help = "Width of each column")]
        width: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;

    if std::env::var_os("CLICOLOR_FORCE").is_none() && !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match &cli.command {
        Commands::Html { old, new, output } => {
            let comparator = Comparator::new(&pwd, old, new, Box::new(std::io::stdout()))?;

            comparator.save_html(Path::new(output))?;
        }
        Commands::Show { old, new, width } => {
            let output = Output::for_console();
            let pager = output.finisher();
            let comparator = Comparator::new(&pwd, old, new, Box::new(output))?;

            comparator.show(&RenderOptions::new(*width))?;
            Output::finish(pager)?;
        }
    }

    Ok(())
}
