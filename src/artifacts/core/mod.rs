//! Core utilities and shared types
//!
//! This module contains the output plumbing shared by the commands.

use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

const NO_PAGER_ENV: &str = "NO_PAGER";

/// Whether console output should go through the pager.
///
/// Paging is skipped when `NO_PAGER` is set or stdout is not a terminal.
pub fn should_page() -> bool {
    std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}

/// Console output, either straight to stdout or buffered into a pager.
///
/// The minus pager doesn't implement `std::io::Write`, so the `Paged`
/// variant forwards text to it and [`Output::finish`] hands the collected
/// text over to the pager once the command is done.
pub enum Output {
    Direct(io::Stdout),
    Paged(Pager),
}

impl Output {
    pub fn for_console() -> Self {
        if should_page() {
            Output::Paged(Pager::new())
        } else {
            Output::Direct(io::stdout())
        }
    }

    /// A handle to finish the output after the writer has been moved away.
    pub fn finisher(&self) -> Option<Pager> {
        match self {
            Output::Direct(_) => None,
            Output::Paged(pager) => Some(pager.clone()),
        }
    }

    pub fn finish(pager: Option<Pager>) -> anyhow::Result<()> {
        if let Some(pager) = pager {
            minus::page_all(pager)?;
        }
        Ok(())
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Direct(stdout) => stdout.write(buf),
            Output::Paged(pager) => {
                let s = std::str::from_utf8(buf)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                pager.push_str(s).map_err(io::Error::other)?;
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Direct(stdout) => stdout.flush(),
            Output::Paged(_) => Ok(()),
        }
    }
}
