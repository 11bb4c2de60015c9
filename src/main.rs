// segscope: address-space probe
//
// The binary provides the C `main` itself so that `argc` and `argv` are the
// real launch parameters rather than copies made by the Rust runtime.

#![no_main]

use std::error::Error;
use std::ffi::{c_char, c_int};
use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use segscope::config::{Config, View};
use segscope::probe::{self, globals, LaunchArgs, ScratchBlock};
use segscope::report::{format_address, Report};
use segscope::ui::App;

#[no_mangle]
pub extern "C" fn main(argc: c_int, argv: *const *const c_char) -> c_int {
    // SAFETY: the C runtime passes a null-terminated argument vector that
    // lives for the whole process.
    let args = unsafe { LaunchArgs::from_raw(argc, argv) };

    match run(args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run(args: LaunchArgs<'_>) -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    if config.verbose {
        eprintln!(
            "Probing with a {} byte scratch block ({} launch argument(s))...",
            config.alloc_size,
            args.count()
        );
    }

    probe::observe(args, config.alloc_size, |report, block| {
        present(&config, report, block)
    })?
}

fn present(config: &Config, report: &Report, block: &ScratchBlock) -> Result<(), Box<dyn Error>> {
    if config.verbose {
        let (g1, gi1) = globals::values();
        eprintln!(
            "Scratch block: {} bytes at [{}]",
            block.len(),
            format_address(block.address())
        );
        eprintln!("Static values: g1 = {}, gi1 = {}", g1, gi1);
    }

    match config.view {
        View::Lines => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write!(out, "{}", report)?;
            out.flush()?;
        }
        View::Map => run_viewer(report, block)?,
    }

    Ok(())
}

fn run_viewer(report: &Report, block: &ScratchBlock) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(report, block);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
