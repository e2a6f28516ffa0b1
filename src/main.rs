//! Month-grid CLI application.
//!
//! # Usage
//! ```ignore
//! monthgrid                    // Current month
//! monthgrid -d 2024-02-10 -f 1 // February 2024, weeks start on Monday
//! monthgrid -n 2               // Two months ahead
//! ```

use monthgrid::args::{Args, get_today_date, init_tracing};
use monthgrid::error::CalendarError;
use monthgrid::formatter::format_month_grid;
use monthgrid::{Calendar, Config, Direction};

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("monthgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CalendarError> {
    let today = get_today_date();
    let config = Config::from_patch(&args.config_patch())?;
    let mut calendar = Calendar::with_today(config, today);

    calendar.set_selection(args.selected_date()?);

    for _ in 0..args.next {
        calendar.navigate(Direction::Next);
    }
    for _ in 0..args.prev {
        calendar.navigate(Direction::Previous);
    }

    let grid = calendar.grid(today)?;
    for line in format_month_grid(&calendar.title(), &calendar.weekdays(), &grid) {
        println!("{}", line);
    }

    Ok(())
}
