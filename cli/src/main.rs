use bidipath::{Cli, ColorScheme, logging::init_tracing, run};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("⚠️  Logging disabled: {}", error);
    }

    let colors = ColorScheme::new(!cli.no_color);

    if let Err(error) = run(&cli, &colors) {
        eprintln!("{} {:#}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}
