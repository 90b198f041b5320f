use colored::Colorize;

pub fn handle_error(err: anyhow::Error) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let msg = err.to_string().to_lowercase();

    if msg.contains("unknown settings field") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  List every field path with:");
        eprintln!("  {} vicecrm show", "$".dimmed());
    }

    if msg.contains("hex color") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Colors use the #RGB or #RRGGBB form, e.g. #667eea.");
    }

    if msg.contains("logo") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Logos must be PNG, JPG or SVG files of at most 2 MiB.");
    }

    std::process::exit(1);
}
