use crate::intake::Stage;
use crate::strategy::{self, Strategy};
use crate::ui::style;

pub fn print_welcome_banner() {
    println!();
    println!("  {}", style::accent("brandloom"));
    println!(
        "  {}",
        style::dim("Answer a few questions, get a week of content direction.")
    );
    println!();
}

pub fn print_stage_header(stage: Stage) {
    println!();
    println!(
        "  {} {}",
        style::accent(format!("[{}/6]", stage.position())),
        style::header(stage.title())
    );
    println!("  {}", style::dim("─".repeat(50)));
}

pub fn print_bullet(text: &str) {
    println!("  {} {}", style::accent("›"), text);
}

pub fn print_note(text: &str) {
    println!("  {}", style::dim(text));
}

pub fn print_error(text: &str) {
    println!("  {} {}", style::warn("!"), text);
}

pub fn print_strategy(strategy: &Strategy) {
    println!();
    println!("{}", strategy::markdown::render(strategy));
}

pub fn print_saved() {
    println!();
    println!(
        "  {} {}",
        style::success("✓"),
        style::header("Strategy saved.")
    );
    println!(
        "  {} {}",
        style::dim("Bring it back any time with"),
        style::warn("brandloom show")
    );
    println!();
}
