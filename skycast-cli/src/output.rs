//! Terminal printing of rendered frames.
//!
//! The frame arrives fully formatted; this module only decides layout.

use skycast_core::Frame;

pub fn print_frame(frame: &Frame) {
    println!();
    println!("  {}", frame.location);
    println!("  {}", frame.date_line);
    println!();
    println!(
        "  {}  {}{}  ({})",
        frame.icon, frame.temperature, frame.unit_suffix, frame.condition
    );
    println!("  {}", frame.feels_like);
    println!("  Units: {}", frame.unit_toggle);
    println!();

    for detail in &frame.details {
        println!("  {:<11} {}", format!("{}:", detail.label), detail.value);
    }

    println!();
    println!("  5-day forecast:");
    for line in &frame.forecast {
        println!(
            "  {:<10} {}  {} / {}  {}",
            line.day, line.icon, line.high, line.low, line.description
        );
    }
    println!();
}
