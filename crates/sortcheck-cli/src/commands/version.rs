//! Version command implementation.

use sortcheck::{SizeVariant, enabled_canaries};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("sortcheck {VERSION}");
    println!();
    println!("Generates reverse-ordered sequences, sorts them in place, and verifies the result.");
    println!();
    println!("Variants:");
    for variant in SizeVariant::ALL {
        println!(
            "  {:<8} {:>5} elements ({})",
            variant.name(),
            variant.element_count(),
            variant.default_algorithm()
        );
    }
    println!();
    println!("Build info:");
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);

    let canaries = enabled_canaries();
    if !canaries.is_empty() {
        println!("  Canaries:     {}", canaries.join(", "));
    }
}
