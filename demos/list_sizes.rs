//! Print the built-in paper sizes grouped by standard

use papersizes::registry;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let registry = registry();
    for standard in registry.standards() {
        println!("{standard}");
        for size in registry.sizes_for_standard(&standard.name) {
            println!("  {:<4} {:>5} x {:<5} mm", size.name, size.width, size.height);
        }
    }

    // Names are matched exactly; lookups for anything else come back empty
    for name in std::env::args().skip(1) {
        match papersizes::lookup_sizes(&name) {
            Some(sizes) => {
                for size in sizes {
                    println!("{size}");
                }
            }
            None => println!("{name}: unknown paper size"),
        }
    }
}
