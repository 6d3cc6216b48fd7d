//! Styled startup banner

use console::style;

/// Display the ASCII art banner
pub fn print_banner() {
    let banner = include_str!("../../templates/banner.txt");
    for line in banner.lines() {
        println!("{}", style(line).magenta().bold());
    }
    println!(
        "  {}",
        style("Reverse-DNS, header and certificate enumeration").dim()
    );
    println!();
}
