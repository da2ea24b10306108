use colored::*;

/// Returns the DataX ASCII art logo
pub fn get_logo() -> String {
    let logo = r#"
  ██████╗  █████╗ ████████╗ █████╗ ██╗  ██╗
  ██╔══██╗██╔══██╗╚══██╔══╝██╔══██╗╚██╗██╔╝
  ██║  ██║███████║   ██║   ███████║ ╚███╔╝
  ██║  ██║██╔══██║   ██║   ██╔══██║ ██╔██╗
  ██████╔╝██║  ██║   ██║   ██║  ██║██╔╝ ██╗
  ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝
    "#;

    logo.to_string()
}

/// Returns a colored version of the logo
pub fn get_colored_logo() -> ColoredString {
    get_logo().bright_cyan()
}

/// Display version information with the ASCII art logo
pub fn display_version() {
    println!("{}", get_colored_logo());
    println!("DataX CLI version {}", env!("CARGO_PKG_VERSION"));
    println!("SQL transform/load lineage tool");
}
