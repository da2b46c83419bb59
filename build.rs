use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("placeholder_art.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let asset_path = Path::new("assets").join("placeholder.txt");
    if !asset_path.exists() {
        writeln!(f, "pub const PLACEHOLDER_ART: &str = \"\";").unwrap();
        writeln!(f, "pub const PLACEHOLDER_WIDTH: u16 = 0;").unwrap();
        writeln!(f, "pub const PLACEHOLDER_HEIGHT: u16 = 0;").unwrap();
        return;
    }

    let content = fs::read_to_string(&asset_path).unwrap();

    // Trailing whitespace on art lines is invisible in editors but shifts
    // centering math, so strip it here once.
    let lines: Vec<&str> = content.lines().map(|l| l.trim_end()).collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let height = lines.len();
    let cleaned = lines.join("\n");

    writeln!(f, "pub const PLACEHOLDER_ART: &str = {:?};", cleaned).unwrap();
    writeln!(f, "pub const PLACEHOLDER_WIDTH: u16 = {};", width).unwrap();
    writeln!(f, "pub const PLACEHOLDER_HEIGHT: u16 = {};", height).unwrap();
}
