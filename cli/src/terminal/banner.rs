use colored::*;

use crate::terminal::print;

const WORDMARK: &str = r#"
    ___ _ _      _   _      _         _        _
   / __| (_)__ _| |_| |_ __| |___ __ | |__    | |
  | _|| | / _` | ' \  _/ _` / -_) _|| / /   __|_|__
  |_| |_|_\__, |_||_\__\__,_\___\__||_\_\     (_)
          |___/                     --o--o---(_)---o--o--
"#;

pub fn print() {
    print::print(&format!("{}", WORDMARK.bright_black()));
}
