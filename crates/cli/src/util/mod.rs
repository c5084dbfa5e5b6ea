pub mod account;
pub mod duration;
pub mod error;
pub mod units;

use nu_ansi_term::{AnsiGenericString, Color, Style};
use std::path::PathBuf;

pub use account::AccountArgs;
pub use duration::parse_duration;
pub use units::{format_ether_per_day, parse_ether_per_day};

pub fn home_dir() -> Result<PathBuf, error::UtilError> {
    let home = if cfg!(windows) {
        std::env::var("USERPROFILE")?
    } else {
        std::env::var("HOME")?
    };
    Ok(PathBuf::from(home))
}

pub fn prompt_cli(msg: impl AsRef<str>) -> Result<String, error::UtilError> {
    eprintln!("{}", Color::Rgb(252, 186, 3).paint(msg.as_ref()));

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_owned())
}

pub fn bold<'a>(msg: impl AsRef<str> + 'a) -> AnsiGenericString<'a, str> {
    Style::new().bold().paint(msg.as_ref().to_owned())
}
