use crate::domain::model::Reading;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "package-sorter")]
#[command(about = "Sorts a package into the STANDARD, SPECIAL or REJECTED stack")]
pub struct CliConfig {
    /// Width in centimeters
    #[arg(allow_negative_numbers = true)]
    pub width: Option<String>,

    /// Height in centimeters
    #[arg(allow_negative_numbers = true)]
    pub height: Option<String>,

    /// Length in centimeters
    #[arg(allow_negative_numbers = true)]
    pub length: Option<String>,

    /// Mass in kilograms
    #[arg(allow_negative_numbers = true)]
    pub mass: Option<String>,

    #[arg(long, help = "Print the full classification as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// One reading per parameter; an omitted argument is `Reading::Missing`.
    pub fn readings(&self) -> Vec<Reading> {
        [&self.width, &self.height, &self.length, &self.mass]
            .into_iter()
            .map(|arg| arg.as_deref().map_or(Reading::Missing, Reading::parse))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_from_args() {
        let config = CliConfig::parse_from(["package-sorter", "10", "abc", "-5"]);
        let readings = config.readings();
        assert_eq!(readings.len(), 4);
        assert_eq!(readings[0], Reading::Number(10.0));
        assert_eq!(readings[1], Reading::Text("abc".to_string()));
        assert_eq!(readings[2], Reading::Number(-5.0));
        assert_eq!(readings[3], Reading::Missing);
        assert!(!config.json);
    }
}
