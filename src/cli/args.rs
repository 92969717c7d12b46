use std::path::PathBuf;

use clap::Parser;

use crate::provision::ApplyMode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Bulk-provision policy objects and L3 outbound firewall rules across cloud-managed networks"
)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(long = "config", value_name = "PATH", default_value = "dashfw.toml")]
    pub config: PathBuf,

    /// Path to the policy object/group definition table (CSV)
    #[arg(
        long = "objects",
        value_name = "PATH",
        default_value = "policy_objects.csv"
    )]
    pub objects: PathBuf,

    /// Path to the L3 outbound rule table (CSV)
    #[arg(
        long = "rules",
        value_name = "PATH",
        default_value = "l3_outbound_rules.csv"
    )]
    pub rules: PathBuf,

    /// Apply mode for all target networks; prompts interactively when omitted
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ApplyMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_conventional_filenames() {
        let args = Args::parse_from(["dashfw"]);
        assert_eq!(args.config, PathBuf::from("dashfw.toml"));
        assert_eq!(args.objects, PathBuf::from("policy_objects.csv"));
        assert_eq!(args.rules, PathBuf::from("l3_outbound_rules.csv"));
        assert_eq!(args.mode, None);
    }

    #[test]
    fn mode_flag_skips_the_prompt() {
        let args = Args::parse_from(["dashfw", "--mode", "overwrite"]);
        assert_eq!(args.mode, Some(ApplyMode::Overwrite));

        let args = Args::parse_from(["dashfw", "--mode", "merge"]);
        assert_eq!(args.mode, Some(ApplyMode::Merge));
    }
}
