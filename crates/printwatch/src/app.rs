use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("printwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live terminal dashboard for a 3D printer status endpoint")
        .long_about(
            "printwatch polls a printer status endpoint on a fixed interval and renders \
             the latest known machine state (temperatures, job progress, elapsed time and \
             lifecycle state). Transient fetch failures never corrupt the display: the \
             dashboard freezes on the last good values until a future tick succeeds.",
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only emit error-level log output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("watch")
                .about("Run the live dashboard, polling the status endpoint on a fixed interval")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .short('u')
                        .help("Status endpoint URL (overrides config)"),
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .help("Seconds between polls: 1 for fast refresh, 3 for slow (overrides config)"),
                ),
        )
        .subcommand(
            Command::new("status")
                .about("Fetch the printer status once and print it")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .short('u')
                        .help("Status endpoint URL (overrides config)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_watch_flags() {
        let matches = build_cli()
            .try_get_matches_from(["printwatch", "watch", "--interval", "1", "-u", "http://x/s"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "watch");
        assert_eq!(sub.get_one::<u64>("interval"), Some(&1));
        assert_eq!(sub.get_one::<String>("url").map(String::as_str), Some("http://x/s"));
    }

    #[test]
    fn test_cli_rejects_zero_interval() {
        let result =
            build_cli().try_get_matches_from(["printwatch", "watch", "--interval", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_status_json() {
        let matches = build_cli()
            .try_get_matches_from(["printwatch", "status", "--json"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "status");
        assert!(sub.get_flag("json"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(build_cli().try_get_matches_from(["printwatch"]).is_err());
    }

    #[test]
    fn test_quiet_flag_is_global() {
        let matches = build_cli()
            .try_get_matches_from(["printwatch", "status", "--quiet"])
            .unwrap();
        assert!(matches.get_flag("quiet"));
    }
}
