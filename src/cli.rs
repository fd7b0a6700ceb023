use clap::Parser;

/// Runs in the current working directory; there are no positional arguments.
#[derive(Parser, Debug)]
#[command(name = "movie-renamer")]
#[command(author, version, long_about = None)]
#[command(about = "Interactively rename movie files to Name(Year).ext and write .nfo sidecars")]
pub struct Args {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_verbose_count() {
        let args = Args::try_parse_from(["movie-renamer", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);

        let args = Args::try_parse_from(["movie-renamer"]).unwrap();
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Args::try_parse_from(["movie-renamer", "/some/dir"]).is_err());
    }
}
