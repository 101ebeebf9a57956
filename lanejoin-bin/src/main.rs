use std::process;

mod app;
mod cmd;
mod util;

pub type Error = anyhow::Error;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", render_error(&err));
        process::exit(1);
    }
}

/// Renders an error and its causes on one line, without a backtrace.
fn render_error(err: &Error) -> String {
    format!("{:#}", err)
}

fn try_main() -> Result<(), Error> {
    let matches = app::app().get_matches();
    match matches.subcommand() {
        ("demo", Some(m)) => {
            util::init_logger(m.occurrences_of("verbose"));
            cmd::demo::run(m)
        }
        ("join", Some(m)) => {
            util::init_logger(m.occurrences_of("verbose"));
            cmd::join::run(m)
        }
        (unknown, _) => anyhow::bail!("unrecognized command: {}", unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::render_error;

    #[test]
    fn error_shows_cause_chain_without_backtrace() {
        let err = anyhow::anyhow!("invalid integer 'x'").context("bad lane");
        let rendered = render_error(&err);
        assert_eq!(rendered, "bad lane: invalid integer 'x'");
        assert!(!rendered.contains("Stack backtrace"));
    }
}
