const ABOUT: &str = "\
A command line tool for joining differently shaped sequences into one.
";

const ABOUT_DEMO: &str = "\
Joins a vector of integers with the keys of an ordered map.

The vector is [1, 12, 13, 14]. The map has the keys 15, 230 and 61, inserted
in that order. Since the map iterates in ascending key order, the output is:

    1 12 13 14 15 61 230

with one value per line.
";

const ABOUT_JOIN: &str = "\
Joins one or more lanes given on the command line.

Each lane is written as KIND:ITEMS, where ITEMS is a comma separated list
that may be empty. The following kinds are supported:

    seq:1,2,3           A sequence of integers, emitted as given.
    keys:15=34,61=2     An ordered map, of which only the keys are emitted.
    values:15=34,61=2   An ordered map, of which only the values are emitted.

Lanes are emitted in the order given. A map lane is always emitted in
ascending key order, regardless of the order its entries are written in.
";

pub fn app() -> clap::App<'static, 'static> {
    let cmd = |name, about| {
        clap::SubCommand::with_name(name)
            .author(clap::crate_authors!())
            .version(clap::crate_version!())
            .about(about)
    };
    let pos = |name| clap::Arg::with_name(name);
    let flag = |name| clap::Arg::with_name(name).long(name);

    let demo = cmd("demo", ABOUT_DEMO);

    let join = cmd("join", ABOUT_JOIN)
        .arg(
            pos("lane")
                .multiple(true)
                .help("A lane, written as KIND:ITEMS. Zero lanes is valid."),
        )
        .arg(
            flag("separator")
                .short("s")
                .takes_value(true)
                .default_value("\\n")
                .help(
                    "The string written between values. The escapes \\n \
                     and \\t are recognized.",
                ),
        )
        .arg(
            flag("count")
                .short("c")
                .help("Print only the number of values in the join."),
        );

    clap::App::new("lanejoin")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(ABOUT)
        .max_term_width(100)
        .setting(clap::AppSettings::UnifiedHelpMessage)
        .setting(clap::AppSettings::SubcommandRequiredElseHelp)
        .arg(
            flag("verbose")
                .short("v")
                .multiple(true)
                .global(true)
                .help("Log more. Repeat for more detail. RUST_LOG also works."),
        )
        .subcommand(demo)
        .subcommand(join)
}
