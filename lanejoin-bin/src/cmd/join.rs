use std::io::{self, Write};

use lanejoin::{extract, Join};

use crate::util::{self, LaneSource};
use crate::Error;

pub fn run(matches: &clap::ArgMatches) -> Result<(), Error> {
    Args::new(matches).and_then(|args| args.run())
}

#[derive(Debug)]
struct Args {
    lanes: Vec<LaneSource>,
    separator: String,
    count: bool,
}

impl Args {
    fn new(m: &clap::ArgMatches) -> Result<Args, Error> {
        let mut lanes = vec![];
        if let Some(specs) = m.values_of("lane") {
            for spec in specs {
                lanes.push(spec.parse::<LaneSource>()?);
            }
        }
        Ok(Args {
            lanes,
            separator: util::unescape(m.value_of("separator").unwrap_or("\\n")),
            count: m.is_present("count"),
        })
    }

    fn run(&self) -> Result<(), Error> {
        let mut builder = Join::builder();
        for lane in &self.lanes {
            match *lane {
                LaneSource::Seq(ref seq) => {
                    builder.push_with(seq, extract::copied)
                }
                LaneSource::Keys(ref map) => {
                    builder.push_with(map, extract::key_copied)
                }
                LaneSource::Values(ref map) => {
                    builder.push_with(map, extract::value_copied)
                }
            }
        }
        let join = builder.build();
        log::debug!("joining {} values from {:?}", join.len(), join);

        let mut wtr = io::BufWriter::new(io::stdout());
        if self.count {
            writeln!(wtr, "{}", join.iter().count())?;
        } else {
            let mut first = true;
            for v in &join {
                if !first {
                    wtr.write_all(self.separator.as_bytes())?;
                }
                first = false;
                write!(wtr, "{}", v)?;
            }
            if !first {
                writeln!(wtr)?;
            }
        }
        wtr.flush()?;
        Ok(())
    }
}
