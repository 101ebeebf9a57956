use std::collections::BTreeMap;
use std::io::{self, Write};

use lanejoin::{extract, Join};

use crate::Error;

pub fn run(_matches: &clap::ArgMatches) -> Result<(), Error> {
    let seq = vec![1, 12, 13, 14];
    let mut map: BTreeMap<i32, f32> = BTreeMap::new();
    map.insert(15, 34.0);
    map.insert(230, 34.0);
    map.insert(61, 34.0);

    let join = Join::builder().lane(&seq).lane_with(&map, extract::key).build();
    log::debug!("demo join: {:?}", join);

    let mut wtr = io::BufWriter::new(io::stdout());
    for v in &join {
        writeln!(wtr, "{}", v)?;
    }
    wtr.flush()?;
    Ok(())
}
