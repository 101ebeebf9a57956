use std::collections::BTreeMap;
use std::str::FromStr;

use log::{warn, LevelFilter};

use crate::Error;

/// A lane parsed from the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LaneSource {
    Seq(Vec<i64>),
    Keys(BTreeMap<i64, i64>),
    Values(BTreeMap<i64, i64>),
}

impl FromStr for LaneSource {
    type Err = Error;

    fn from_str(spec: &str) -> Result<LaneSource, Error> {
        let (kind, items) = match spec.find(':') {
            None => anyhow::bail!(
                "lane '{}' is missing a kind, e.g., 'seq:1,2,3'",
                spec
            ),
            Some(i) => (&spec[..i], &spec[i + 1..]),
        };
        match kind {
            "seq" => Ok(LaneSource::Seq(parse_seq(items)?)),
            "keys" => Ok(LaneSource::Keys(parse_map(items)?)),
            "values" => Ok(LaneSource::Values(parse_map(items)?)),
            _ => anyhow::bail!(
                "unknown lane kind '{}' (expected seq, keys or values)",
                kind
            ),
        }
    }
}

fn split_items(items: &str) -> impl Iterator<Item = &str> {
    items.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_int(item: &str) -> Result<i64, Error> {
    item.parse()
        .map_err(|err| anyhow::anyhow!("invalid integer '{}': {}", item, err))
}

fn parse_seq(items: &str) -> Result<Vec<i64>, Error> {
    split_items(items).map(parse_int).collect()
}

fn parse_map(items: &str) -> Result<BTreeMap<i64, i64>, Error> {
    let mut map = BTreeMap::new();
    for item in split_items(items) {
        let (k, v) = match item.find('=') {
            None => anyhow::bail!(
                "map entry '{}' must be written as KEY=VALUE",
                item
            ),
            Some(i) => (parse_int(&item[..i])?, parse_int(&item[i + 1..])?),
        };
        if map.insert(k, v).is_some() {
            warn!("duplicate key {} in map lane, keeping the last value", k);
        }
    }
    Ok(map)
}

/// Replaces the `\n` and `\t` escapes with the characters they name.
pub fn unescape(s: &str) -> String {
    s.replace("\\n", "\n").replace("\\t", "\t")
}

/// Sets up logging to stderr.
///
/// Each `-v` raises the default level by one step, starting from `warn`.
/// Directives in `RUST_LOG` take precedence over the default.
pub fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lanes() {
        assert_eq!(
            "seq:1, 2,3".parse::<LaneSource>().unwrap(),
            LaneSource::Seq(vec![1, 2, 3])
        );
        assert_eq!(
            "seq:".parse::<LaneSource>().unwrap(),
            LaneSource::Seq(vec![])
        );
        let map: BTreeMap<i64, i64> =
            vec![(61, 1), (230, 2)].into_iter().collect();
        assert_eq!(
            "keys:230=2,61=1".parse::<LaneSource>().unwrap(),
            LaneSource::Keys(map.clone())
        );
        assert_eq!(
            "values:61=1,230=2".parse::<LaneSource>().unwrap(),
            LaneSource::Values(map)
        );
    }

    #[test]
    fn reject_bad_lanes() {
        assert!("1,2".parse::<LaneSource>().is_err());
        assert!("list:1".parse::<LaneSource>().is_err());
        assert!("seq:x".parse::<LaneSource>().is_err());
        assert!("keys:1".parse::<LaneSource>().is_err());
    }

    #[test]
    fn escapes() {
        assert_eq!(unescape("a\\tb\\n"), "a\tb\n");
        assert_eq!(unescape(","), ",");
    }
}
