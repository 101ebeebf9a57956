/*!
Crate `lanejoin` provides a read-only view that joins several sequences of
*different* types into one logical sequence.

Each participating sequence is called a *lane*. A lane is borrowed, never
copied, and is paired with an *extraction rule* that converts each of its
elements into the output type shared by the whole join. The join visits
lanes strictly in the order given and each lane in its own native order. No
merging or reordering happens.

# Example: a vector and the keys of a map

```
use std::collections::BTreeMap;

use lanejoin::{extract, Join};

let seq = vec![1, 12, 13, 14];
let mut map = BTreeMap::new();
map.insert(15, 34.0f32);
map.insert(230, 34.0);
map.insert(61, 34.0);

let join = Join::builder()
    .lane_with(&seq, extract::copied)
    .lane_with(&map, extract::key_copied)
    .build();

// A BTreeMap iterates in ascending key order, so 61 comes before 230.
let got: Vec<i32> = join.iter().collect();
assert_eq!(got, vec![1, 12, 13, 14, 15, 61, 230]);
```

# Example: driving cursors by hand

[`Join::begin`] and [`Join::end`] return [`Cursor`]s. A cursor reads the
current element with [`Cursor::get`] and moves with [`Cursor::advance`].
Empty lanes anywhere in the join are passed over without a trace.

```
use lanejoin::Join;

let (a, b, c) = (vec!["x"], Vec::<&str>::new(), vec!["y", "z"]);
let join = Join::builder().lane(&a).lane(&b).lane(&c).build();

let mut cur = join.begin();
let end = join.end();
let mut out = String::new();
while cur != end {
    out.push_str(cur.get());
    cur.advance();
}
assert_eq!(out, "xyz");

// Reading past the end is an error.
assert!(end.try_get().is_err());
```

# Lane sources

Any `&C` that can be iterated with an iterator that is both `Clone` and
`ExactSizeIterator` is a lane source. This includes slices, arrays, `Vec`,
`VecDeque`, `BTreeMap`, `BTreeSet`, `HashMap` and `HashSet`. Each cursor
keeps its own copy of every lane's position, so any number of cursors may be
created from one join and advanced independently.
*/

#![deny(missing_docs)]

pub use crate::cursor::{Cursor, Iter};
pub use crate::error::{Error, Result};
pub use crate::join::{Join, JoinBuilder};

mod cursor;
mod error;
pub mod extract;
mod join;
mod lane;
