use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

pub const TRIPS: &str = "id,pickup,dropoff\n\
                         1,\"2016-01-01 14:35:00\",x\n\
                         2,\"2016-01-01 09:05:00\",y\n";

/// Writes `members` as consecutive gzip members of one file.
pub fn write_gz(dir: &Path, name: &str, members: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    for member in members {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(member.as_bytes()).unwrap();
        file.write_all(&encoder.finish().unwrap()).unwrap();
    }
    path
}
