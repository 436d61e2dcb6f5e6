use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bincode::Options;

use crate::error::Error;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_no_limit()
}

pub fn serialize_bytes<T: Serialize>(data: &T) -> Result<Vec<u8>, Error> {
    Ok(options().serialize(data)?)
}

pub fn deserialize_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    Ok(options().deserialize(bytes)?)
}

pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(data: &T, path: TPath) -> Result<(), Error> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    // Write all bytes to the target file
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    options().serialize_into(&mut writer, data)?;
    writer.flush().map_err(io_err)
}

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    Ok(options().deserialize_from(reader)?)
}
