//! Example: Reading NBT files from disk
//!
//! NBT files can be either uncompressed or gzip/zlib compressed.
//! Compressed files are decompressed with flate2 before decoding.
//!
//! Run with: cargo run --example dump -- <path_to_nbt_file>

use std::env;
use std::fs::File;
use std::io::{BufReader, Read};

use flate2::read::{GzDecoder, ZlibDecoder};
use nbt_tree::{BigEndian, LittleEndian, Tag, Value, from_slice};

/// Pretty-print any NBT value recursively
fn dump(tag: &Tag, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    match tag {
        Tag::Byte(v) => format!("{pad}Byte({v})"),
        Tag::Short(v) => format!("{pad}Short({v})"),
        Tag::Int(v) => format!("{pad}Int({v})"),
        Tag::Long(v) => format!("{pad}Long({v})"),
        Tag::Float(v) => format!("{pad}Float({v})"),
        Tag::Double(v) => format!("{pad}Double({v})"),
        Tag::ByteArray(v) => format!("{pad}ByteArray({} bytes)", v.len()),
        Tag::String(v) => format!("{pad}String({v:?})"),
        Tag::IntArray(v) => format!("{pad}IntArray({} ints)", v.len()),
        Tag::List(list) => {
            let mut out = format!("{pad}List<{}>[{}] {{\n", list.el_type().name(), list.len());
            for item in list {
                out.push_str(&dump_value(item, indent + 1));
                out.push('\n');
            }
            out.push_str(&format!("{pad}}}"));
            out
        }
        Tag::Compound(compound) => {
            let mut out = format!("{pad}Compound {{\n");
            for (key, val) in compound {
                let nested = dump_value(val, indent + 1);
                out.push_str(&format!("{}  {:?}: {}\n", pad, key, nested.trim_start()));
            }
            out.push_str(&format!("{pad}}}"));
            out
        }
    }
}

fn dump_value(value: &Value, indent: usize) -> String {
    match value.tag() {
        Some(tag) => dump(tag, indent),
        None => format!("{}<empty>", "  ".repeat(indent)),
    }
}

/// Compression type detected from file header
#[derive(Debug, Clone, Copy)]
enum Compression {
    None,
    Gzip,
    Zlib,
}

/// Detect compression type from the first bytes of data
fn detect_compression(data: &[u8]) -> Compression {
    match data {
        [0x1f, 0x8b, ..] => Compression::Gzip,
        [0x78, 0x01 | 0x5e | 0x9c | 0xda, ..] => Compression::Zlib,
        _ => Compression::None,
    }
}

/// Read and decompress file data if needed
fn read_nbt_file(path: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut raw_data = Vec::new();
    BufReader::new(File::open(path)?).read_to_end(&mut raw_data)?;

    let compression = detect_compression(&raw_data);
    println!("Compression: {:?}", compression);

    let mut data = Vec::new();
    match compression {
        Compression::None => return Ok(raw_data),
        Compression::Gzip => GzDecoder::new(&raw_data[..]).read_to_end(&mut data)?,
        Compression::Zlib => ZlibDecoder::new(&raw_data[..]).read_to_end(&mut data)?,
    };
    Ok(data)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: cargo run --example dump -- <path_to_nbt_file>");
        return Ok(());
    }

    let data = read_nbt_file(&args[1])?;
    println!("Decompressed size: {} bytes", data.len());

    let (name, root) = match from_slice::<BigEndian>(&data) {
        Ok(document) => document,
        Err(e) => {
            println!("Failed to parse as BigEndian NBT: {e}, trying LittleEndian");
            from_slice::<LittleEndian>(&data)?
        }
    };
    println!("{name:?}: {}", dump(&root, 0).trim_start());

    Ok(())
}
