use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};

fn read_magic<R: Read + Seek>(mut r: R, magic: &mut [u8]) -> io::Result<usize> {
    let pos = r.seek(SeekFrom::Current(0))?;
    let n = r.read(magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n)
}

pub fn looks_like_gzip<R: Read + Seek>(r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let n = read_magic(r, &mut magic)?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

pub fn looks_like_bzip2<R: Read + Seek>(r: R) -> io::Result<bool> {
    let mut magic = [0u8; 3];
    let n = read_magic(r, &mut magic)?;
    Ok(n >= 3 && magic == *b"BZh")
}

pub fn open_file(path: &std::path::Path) -> io::Result<File> {
    std::fs::File::open(path)
}
