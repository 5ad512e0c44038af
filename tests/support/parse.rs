//! Minimal readers for the structures the encoders write, so tests can
//! check every field independently of the encoder code.

/// One PNG chunk as found in a file.
#[derive(Debug)]
pub struct Chunk<'a> {
    pub offset: usize,
    pub declared_len: u32,
    pub chunk_type: [u8; 4],
    pub data: &'a [u8],
    pub stored_crc: u32,
}

fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes(bytes[..4].try_into().unwrap())
}

fn le_u16(bytes: &[u8]) -> u16 {
    u16::from_le_bytes(bytes[..2].try_into().unwrap())
}

fn le_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes[..4].try_into().unwrap())
}

/// Walk every chunk after the signature. Panics if a chunk runs past the end.
pub fn png_chunks(png: &[u8]) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut pos = 8;
    while pos < png.len() {
        let declared_len = be_u32(&png[pos..]);
        let data_start = pos + 8;
        let data_end = data_start + declared_len as usize;
        assert!(data_end + 4 <= png.len(), "chunk at {pos} overruns file");
        chunks.push(Chunk {
            offset: pos,
            declared_len,
            chunk_type: png[pos + 4..pos + 8].try_into().unwrap(),
            data: &png[data_start..data_end],
            stored_crc: be_u32(&png[data_end..]),
        });
        pos = data_end + 4;
    }
    chunks
}

/// Bitwise CRC-32, independent of the crate's table-driven one.
pub fn reference_crc32(parts: &[&[u8]]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for part in parts {
        for &byte in *part {
            crc ^= byte as u32;
            for _ in 0..8 {
                let mask = (crc & 1).wrapping_neg();
                crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
            }
        }
    }
    !crc
}

/// ICONDIRENTRY fields.
#[derive(Debug, Clone, Copy)]
pub struct IcoEntry {
    pub width: u8,
    pub height: u8,
    pub color_count: u8,
    pub reserved: u8,
    pub planes: u16,
    pub bit_count: u16,
    pub bytes_in_res: u32,
    pub image_offset: u32,
}

/// Parsed ICONDIR plus its entries.
#[derive(Debug)]
pub struct IcoDir {
    pub reserved: u16,
    pub resource_type: u16,
    pub entries: Vec<IcoEntry>,
}

pub fn parse_ico(ico: &[u8]) -> IcoDir {
    let count = le_u16(&ico[4..]) as usize;
    let entries = (0..count)
        .map(|i| {
            let e = &ico[6 + 16 * i..6 + 16 * (i + 1)];
            IcoEntry {
                width: e[0],
                height: e[1],
                color_count: e[2],
                reserved: e[3],
                planes: le_u16(&e[4..]),
                bit_count: le_u16(&e[6..]),
                bytes_in_res: le_u32(&e[8..]),
                image_offset: le_u32(&e[12..]),
            }
        })
        .collect();
    IcoDir {
        reserved: le_u16(&ico[0..]),
        resource_type: le_u16(&ico[2..]),
        entries,
    }
}

/// Decoded 32-bit DIB: dimensions, top-down RGBA pixels and the raw AND mask.
#[derive(Debug)]
pub struct DecodedDib {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<[u8; 4]>,
    pub mask: Vec<u8>,
}

/// Decode a BITMAPINFOHEADER + BGRA + AND-mask block.
pub fn decode_dib(dib: &[u8]) -> DecodedDib {
    assert_eq!(le_u32(dib), 40, "header size");
    let width = le_u32(&dib[4..]);
    let doubled = le_u32(&dib[8..]);
    assert_eq!(doubled % 2, 0, "height must be doubled");
    let height = doubled / 2;
    assert_eq!(le_u16(&dib[12..]), 1, "planes");
    assert_eq!(le_u16(&dib[14..]), 32, "bit count");
    assert_eq!(le_u32(&dib[16..]), 0, "compression");

    let pixels = &dib[40..40 + (width * height * 4) as usize];
    let mut rgba = vec![[0u8; 4]; (width * height) as usize];
    for (stored_row, row) in pixels.chunks_exact(width as usize * 4).enumerate() {
        let y = height as usize - 1 - stored_row;
        for (x, px) in row.chunks_exact(4).enumerate() {
            rgba[y * width as usize + x] = [px[2], px[1], px[0], px[3]];
        }
    }
    let mask = dib[40 + pixels.len()..].to_vec();
    DecodedDib {
        width,
        height,
        rgba,
        mask,
    }
}
