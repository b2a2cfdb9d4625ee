use crate::linear::matrix::Matrix;
use anyhow::Context;
use anyhow::Result;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use byteorder::LE;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;

/// Element-level little-endian codec.
///
/// Producers and consumers agree on element type and shape by
/// convention; the files carry only a length or shape header ahead
/// of the raw elements in canonical index order.
pub trait Bytes: Sized {
    fn put<W: Write>(&self, w: &mut W) -> std::io::Result<()>;
    fn get<R: Read>(r: &mut R) -> std::io::Result<Self>;
}

impl Bytes for u16 {
    fn put<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_u16::<LE>(*self)
    }
    fn get<R: Read>(r: &mut R) -> std::io::Result<Self> {
        r.read_u16::<LE>()
    }
}
impl Bytes for u32 {
    fn put<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_u32::<LE>(*self)
    }
    fn get<R: Read>(r: &mut R) -> std::io::Result<Self> {
        r.read_u32::<LE>()
    }
}
impl Bytes for u64 {
    fn put<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_u64::<LE>(*self)
    }
    fn get<R: Read>(r: &mut R) -> std::io::Result<Self> {
        r.read_u64::<LE>()
    }
}
impl Bytes for f64 {
    fn put<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_f64::<LE>(*self)
    }
    fn get<R: Read>(r: &mut R) -> std::io::Result<Self> {
        r.read_f64::<LE>()
    }
}

/// The persistence boundary: one value per file at a named path.
///
/// Errors always carry the path; there is no partial-result recovery.
pub trait Disk: Sized {
    fn save(&self, path: &str) -> Result<()>;
    fn load(path: &str) -> Result<Self>;
}

impl<T: Bytes> Disk for Vec<T> {
    fn save(&self, path: &str) -> Result<()> {
        let file = File::create(path).with_context(|| format!("create {}", path))?;
        let mut w = BufWriter::new(file);
        write_vec(self, &mut w).with_context(|| format!("write {}", path))
    }
    fn load(path: &str) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path))?;
        let mut r = BufReader::new(file);
        read_vec(&mut r).with_context(|| format!("read {}", path))
    }
}

impl<T: Bytes> Disk for Matrix<T> {
    fn save(&self, path: &str) -> Result<()> {
        let file = File::create(path).with_context(|| format!("create {}", path))?;
        let mut w = BufWriter::new(file);
        (|| {
            (self.rows() as u64).put(&mut w)?;
            (self.cols() as u64).put(&mut w)?;
            for element in self.data() {
                element.put(&mut w)?;
            }
            w.flush()
        })()
        .with_context(|| format!("write {}", path))
    }
    fn load(path: &str) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path))?;
        let mut r = BufReader::new(file);
        (|| -> std::io::Result<Matrix<T>> {
            let rows = u64::get(&mut r)? as usize;
            let cols = u64::get(&mut r)? as usize;
            let mut data = Vec::with_capacity(rows * cols);
            for _ in 0..rows * cols {
                data.push(T::get(&mut r)?);
            }
            Ok(Matrix::from_raw(rows, cols, data))
        })()
        .with_context(|| format!("read {}", path))
    }
}

fn write_vec<T: Bytes, W: Write>(v: &[T], w: &mut W) -> std::io::Result<()> {
    (v.len() as u64).put(w)?;
    for element in v {
        element.put(w)?;
    }
    w.flush()
}

fn read_vec<T: Bytes, R: Read>(r: &mut R) -> std::io::Result<Vec<T>> {
    let n = u64::get(r)? as usize;
    let mut v = Vec::with_capacity(n);
    for _ in 0..n {
        v.push(T::get(r)?);
    }
    Ok(v)
}
