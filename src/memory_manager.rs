use memmap::Mmap;
use std::{fs::File, io::Read, mem::size_of, path::Path};

/// A memory manager to hide the underlying type of a read-only buffer.
pub enum MemoryManager {
    /// A memory buffer.
    Mem(Vec<u8>),
    /// A read-only memory mapped buffer.
    Mmap(Mmap),
}

impl MemoryManager {
    /// Reads the whole file into memory.
    pub fn new_mem<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut file = File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        Ok(MemoryManager::Mem(buffer))
    }

    pub fn new_mmap<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path)?;
        // Zero-length files cannot be mapped.
        if file.metadata()?.len() == 0 {
            return Ok(MemoryManager::Mem(Vec::new()));
        }
        Ok(MemoryManager::Mmap(unsafe { Mmap::map(&file)? }))
    }

    pub fn open<P: AsRef<Path>>(path: P, in_memory: bool) -> std::io::Result<Self> {
        if in_memory {
            Self::new_mem(path)
        } else {
            Self::new_mmap(path)
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            MemoryManager::Mem(vec) => vec.as_slice(),
            MemoryManager::Mmap(mmap) => &mmap[..],
        }
    }

    /// Iterates over the little-endian `i64`s from byte offset `pos` to the
    /// end of the buffer. Trailing bytes that do not fill an `i64` are skipped.
    pub fn i64s(&self, pos: usize) -> impl Iterator<Item = i64> + '_ {
        self.as_bytes()
            .get(pos..)
            .unwrap_or(&[])
            .chunks_exact(size_of::<i64>())
            .map(|chunk| {
                let mut bytes = [0; 8];
                bytes.copy_from_slice(chunk);
                i64::from_le_bytes(bytes)
            })
    }
}
